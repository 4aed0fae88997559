//! # Translation Table
//!
//! Fixed English/Spanish label catalogs for the invoice document. The tables
//! are immutable after first access and shared by reference, so concurrent
//! renders read them without synchronization.
//!
//! Unknown languages fall back to English; unknown keys fall back to the key
//! itself. Lookups never fail.

use crate::invoice::Language;

/// Localized names for the five invoice statuses.
#[derive(Debug)]
pub struct StatusLabels {
    pub draft: &'static str,
    pub sent: &'static str,
    pub paid: &'static str,
    pub overdue: &'static str,
    pub cancelled: &'static str,
}

/// The complete label set for one language.
///
/// Every field the document template interpolates is here; there is no
/// partial catalog, so the renderer never needs a per-key fallback.
#[derive(Debug)]
pub struct Labels {
    pub invoice: &'static str,
    pub bill_to: &'static str,
    pub details: &'static str,
    pub description: &'static str,
    pub quantity: &'static str,
    pub unit_price: &'static str,
    pub total: &'static str,
    pub subtotal: &'static str,
    pub tax: &'static str,
    pub notes: &'static str,
    pub terms_and_conditions: &'static str,
    pub payment_instructions: &'static str,
    pub bank_details: &'static str,
    pub issue_date: &'static str,
    pub due_date: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub website: &'static str,
    pub tax_id: &'static str,
    pub generated_on: &'static str,
    pub status: StatusLabels,
}

static EN: Labels = Labels {
    invoice: "INVOICE",
    bill_to: "Bill To",
    details: "Details",
    description: "Description",
    quantity: "Quantity",
    unit_price: "Unit Price",
    total: "Total",
    subtotal: "Subtotal",
    tax: "Tax",
    notes: "Notes",
    terms_and_conditions: "Terms & Conditions",
    payment_instructions: "Payment Instructions",
    bank_details: "Bank Details",
    issue_date: "Issue Date",
    due_date: "Due Date",
    phone: "Phone",
    email: "Email",
    website: "Website",
    tax_id: "Tax ID",
    generated_on: "This invoice was generated on",
    status: StatusLabels {
        draft: "Draft",
        sent: "Sent",
        paid: "Paid",
        overdue: "Overdue",
        cancelled: "Cancelled",
    },
};

static ES: Labels = Labels {
    invoice: "ORDEN DE COBRO",
    bill_to: "Cobrar A",
    details: "Detalles",
    description: "Descripción",
    quantity: "Cantidad",
    unit_price: "Precio Unitario",
    total: "Total",
    subtotal: "Subtotal",
    tax: "Impuesto",
    notes: "Notas",
    terms_and_conditions: "Términos y Condiciones",
    payment_instructions: "Instrucciones de Pago",
    bank_details: "Datos Bancarios",
    issue_date: "Fecha de Emisión",
    due_date: "Fecha de Vencimiento",
    phone: "Teléfono",
    email: "Correo Electrónico",
    website: "Sitio Web",
    tax_id: "R.I.F.",
    generated_on: "Esta factura fue generada el",
    status: StatusLabels {
        draft: "Borrador",
        sent: "Enviado",
        paid: "Pagado",
        overdue: "Vencido",
        cancelled: "Cancelado",
    },
};

/// Return the label set for a language. Unknown languages get English.
pub fn get_translations(language: Language) -> &'static Labels {
    match language {
        Language::En => &EN,
        Language::Es => &ES,
    }
}

impl Labels {
    /// Look up a label by its catalog key, including dotted status keys
    /// like `status.paid`.
    fn get(&self, key: &str) -> Option<&'static str> {
        if let Some(status_key) = key.strip_prefix("status.") {
            return match status_key {
                "draft" => Some(self.status.draft),
                "sent" => Some(self.status.sent),
                "paid" => Some(self.status.paid),
                "overdue" => Some(self.status.overdue),
                "cancelled" => Some(self.status.cancelled),
                _ => None,
            };
        }

        match key {
            "invoice" => Some(self.invoice),
            "billTo" => Some(self.bill_to),
            "details" => Some(self.details),
            "description" => Some(self.description),
            "quantity" => Some(self.quantity),
            "unitPrice" => Some(self.unit_price),
            "total" => Some(self.total),
            "subtotal" => Some(self.subtotal),
            "tax" => Some(self.tax),
            "notes" => Some(self.notes),
            "termsAndConditions" => Some(self.terms_and_conditions),
            "paymentInstructions" => Some(self.payment_instructions),
            "bankDetails" => Some(self.bank_details),
            "issueDate" => Some(self.issue_date),
            "dueDate" => Some(self.due_date),
            "phone" => Some(self.phone),
            "email" => Some(self.email),
            "website" => Some(self.website),
            "taxId" => Some(self.tax_id),
            "generatedOn" => Some(self.generated_on),
            _ => None,
        }
    }
}

/// Resolve a label key for a language, returning the key verbatim when it
/// does not exist in the catalog. Never panics.
pub fn translate<'a>(key: &'a str, language: Language) -> &'a str {
    get_translations(language).get(key).unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every label in a set must be non-empty, including all five statuses.
    fn assert_complete(labels: &Labels) {
        let all = [
            labels.invoice,
            labels.bill_to,
            labels.details,
            labels.description,
            labels.quantity,
            labels.unit_price,
            labels.total,
            labels.subtotal,
            labels.tax,
            labels.notes,
            labels.terms_and_conditions,
            labels.payment_instructions,
            labels.bank_details,
            labels.issue_date,
            labels.due_date,
            labels.phone,
            labels.email,
            labels.website,
            labels.tax_id,
            labels.generated_on,
            labels.status.draft,
            labels.status.sent,
            labels.status.paid,
            labels.status.overdue,
            labels.status.cancelled,
        ];
        for label in all {
            assert!(!label.is_empty());
        }
    }

    #[test]
    fn test_label_sets_are_complete() {
        assert_complete(get_translations(Language::En));
        assert_complete(get_translations(Language::Es));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let labels = get_translations(Language::parse("de"));
        assert_eq!(labels.invoice, "INVOICE");
    }

    #[test]
    fn test_translate_flat_key() {
        assert_eq!(translate("billTo", Language::Es), "Cobrar A");
        assert_eq!(translate("taxId", Language::Es), "R.I.F.");
    }

    #[test]
    fn test_translate_dotted_status_key() {
        assert_eq!(translate("status.paid", Language::En), "Paid");
        assert_eq!(translate("status.overdue", Language::Es), "Vencido");
    }

    #[test]
    fn test_translate_unknown_key_returns_key() {
        assert_eq!(translate("status.unknown", Language::En), "status.unknown");
        assert_eq!(translate("nonexistent", Language::Es), "nonexistent");
    }
}
