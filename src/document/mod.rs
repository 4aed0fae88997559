//! # Document Model
//!
//! Builds the render-ready view of an invoice: raw fields merged with
//! formatted dates, formatted amounts, and translated labels. The model is a
//! pure function of the invoice, the issuer profile, and the language;
//! only the generation timestamp in the footer depends on the clock, and
//! tests pin it via [`DocumentModel::build_at`].
//!
//! The model borrows its inputs and never mutates them.

mod html;

pub use html::{escape, render};

use chrono::{Local, NaiveDate};

use crate::format::{format_amount, format_date, format_number};
use crate::i18n::{get_translations, Labels};
use crate::invoice::{Invoice, InvoiceStatus, Language, PersonalData};

/// One line item with its display strings attached.
#[derive(Debug)]
pub struct ItemView<'a> {
    pub description: &'a str,
    pub quantity_display: String,
    pub unit_price_formatted: String,
    pub total_formatted: String,
}

/// Everything the template renderer needs, in one flat structure.
#[derive(Debug)]
pub struct DocumentModel<'a> {
    pub invoice: &'a Invoice,
    pub personal_data: &'a PersonalData,
    pub language: Language,
    pub labels: &'static Labels,
    pub issue_date_formatted: String,
    pub due_date_formatted: String,
    pub status_display: &'static str,
    pub subtotal_formatted: String,
    pub tax_rate_display: String,
    pub tax_amount_formatted: String,
    pub total_formatted: String,
    pub items: Vec<ItemView<'a>>,
    pub generated_date: String,
}

impl<'a> DocumentModel<'a> {
    /// Assemble the view model using today's date for the footer.
    pub fn build(
        invoice: &'a Invoice,
        personal_data: &'a PersonalData,
        language: Language,
    ) -> DocumentModel<'a> {
        Self::build_at(invoice, personal_data, language, Local::now().date_naive())
    }

    /// Assemble the view model with an explicit generation date.
    pub fn build_at(
        invoice: &'a Invoice,
        personal_data: &'a PersonalData,
        language: Language,
        today: NaiveDate,
    ) -> DocumentModel<'a> {
        let labels = get_translations(language);

        let status_display = match invoice.status {
            InvoiceStatus::Draft => labels.status.draft,
            InvoiceStatus::Sent => labels.status.sent,
            InvoiceStatus::Paid => labels.status.paid,
            InvoiceStatus::Overdue => labels.status.overdue,
            InvoiceStatus::Cancelled => labels.status.cancelled,
        };

        let items = invoice
            .items
            .iter()
            .map(|item| ItemView {
                description: &item.description,
                quantity_display: format_number(item.quantity),
                unit_price_formatted: format_amount(item.unit_price),
                total_formatted: format_amount(item.total),
            })
            .collect();

        DocumentModel {
            invoice,
            personal_data,
            language,
            labels,
            issue_date_formatted: format_date(invoice.issue_date, language),
            due_date_formatted: format_date(invoice.due_date, language),
            status_display,
            subtotal_formatted: format_amount(invoice.subtotal),
            tax_rate_display: format_number(invoice.tax_rate),
            tax_amount_formatted: format_amount(invoice.tax_amount),
            total_formatted: format_amount(invoice.total),
            items,
            generated_date: format_date(today, language),
        }
    }

    /// Build the model and expand it to the final HTML document in one step.
    pub fn to_html(&self) -> String {
        render(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::{Client, InvoiceStatus, LineItem};
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_invoice() -> Invoice {
        Invoice {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            client: Client {
                name: "Acme Corp".to_string(),
                email: "billing@acme.test".to_string(),
                phone: None,
                address: Some("1 Main St".to_string()),
                city: Some("Springfield".to_string()),
                state: Some("IL".to_string()),
                zip_code: Some("62701".to_string()),
                country: None,
                tax_id: None,
            },
            invoice_number: "INV-202601-0007".to_string(),
            issue_date: date(2026, 1, 5),
            due_date: date(2026, 2, 4),
            description: None,
            items: vec![LineItem {
                description: "Widget".to_string(),
                quantity: 2.0,
                unit_price: 10.0,
                total: 20.0,
            }],
            subtotal: 20.0,
            tax_rate: 10.0,
            tax_amount: 2.0,
            total: 22.0,
            status: InvoiceStatus::Paid,
            notes: None,
            terms: None,
        }
    }

    #[test]
    fn test_build_formats_dates_and_amounts() {
        let invoice = sample_invoice();
        let pd = PersonalData::placeholder();
        let model = DocumentModel::build_at(&invoice, &pd, Language::En, date(2026, 3, 1));

        assert_eq!(model.issue_date_formatted, "January 5, 2026");
        assert_eq!(model.due_date_formatted, "February 4, 2026");
        assert_eq!(model.subtotal_formatted, "20.00");
        assert_eq!(model.tax_amount_formatted, "2.00");
        assert_eq!(model.total_formatted, "22.00");
        assert_eq!(model.tax_rate_display, "10");
        assert_eq!(model.generated_date, "March 1, 2026");
    }

    #[test]
    fn test_build_transforms_items_in_order() {
        let mut invoice = sample_invoice();
        invoice.items.push(LineItem {
            description: "Gadget".to_string(),
            quantity: 1.5,
            unit_price: 8.0,
            total: 12.0,
        });
        let pd = PersonalData::placeholder();
        let model = DocumentModel::build_at(&invoice, &pd, Language::En, date(2026, 3, 1));

        assert_eq!(model.items.len(), 2);
        assert_eq!(model.items[0].description, "Widget");
        assert_eq!(model.items[0].quantity_display, "2");
        assert_eq!(model.items[0].unit_price_formatted, "10.00");
        assert_eq!(model.items[1].description, "Gadget");
        assert_eq!(model.items[1].quantity_display, "1.5");
    }

    #[test]
    fn test_build_translates_status() {
        let invoice = sample_invoice();
        let pd = PersonalData::placeholder();

        let en = DocumentModel::build_at(&invoice, &pd, Language::En, date(2026, 3, 1));
        assert_eq!(en.status_display, "Paid");

        let es = DocumentModel::build_at(&invoice, &pd, Language::Es, date(2026, 3, 1));
        assert_eq!(es.status_display, "Pagado");
        assert_eq!(es.generated_date, "1 de marzo de 2026");
    }

    #[test]
    fn test_build_with_placeholder_profile_never_fails() {
        let invoice = sample_invoice();
        let pd = PersonalData::placeholder();
        let model = DocumentModel::build_at(&invoice, &pd, Language::En, date(2026, 3, 1));
        assert_eq!(model.personal_data.business_name, "Your Business Name");
    }
}
