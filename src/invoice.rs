//! # Invoice Domain Model
//!
//! Read-only input types for the document pipeline: the invoice itself, its
//! embedded client, the issuer profile, and the language selector.
//!
//! The pipeline never creates, mutates, or persists these. They arrive fully
//! resolved from the surrounding request layer (which owns authorization and
//! storage) and are only read during rendering. Wire names are camelCase to
//! match the surrounding JSON API.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    /// Canonical lowercase name, used for translation keys and CSS classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }
}

/// Document language selector.
///
/// Anything that is not a recognized language code parses as English, so an
/// unknown `?lang=` value can never fail a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub fn parse(value: &str) -> Language {
        match value.trim().to_ascii_lowercase().as_str() {
            "es" => Language::Es,
            _ => Language::En,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        Language::parse(&value)
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        value.as_str().to_string()
    }
}

/// One line of an invoice. Totals are displayed exactly as supplied; the
/// pipeline never recomputes `quantity * unit_price`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

/// The party being billed. Only the fields shown in the "bill to" block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub tax_id: Option<String>,
}

/// A fully resolved invoice, with its client embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: Uuid,
    pub user_id: Uuid,
    pub client_id: Uuid,
    pub client: Client,
    pub invoice_number: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    pub items: Vec<LineItem>,
    pub subtotal: f64,
    pub tax_rate: f64,
    pub tax_amount: f64,
    pub total: f64,
    #[serde(default)]
    pub status: InvoiceStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub terms: Option<String>,
}

/// The invoicing user's business profile, shown as the document issuer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalData {
    pub business_name: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub bank_details: Option<String>,
    #[serde(default)]
    pub payment_instructions: Option<String>,
}

impl PersonalData {
    /// Literal fallback profile used when the user never filled in their
    /// business data. Rendering a document must never fail for a missing
    /// profile, so these placeholder strings stand in.
    pub fn placeholder() -> PersonalData {
        PersonalData {
            business_name: "Your Business Name".to_string(),
            full_name: "Your Full Name".to_string(),
            email: "your@email.com".to_string(),
            phone: Some("Your Phone".to_string()),
            address: Some("Your Address".to_string()),
            city: Some("Your City".to_string()),
            state: Some("Your State".to_string()),
            zip_code: Some("Your ZIP".to_string()),
            country: Some("Your Country".to_string()),
            website: Some("Your Website".to_string()),
            tax_id: Some("Your Tax ID".to_string()),
            bank_details: None,
            payment_instructions: Some("Payment instructions here".to_string()),
        }
    }
}

/// The fully resolved input bundle for one document generation request:
/// the invoice, optionally the issuer profile, and the target language.
///
/// This is the JSON body of the preview and PDF operations and the input
/// file format of `factura render`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    pub invoice: Invoice,
    #[serde(default)]
    pub personal_data: Option<PersonalData>,
    #[serde(default)]
    pub language: Language,
}

impl DocumentRequest {
    /// The issuer profile to render with, substituting the placeholder when
    /// the user never created one.
    pub fn profile(&self) -> PersonalData {
        self.personal_data
            .clone()
            .unwrap_or_else(PersonalData::placeholder)
    }
}

/// Generate the next sequential invoice number for a user.
///
/// Numbers follow `INV-YYYYMM-NNNN`, restarting at `0001` each month.
/// `latest` is the highest existing number for the current month (or `None`
/// for a fresh month); a latest number from a previous month also restarts
/// the counter.
pub fn next_invoice_number(latest: Option<&str>, today: NaiveDate) -> String {
    let prefix = format!("INV-{}{:02}", today.year(), today.month());

    let mut next = 1u32;
    if let Some(number) = latest {
        if number.starts_with(&prefix) {
            let parts: Vec<&str> = number.split('-').collect();
            if parts.len() == 3 {
                if let Ok(counter) = parts[2].parse::<u32>() {
                    next = counter + 1;
                }
            }
        }
    }

    format!("{}-{:04}", prefix, next)
}
