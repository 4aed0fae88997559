//! # Factura - Invoice Document Generation
//!
//! Factura turns a resolved invoice, an issuer profile, and a language
//! selector into a finished document: a self-contained HTML page for
//! previewing, or paginated A4 PDF bytes for download. It provides:
//!
//! - **Translation table**: fixed English/Spanish label catalogs
//! - **Formatting**: locale-pure long dates and two-decimal amounts
//! - **Document model**: the flattened, formatted, translated view fed to
//!   the renderer
//! - **HTML renderer**: typed builder producing one standalone page
//! - **PDF export**: per-request rasterization behind a narrow engine trait
//! - **HTTP server**: preview and download endpoints over the pipeline
//!
//! ## Quick Start
//!
//! ```no_run
//! use factura::invoice::DocumentRequest;
//!
//! # fn example(json: &str) -> Result<(), factura::FacturaError> {
//! // A request body as produced by the surrounding application
//! let request: DocumentRequest = serde_json::from_str(json)
//!     .map_err(|e| factura::FacturaError::InvalidInput(e.to_string()))?;
//!
//! // HTML preview
//! let html = factura::generate_html(&request.invoice, &request.profile(), request.language);
//!
//! // PDF download
//! let pdf_bytes = factura::generate_pdf(&request.invoice, &request.profile(), request.language)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`invoice`] | Domain model: invoice, client, issuer profile, language |
//! | [`i18n`] | English/Spanish label catalogs |
//! | [`format`] | Date and amount display formatting |
//! | [`document`] | View model builder and HTML renderer |
//! | [`pdf`] | PDF rasterization boundary |
//! | [`server`] | HTTP preview/download endpoints |
//! | [`error`] | Error types |
//!
//! The pipeline is stateless and read-only: persistence, authentication,
//! and authorization of the inputs belong to the calling application.

pub mod document;
pub mod error;
pub mod format;
pub mod i18n;
pub mod invoice;
pub mod pdf;
pub mod server;

// Re-exports for convenience
pub use document::DocumentModel;
pub use error::FacturaError;
pub use invoice::Language;

use invoice::{Invoice, PersonalData};

/// Render an invoice to a complete standalone HTML document.
pub fn generate_html(invoice: &Invoice, personal_data: &PersonalData, language: Language) -> String {
    DocumentModel::build(invoice, personal_data, language).to_html()
}

/// Render an invoice and rasterize it to A4 PDF bytes.
///
/// Uses a fresh rendering engine per call; see [`pdf`] for the isolation
/// contract.
pub fn generate_pdf(
    invoice: &Invoice,
    personal_data: &PersonalData,
    language: Language,
) -> Result<Vec<u8>, FacturaError> {
    pdf::to_pdf(&generate_html(invoice, personal_data, language))
}
