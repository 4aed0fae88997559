//! # PDF Export
//!
//! Rasterizes a rendered invoice page into PDF bytes behind a narrow engine
//! trait, so the pipeline never depends on a concrete engine's API. The
//! bundled implementation drives `printpdf`'s HTML renderer; page geometry
//! (A4, 20px margins, backgrounds) comes from the document's own print
//! stylesheet, not from engine options.
//!
//! Every export acquires a fresh engine and document instance which is
//! dropped on success and failure alike; concurrent exports share nothing.

use std::collections::BTreeMap;

use printpdf::{GeneratePdfOptions, PdfDocument};

use crate::error::FacturaError;

/// First bytes of every valid PDF file.
pub const PDF_MAGIC: &[u8] = b"%PDF";

/// The seam between the document pipeline and whatever turns HTML into
/// paginated PDF output.
pub trait PdfEngine {
    /// Lay out and rasterize one standalone HTML page. Returns the full PDF
    /// byte stream, or an error, never a partial buffer.
    fn render_pdf(&self, html: &str) -> Result<Vec<u8>, FacturaError>;
}

/// `printpdf`-backed engine. Stateless; each call builds and tears down its
/// own document, so one instance per request gives full isolation.
#[derive(Debug, Default)]
pub struct PrintpdfEngine;

impl PdfEngine for PrintpdfEngine {
    fn render_pdf(&self, html: &str) -> Result<Vec<u8>, FacturaError> {
        let mut warnings = Vec::new();

        // No external images or fonts: the invoice page is self-contained.
        // A page that fails to parse or lay out is a render error; a failure
        // while serializing the laid-out document is a rasterization error.
        let doc = PdfDocument::from_html(
            html,
            &BTreeMap::new(),
            &BTreeMap::new(),
            &GeneratePdfOptions::default(),
            &mut warnings,
        )
        .map_err(|e| FacturaError::Render(e.to_string()))?;

        for warning in &warnings {
            tracing::debug!(?warning, "pdf layout warning");
        }

        let bytes = doc.save(&Default::default(), &mut warnings);

        if !bytes.starts_with(PDF_MAGIC) {
            return Err(FacturaError::Rasterize(
                "engine produced an invalid document".to_string(),
            ));
        }

        Ok(bytes)
    }
}

/// Rasterize HTML with a fresh engine instance, torn down when this returns.
pub fn to_pdf(html: &str) -> Result<Vec<u8>, FacturaError> {
    PrintpdfEngine.render_pdf(html)
}
