//! Invoice preview, PDF download, and numbering handlers.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::document::DocumentModel;
use crate::invoice::{next_invoice_number, DocumentRequest};
use crate::pdf;

/// Body of a successful preview response.
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub html: String,
}

/// Handle POST /api/invoice/preview - return the invoice as standalone HTML.
pub async fn preview(Json(req): Json<DocumentRequest>) -> Json<PreviewResponse> {
    let profile = req.profile();
    let model = DocumentModel::build(&req.invoice, &profile, req.language);

    Json(PreviewResponse {
        html: model.to_html(),
    })
}

/// Handle POST /api/invoice/pdf - rasterize the invoice and return PDF bytes.
///
/// Rasterization is CPU-bound, so it runs on the blocking pool with its own
/// engine instance; concurrent downloads never share one.
pub async fn pdf(Json(req): Json<DocumentRequest>) -> Response {
    let filename = format!(
        "invoice-{}.pdf",
        sanitize_filename(&req.invoice.invoice_number)
    );

    let result = tokio::task::spawn_blocking(move || {
        let profile = req.profile();
        let model = DocumentModel::build(&req.invoice, &profile, req.language);
        pdf::to_pdf(&model.to_html())
    })
    .await;

    match result {
        Ok(Ok(bytes)) => (
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", filename),
                ),
                (header::CONTENT_LENGTH, bytes.len().to_string()),
            ],
            bytes,
        )
            .into_response(),
        Ok(Err(e)) => {
            // Engine diagnostics go to the log, never to the client.
            tracing::error!(error = %e, "pdf generation failed");
            error_response("PDF generation failed")
        }
        Err(e) => {
            tracing::error!(error = %e, "pdf generation task failed");
            error_response("PDF generation failed")
        }
    }
}

/// Request body for invoice numbering.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberRequest {
    /// Highest existing number for the requesting user, if any.
    #[serde(default)]
    pub latest_invoice_number: Option<String>,
}

/// Body of a numbering response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberResponse {
    pub invoice_number: String,
}

/// Handle POST /api/invoice/number - next sequential number for this month.
pub async fn number(Json(req): Json<NumberRequest>) -> Json<NumberResponse> {
    let invoice_number = next_invoice_number(
        req.latest_invoice_number.as_deref(),
        Local::now().date_naive(),
    );

    Json(NumberResponse { invoice_number })
}

/// Strip characters that could break out of the Content-Disposition header.
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect()
}

/// Generate a generic failure response; pipeline errors are opaque to callers.
fn error_response(error_msg: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "success": false, "error": error_msg })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename_drops_header_breakers() {
        assert_eq!(sanitize_filename("INV-202601-0007"), "INV-202601-0007");
        assert_eq!(sanitize_filename("a\"b\r\n; x=1"), "abx1");
    }
}
