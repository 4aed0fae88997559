//! # Server Tests
//!
//! Exercise the HTTP surface against the real router, without binding a
//! socket: preview framing, PDF download headers, numbering, and error
//! collapsing for bad input.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use chrono::NaiveDate;
use tower::util::ServiceExt;
use uuid::Uuid;

use factura::invoice::{Client, DocumentRequest, Invoice, InvoiceStatus, Language, LineItem};
use factura::pdf::PDF_MAGIC;
use factura::server::router;

fn sample_request() -> DocumentRequest {
    DocumentRequest {
        invoice: Invoice {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            client: Client {
                name: "Acme Corp".to_string(),
                email: "billing@acme.test".to_string(),
                phone: None,
                address: None,
                city: None,
                state: None,
                zip_code: None,
                country: None,
                tax_id: None,
            },
            invoice_number: "INV-202601-0007".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2026, 2, 4).unwrap(),
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
            status: InvoiceStatus::Sent,
            notes: None,
            terms: None,
        },
        personal_data: None,
        language: Language::En,
    }
}

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn preview_wraps_html_in_json() {
    let body = serde_json::to_string(&sample_request()).unwrap();
    let response = router()
        .oneshot(post_json("/api/invoice/preview", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let html = json["html"].as_str().unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    // Placeholder profile substituted for the missing personalData
    assert!(html.contains("Your Business Name"));
}

#[tokio::test]
async fn pdf_download_sets_attachment_headers() {
    let body = serde_json::to_string(&sample_request()).unwrap();
    let response = router()
        .oneshot(post_json("/api/invoice/pdf", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/pdf"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"invoice-INV-202601-0007.pdf\""
    );

    let length: usize = response.headers()[header::CONTENT_LENGTH]
        .to_str()
        .unwrap()
        .parse()
        .unwrap();

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(bytes.len(), length);
    assert!(bytes.starts_with(PDF_MAGIC));
}

#[tokio::test]
async fn number_endpoint_increments_latest() {
    let response = router()
        .oneshot(post_json(
            "/api/invoice/number",
            r#"{"latestInvoiceNumber": null}"#.to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let number = json["invoiceNumber"].as_str().unwrap();
    // INV-YYYYMM-0001 for a month with no invoices yet
    assert!(number.starts_with("INV-"));
    assert!(number.ends_with("-0001"));
    assert_eq!(number.len(), "INV-202608-0001".len());
}

#[tokio::test]
async fn unknown_language_falls_back_to_english() {
    let body = serde_json::to_string(&sample_request())
        .unwrap()
        .replace("\"language\":\"en\"", "\"language\":\"tlh\"");
    let response = router()
        .oneshot(post_json("/api/invoice/preview", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(json["html"].as_str().unwrap().contains("INVOICE"));
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let response = router()
        .oneshot(post_json("/api/invoice/preview", "{not json".to_string()))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}
