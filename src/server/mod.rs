//! # HTTP Server for Invoice Generation
//!
//! Exposes the document pipeline over HTTP. Callers POST fully resolved
//! inputs (invoice, issuer profile, language) and receive either an HTML
//! preview wrapped in JSON or raw PDF bytes.
//!
//! ## Usage
//!
//! ```bash
//! factura serve --listen 0.0.0.0:8080
//! ```
//!
//! The server owns no persistence or authorization; resolving the invoice
//! and checking ownership happen upstream, before a request reaches it.

mod handlers;

use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::error::FacturaError;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
}

/// Build the application router.
pub fn router() -> Router {
    Router::new()
        .route("/api/invoice/preview", post(handlers::invoice::preview))
        .route("/api/invoice/pdf", post(handlers::invoice::pdf))
        .route("/api/invoice/number", post(handlers::invoice::number))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use factura::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), factura::error::FacturaError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), FacturaError> {
    let app = router();

    tracing::info!(listen = %config.listen_addr, "factura HTTP server starting");

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            FacturaError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| FacturaError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}
