//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store selection and construction
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response envelopes and query DTOs
//! - `errors.rs`: error taxonomy and consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
///
/// Every response is logged at INFO with its status and latency.
///
/// The store handle is constructed once by the caller and shared by every
/// request through the `Extension` layer.
pub fn build_app(services: Arc<AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new().layer(
                TraceLayer::new_for_http()
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            ),
        )
}
