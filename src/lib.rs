//! Papiro Server Library
//!
//! Heuristic PDF content extraction behind a small HTTP API. Text is
//! recovered from raw document bytes without a full PDF parser; when the
//! heuristics produce low-confidence output the request escalates to an
//! external OCR service.
//!
//! The binary in `main.rs` wires this library to a listening socket;
//! integration tests drive the same router directly.

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod extraction;
pub mod ocr;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/v1/health", get(routes::health::health_check))
        .nest("/api/v1/extract", routes::extract::router())
        .nest("/api/v1/export", routes::export::router())
        .layer(DefaultBodyLimit::max(state.config().server.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
