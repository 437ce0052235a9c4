//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API is consumed cross-origin by the browser client, so the whole
//! router sits behind a permissive CORS layer.

pub mod api;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router: public + protected message endpoints.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/public", get(api::public))
        .route("/api/private", get(api::private))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
