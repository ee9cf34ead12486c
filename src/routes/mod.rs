//! Router assembly.
//!
//! Binds the rectangle API with permissive CORS (the drawer frontend is
//! served from a different origin in development) plus a `/healthz` probe
//! and request tracing.

pub mod rectangle;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/rectangle/size-location",
            get(rectangle::get_size_location).post(rectangle::set_size_location),
        )
        .route("/api/rectangle/limits", post(rectangle::set_limits))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}
