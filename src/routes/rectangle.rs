//! Rectangle API routes.
//!
//! The server is the source of truth for size limits: every write is
//! validated here regardless of what the client believes, and a violation
//! comes back as a structured 400 body the drawer can show verbatim.

#[cfg(test)]
#[path = "rectangle_test.rs"]
mod rectangle_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use geometry::rect::{Size, SizeLocation};

use crate::services::store::StoreError;
use crate::state::AppState;

/// Error response for the rectangle routes.
#[derive(Debug, PartialEq, Eq)]
pub enum RectangleError {
    /// 400 with the structured body the drawer shows verbatim.
    Rejected(String),
    /// 500; details stay in the server log.
    Internal,
}

impl From<StoreError> for RectangleError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::LimitExceeded => Self::Rejected(err.to_string()),
            StoreError::Io(_) | StoreError::Serde(_) => {
                tracing::error!(error = %err, "rectangle store failed");
                Self::Internal
            }
        }
    }
}

impl IntoResponse for RectangleError {
    fn into_response(self) -> Response {
        match self {
            Self::Rejected(message) => {
                (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "error": message })))
                    .into_response()
            }
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

/// `GET /api/rectangle/size-location` — the canonical rectangle.
pub async fn get_size_location(
    State(state): State<AppState>,
) -> Result<Json<SizeLocation>, RectangleError> {
    let rect = state.store.size_location().await?;
    Ok(Json(rect))
}

/// `POST /api/rectangle/size-location` — persist a rectangle; 400 when it
/// exceeds the current limits.
pub async fn set_size_location(
    State(state): State<AppState>,
    Json(rect): Json<SizeLocation>,
) -> Result<StatusCode, RectangleError> {
    state.store.set_size_location(rect).await?;
    Ok(StatusCode::OK)
}

/// `POST /api/rectangle/limits` — administrative: replace the limits.
pub async fn set_limits(
    State(state): State<AppState>,
    Json(limits): Json<Size>,
) -> Result<StatusCode, RectangleError> {
    state.store.set_limits(limits).await?;
    tracing::info!(width = limits.width, height = limits.height, "size limits updated");
    Ok(StatusCode::OK)
}
