//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the JSON file store behind an `Arc` so every handler talks to
//! the same serialized read-validate-write queue.

use std::sync::Arc;

use crate::services::store::JsonStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<JsonStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: JsonStore) -> Self {
        Self { store: Arc::new(store) }
    }
}
