use super::*;

use uuid::Uuid;

use crate::services::store::JsonStore;

async fn test_state() -> AppState {
    let dir = std::env::temp_dir().join(format!("rectboard-routes-{}", Uuid::new_v4()));
    tokio::fs::create_dir_all(&dir).await.expect("create temp dir");
    let store = JsonStore::new(&dir);
    store.ensure_defaults().await.expect("init store");
    AppState::new(store)
}

// --- Read/write round trip ---

#[tokio::test]
async fn get_returns_the_seeded_rectangle() {
    let state = test_state().await;
    let Json(rect) = get_size_location(State(state)).await.expect("get");
    assert_eq!(rect, SizeLocation { x: 0, y: 0, width: 100, height: 100 });
}

#[tokio::test]
async fn post_then_get_round_trips() {
    let state = test_state().await;
    let rect = SizeLocation { x: 10, y: 10, width: 300, height: 200 };
    let status = set_size_location(State(state.clone()), Json(rect)).await.expect("post");
    assert_eq!(status, StatusCode::OK);

    let Json(stored) = get_size_location(State(state)).await.expect("get");
    assert_eq!(stored, rect);
}

// --- Limit violations ---

#[tokio::test]
async fn oversized_post_is_rejected_with_structured_body() {
    let state = test_state().await;
    let too_big = SizeLocation { x: 0, y: 0, width: 500, height: 100 };
    let err = set_size_location(State(state.clone()), Json(too_big))
        .await
        .expect_err("should reject");
    assert_eq!(err, RectangleError::Rejected("Size exceeds limits".to_owned()));

    let resp = err.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(resp.into_body(), 1024).await.expect("body");
    let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(body, serde_json::json!({ "error": "Size exceeds limits" }));

    // The stored rectangle is untouched by the rejected write.
    let Json(stored) = get_size_location(State(state)).await.expect("get");
    assert_eq!(stored, SizeLocation { x: 0, y: 0, width: 100, height: 100 });
}

#[tokio::test]
async fn raising_limits_admits_bigger_rectangles() {
    let state = test_state().await;
    let status = set_limits(State(state.clone()), Json(Size { width: 600, height: 600 }))
        .await
        .expect("limits");
    assert_eq!(status, StatusCode::OK);

    let big = SizeLocation { x: 0, y: 0, width: 500, height: 100 };
    set_size_location(State(state), Json(big)).await.expect("post under new limits");
}

// --- Error mapping ---

#[tokio::test]
async fn io_failures_map_to_internal() {
    // A store pointed at a missing directory cannot read its files.
    let store = JsonStore::new("/nonexistent/rectboard-test");
    let state = AppState::new(store);
    let err = get_size_location(State(state)).await.expect_err("should fail");
    assert_eq!(err, RectangleError::Internal);
    assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
}
