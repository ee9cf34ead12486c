mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");
    let data_dir = std::env::var("RECTBOARD_DATA_DIR").unwrap_or_else(|_| ".".into());

    let store = services::store::JsonStore::new(&data_dir);
    store.ensure_defaults().await.expect("store init failed");

    let state = state::AppState::new(store);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, %data_dir, "rectboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
