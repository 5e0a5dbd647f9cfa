use lineup::{
    config::{AppConfig, create_app},
    state::AppState,
    store::Store,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let config = AppConfig::from_env();
    let port = config.port;

    let state = AppState {
        store: Store::new(&config.data_path),
        key: lineup::config::secret_key(),
        config,
    };

    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .unwrap();
    tracing::info!("listening on http://0.0.0.0:{port}");
    axum::serve(listener, app).await.unwrap();
}
