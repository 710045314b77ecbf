use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use huddle_server::{AppState, MemStore, ServerConfig, SignalingService, router};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::parse();

    let store = Arc::new(MemStore::new());
    for username in &config.seed_users {
        let profile = store.create_user(username);
        info!(id = %profile.id, username = %profile.username, "seeded user");
    }

    let signaling = SignalingService::new(store.clone(), store.clone());
    let state = Arc::new(AppState {
        signaling,
        users: store.clone(),
        rooms: store,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("signaling server listening on http://{}", config.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
