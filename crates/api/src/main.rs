use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sekolah_api::config::ServerConfig;
use sekolah_api::router::build_app_router;
use sekolah_api::state::AppState;
use sekolah_db::{Store, StoreHealth};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sekolah_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Document store ---
    // Missing or broken storage configuration is not fatal: the server
    // starts anyway and GET /test reports the store state.
    let store = Store::connect(
        config.database_url.as_deref(),
        config.database_name.as_deref(),
    )
    .await;
    match store.health().await {
        StoreHealth::Connected => tracing::info!("Document store reachable"),
        StoreHealth::NotConfigured => {
            tracing::warn!("DATABASE_URL / DATABASE_NAME not set; running without a store")
        }
        StoreHealth::Unreachable(reason) => {
            tracing::warn!(%reason, "Document store unreachable at startup")
        }
    }

    // --- App state & router ---
    let state = AppState::new(store, config.clone());
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(config.host.parse().expect("Invalid HOST"), config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
