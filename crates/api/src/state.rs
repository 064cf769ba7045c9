use std::sync::Arc;

use tokio::sync::Mutex;

use sekolah_db::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Handle to the external document store.
    pub store: Arc<Store>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Process-wide guard serializing seed passes; see [`crate::seed`].
    pub seed_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Store, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
            seed_lock: Arc::new(Mutex::new(())),
        }
    }
}
