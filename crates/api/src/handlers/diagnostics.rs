//! Service liveness marker and store diagnostics.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use sekolah_db::StoreHealth;

use crate::error::truncate_detail;
use crate::state::AppState;

/// Cap on collection names returned by `GET /test`.
const MAX_COLLECTIONS: usize = 10;

#[derive(Serialize)]
pub struct RootResponse {
    message: &'static str,
}

/// GET /
pub async fn index() -> Json<RootResponse> {
    Json(RootResponse {
        message: "School API ready",
    })
}

/// Diagnostic report returned by `GET /test`.
///
/// Always served with status 200; store problems degrade the `database`
/// field to a descriptive string instead of failing the request.
#[derive(Serialize)]
pub struct DiagnosticsReport {
    backend: &'static str,
    database: String,
    database_url: &'static str,
    database_name: &'static str,
    connection_status: &'static str,
    collections: Vec<String>,
}

/// GET /test
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    let mut report = DiagnosticsReport {
        backend: "running",
        database: "not configured".to_string(),
        database_url: presence(state.config.database_url.is_some()),
        database_name: presence(state.config.database_name.is_some()),
        connection_status: "not connected",
        collections: Vec::new(),
    };

    match state.store.health().await {
        StoreHealth::NotConfigured => {}
        StoreHealth::Unreachable(reason) => {
            report.database = format!("unavailable: {}", truncate_detail(&reason));
        }
        StoreHealth::Connected => match state.store.collection_names(MAX_COLLECTIONS).await {
            Ok(collections) => {
                report.database = "connected".to_string();
                report.connection_status = "connected";
                report.collections = collections;
            }
            Err(err) => {
                report.database = format!(
                    "connected, listing failed: {}",
                    truncate_detail(&err.to_string())
                );
            }
        },
    }

    Json(report)
}

fn presence(set: bool) -> &'static str {
    if set {
        "set"
    } else {
        "not set"
    }
}
