//! Demonstration-data seeding endpoint.

use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::response::StatusResponse;
use crate::seed;
use crate::state::AppState;

/// POST /seed
///
/// Runs one seeding pass. Passes are serialized behind the process-wide
/// `seed_lock`, so concurrent calls against an empty store cannot
/// double-insert within this process.
pub async fn run_seed(State(state): State<AppState>) -> AppResult<Json<StatusResponse>> {
    let _guard = state.seed_lock.lock().await;
    seed::run(&state.store).await?;
    Ok(Json(StatusResponse { status: "ok" }))
}
