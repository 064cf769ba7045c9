//! Visitor contact-message intake.

use axum::extract::State;
use axum::Json;

use sekolah_core::collection::Collection;
use sekolah_core::contact_message::ContactMessage;

use crate::error::AppResult;
use crate::response::StatusResponse;
use crate::state::AppState;

/// POST /contact
///
/// Validates the payload before any storage call: format violations come
/// back as 422, storage failures as 500.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<ContactMessage>,
) -> AppResult<Json<StatusResponse>> {
    input.validate()?;

    let id = state
        .store
        .insert_one(ContactMessage::NAME, &input)
        .await?;
    tracing::info!(inserted_id = %id, "Contact message received");

    Ok(Json(StatusResponse { status: "received" }))
}
