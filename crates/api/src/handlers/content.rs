//! Read endpoints for the public content collections.
//!
//! Every endpoint returns the full collection; there is no filtering,
//! sorting, or pagination on this surface. A collection nobody has written
//! yet comes back as an empty array, not an error.

use axum::extract::State;
use axum::Json;
use serde::de::DeserializeOwned;

use sekolah_core::collection::Collection;
use sekolah_core::department::Department;
use sekolah_core::event::Event;
use sekolah_core::extracurricular::Extracurricular;
use sekolah_core::news::News;
use sekolah_core::osis_member::OsisMember;
use sekolah_core::school_info::SchoolInfo;

use crate::error::AppResult;
use crate::state::AppState;

async fn list_collection<T>(state: &AppState) -> AppResult<Json<Vec<T>>>
where
    T: Collection + DeserializeOwned + Unpin + Send + Sync,
{
    let records = state.store.list_all::<T>(T::NAME).await?;
    Ok(Json(records))
}

/// GET /school
pub async fn school(State(state): State<AppState>) -> AppResult<Json<Vec<SchoolInfo>>> {
    list_collection(&state).await
}

/// GET /departments
pub async fn departments(State(state): State<AppState>) -> AppResult<Json<Vec<Department>>> {
    list_collection(&state).await
}

/// GET /extracurriculars
pub async fn extracurriculars(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Extracurricular>>> {
    list_collection(&state).await
}

/// GET /osis
pub async fn osis_members(State(state): State<AppState>) -> AppResult<Json<Vec<OsisMember>>> {
    list_collection(&state).await
}

/// GET /events
pub async fn events(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    list_collection(&state).await
}

/// GET /news
pub async fn news(State(state): State<AppState>) -> AppResult<Json<Vec<News>>> {
    list_collection(&state).await
}
