//! Route tree for the public API surface.
//!
//! ```text
//! GET  /                   liveness marker
//! POST /seed               populate demonstration content
//! GET  /school             school profile (0 or 1 records)
//! GET  /departments        departments
//! GET  /extracurriculars   extracurricular activities
//! GET  /osis               student-council members
//! GET  /events             events
//! GET  /news               news articles
//! POST /contact            visitor contact message
//! GET  /test               store diagnostics (always 200)
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{contact, content, diagnostics, seeding};
use crate::state::AppState;

pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(diagnostics::index))
        .route("/seed", post(seeding::run_seed))
        .route("/school", get(content::school))
        .route("/departments", get(content::departments))
        .route("/extracurriculars", get(content::extracurriculars))
        .route("/osis", get(content::osis_members))
        .route("/events", get(content::events))
        .route("/news", get(content::news))
        .route("/contact", post(contact::submit))
        .route("/test", get(diagnostics::test_database))
}
