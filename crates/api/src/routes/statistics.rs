//! Route definitions for the statistics dashboard.
//!
//! Read-only and unauthenticated.

use axum::routing::get;
use axum::Router;

use crate::handlers::statistics;
use crate::state::AppState;

/// Report routes under `/api`.
///
/// ```text
/// GET  /statistics                  -> overview
/// GET  /statistics/projects         -> projects
/// GET  /statistics/tasks            -> tasks
/// GET  /statistics/outputs          -> outputs
/// GET  /statistics/timeline         -> timeline
/// GET  /statistics/budget           -> budget
/// GET  /statistics/organizations    -> organizations
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/statistics", get(statistics::overview))
        .route("/statistics/projects", get(statistics::projects))
        .route("/statistics/tasks", get(statistics::tasks))
        .route("/statistics/outputs", get(statistics::outputs))
        .route("/statistics/timeline", get(statistics::timeline))
        .route("/statistics/budget", get(statistics::budget))
        .route("/statistics/organizations", get(statistics::organizations))
}
