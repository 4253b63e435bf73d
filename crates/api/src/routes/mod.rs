pub mod health;
pub mod statistics;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /statistics                      overview
/// /statistics/projects             project status and type distribution
/// /statistics/tasks                planned vs completed tasks, 12 months
/// /statistics/outputs              research outputs per category
/// /statistics/timeline             latest projects on a time axis
/// /statistics/budget               allocation vs self-funding, 12 months
/// /statistics/organizations        organization collaboration network
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(statistics::router())
}
