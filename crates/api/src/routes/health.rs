//! Liveness probe for load balancers and the frontend's status badge.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// `ok` when SQLite answers, `degraded` otherwise. Reports still fail
/// individually while degraded; the probe itself always returns 200.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Degraded,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    /// `labman-api` package version.
    pub version: &'static str,
    pub db_healthy: bool,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match labman_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "SQLite ping failed");
            false
        }
    };

    Json(HealthResponse {
        status: if db_healthy {
            ServiceStatus::Ok
        } else {
            ServiceStatus::Degraded
        },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Served at `/health`, outside the `/api` prefix.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
