//! KPI progress records.

use labman_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `progress` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Progress {
    pub id: DbId,
    pub project_id: DbId,
    pub kpi_id: String,
    pub kpi_name: String,
    /// Free-text quantity such as `3篇`.
    pub target: String,
    pub current: Option<String>,
    pub status: String,
    pub completion: f64,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgress {
    pub project_id: DbId,
    pub kpi_id: String,
    pub kpi_name: String,
    pub target: String,
    pub current: Option<String>,
    pub status: String,
    pub completion: f64,
}
