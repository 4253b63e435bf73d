//! Per-project Gantt chart document.

use labman_core::payload::GanttPayload;
use labman_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `gantt` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Gantt {
    pub id: DbId,
    pub project_id: DbId,
    pub data: Json<GanttPayload>,
    pub updated_at: Timestamp,
}
