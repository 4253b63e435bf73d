//! Project entity model and DTOs.

use chrono::NaiveDate;
use labman_core::payload::{KpiTarget, NameList, TeamAllocation};
use labman_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub project_type: String,
    /// One of the `WorkStatus` labels.
    pub status: String,
    pub organization_id: Option<DbId>,
    pub leader_id: Option<DbId>,
    pub contact_id: Option<DbId>,
    pub team_allocation: Option<Json<TeamAllocation>>,
    pub collaborators: Option<Json<NameList>>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub summary: Option<String>,
    pub kpis: Option<Json<Vec<KpiTarget>>>,
    pub budget: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: String,
    /// Defaults to `未开始` if omitted.
    pub status: Option<String>,
    pub organization_id: Option<DbId>,
    pub leader_id: Option<DbId>,
    pub contact_id: Option<DbId>,
    #[serde(default)]
    pub team_allocation: TeamAllocation,
    #[serde(default)]
    pub collaborators: NameList,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub summary: Option<String>,
    #[serde(default)]
    pub kpis: Vec<KpiTarget>,
    pub budget: Option<f64>,
}
