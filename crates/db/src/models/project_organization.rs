//! Participation of an organization in a project, with its budget figures.

use chrono::NaiveDateTime;
use labman_core::payload::{ExpectedOutcomes, NameList};
use labman_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `project_organizations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct ProjectOrganization {
    pub id: DbId,
    pub project_id: DbId,
    pub organization_id: Option<DbId>,
    pub is_leader: bool,
    /// Funds raised by the organization itself, in yuan.
    pub self_funding: f64,
    /// Funds allocated to the organization, in yuan.
    pub allocation: f64,
    pub leader: Option<String>,
    pub contact: Option<String>,
    pub participants: Option<Json<NameList>>,
    pub expected_outcomes: Option<Json<ExpectedOutcomes>>,
    pub created_at: Timestamp,
}

/// DTO for adding an organization to a project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectOrganization {
    pub project_id: DbId,
    pub organization_id: Option<DbId>,
    pub is_leader: bool,
    pub self_funding: f64,
    pub allocation: f64,
    pub leader: Option<String>,
    pub contact: Option<String>,
    #[serde(default)]
    pub participants: NameList,
    #[serde(default)]
    pub expected_outcomes: ExpectedOutcomes,
    /// Overrides the row's creation time; defaults to now.
    pub created_at: Option<NaiveDateTime>,
}
