//! Task entity model and DTOs.

use chrono::{NaiveDate, NaiveDateTime};
use labman_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    pub milestone_id: Option<DbId>,
    pub name: String,
    /// Output category label, if the task produces a research output.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub output_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub assignee: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub document_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub milestone_id: Option<DbId>,
    pub name: String,
    #[serde(rename = "type")]
    pub output_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub assignee: Option<String>,
    pub status: String,
    /// Overrides the last-modified time; defaults to now.
    pub updated_at: Option<NaiveDateTime>,
}
