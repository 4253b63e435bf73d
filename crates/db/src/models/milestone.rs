//! Milestone entity model and DTOs.

use chrono::NaiveDate;
use labman_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `milestones` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Milestone {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub milestone_type: String,
    pub due_date: NaiveDate,
    pub status: String,
    /// Percentage, 0 to 100.
    pub completion: f64,
    pub weight: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMilestone {
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub milestone_type: String,
    pub due_date: NaiveDate,
    pub status: String,
    pub completion: f64,
    pub weight: Option<f64>,
}
