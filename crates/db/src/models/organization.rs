//! Organization reference data.

use labman_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `organizations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Organization {
    pub id: DbId,
    pub name: String,
    /// Category such as `学院`, `企业` or `政府部门`.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub org_type: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrganization {
    pub name: String,
    #[serde(rename = "type")]
    pub org_type: String,
}
