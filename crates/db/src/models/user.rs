//! User accounts, as far as the reporting side needs them.

use labman_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table. The password column is never selected.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub name: String,
    pub role: String,
    pub organization_id: Option<DbId>,
    pub position: Option<String>,
    pub title: Option<String>,
    pub education: Option<String>,
    pub major: Option<String>,
    pub research_area: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a user profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub username: String,
    pub name: String,
    pub role: String,
    pub organization_id: Option<DbId>,
    pub position: Option<String>,
    pub title: Option<String>,
    pub education: Option<String>,
    pub major: Option<String>,
    pub research_area: Option<String>,
}
