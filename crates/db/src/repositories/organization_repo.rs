//! Repository for the `organizations` table.

use labman_core::types::DbId;
use sqlx::SqliteExecutor;

use crate::models::organization::{CreateOrganization, Organization};

const COLUMNS: &str = "id, name, type, createdAt";

pub struct OrganizationRepo;

impl OrganizationRepo {
    /// Insert a new organization, returning the created row.
    pub async fn create<'e>(
        db: impl SqliteExecutor<'e>,
        input: &CreateOrganization,
    ) -> Result<Organization, sqlx::Error> {
        let query =
            format!("INSERT INTO organizations (name, type) VALUES (?1, ?2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Organization>(&query)
            .bind(&input.name)
            .bind(&input.org_type)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id<'e>(
        db: impl SqliteExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Organization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organizations WHERE id = ?1");
        sqlx::query_as::<_, Organization>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    /// List all organizations ordered by id.
    pub async fn list<'e>(db: impl SqliteExecutor<'e>) -> Result<Vec<Organization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organizations ORDER BY id");
        sqlx::query_as::<_, Organization>(&query)
            .fetch_all(db)
            .await
    }
}
