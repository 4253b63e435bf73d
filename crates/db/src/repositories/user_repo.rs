//! Repository for the `users` table.

use labman_core::types::DbId;
use sqlx::SqliteExecutor;

use crate::models::user::{CreateUser, User};

/// Everything except the password hash.
const COLUMNS: &str = "id, username, name, role, organizationId, position, title, \
                       education, major, researchArea, createdAt";

pub struct UserRepo;

impl UserRepo {
    /// Insert a user profile without credentials.
    pub async fn create<'e>(
        db: impl SqliteExecutor<'e>,
        input: &CreateUser,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, name, role, organizationId, position, title, \
                                education, major, researchArea) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.name)
            .bind(&input.role)
            .bind(input.organization_id)
            .bind(&input.position)
            .bind(&input.title)
            .bind(&input.education)
            .bind(&input.major)
            .bind(&input.research_area)
            .fetch_one(db)
            .await
    }

    /// Find a user by login name.
    pub async fn find_by_username<'e>(
        db: impl SqliteExecutor<'e>,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = ?1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(db)
            .await
    }

    pub async fn list_by_organization<'e>(
        db: impl SqliteExecutor<'e>,
        organization_id: DbId,
    ) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE organizationId = ?1 ORDER BY id");
        sqlx::query_as::<_, User>(&query)
            .bind(organization_id)
            .fetch_all(db)
            .await
    }
}
