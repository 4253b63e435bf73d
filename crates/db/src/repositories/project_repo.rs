//! Repository for the `projects` table.

use labman_core::status::STATUS_NOT_STARTED;
use labman_core::types::DbId;
use sqlx::types::Json;
use sqlx::SqliteExecutor;

use crate::models::project::{CreateProject, Project};

const COLUMNS: &str = "id, name, type, status, organizationId, leaderId, contactId, \
                       teamAllocation, collaborators, startDate, endDate, summary, kpis, \
                       budget, createdAt, updatedAt";

pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `未开始`.
    pub async fn create<'e>(
        db: impl SqliteExecutor<'e>,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, type, status, organizationId, leaderId, contactId, \
                                   teamAllocation, collaborators, startDate, endDate, \
                                   summary, kpis, budget) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.project_type)
            .bind(input.status.as_deref().unwrap_or(STATUS_NOT_STARTED))
            .bind(input.organization_id)
            .bind(input.leader_id)
            .bind(input.contact_id)
            .bind(Json(&input.team_allocation))
            .bind(Json(&input.collaborators))
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.summary)
            .bind(Json(&input.kpis))
            .bind(input.budget)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id<'e>(
        db: impl SqliteExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = ?1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    /// List all projects, most recently started first.
    pub async fn list<'e>(db: impl SqliteExecutor<'e>) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY startDate DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(db).await
    }

    /// Set a project's status. Returns `true` if a row was updated.
    pub async fn update_status<'e>(
        db: impl SqliteExecutor<'e>,
        id: DbId,
        status: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET status = ?2, updatedAt = CURRENT_TIMESTAMP WHERE id = ?1",
        )
        .bind(id)
        .bind(status)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a project and, by cascade, its dependent rows.
    pub async fn delete<'e>(db: impl SqliteExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
