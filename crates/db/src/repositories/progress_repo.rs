//! Repository for the `progress` table.

use labman_core::types::DbId;
use sqlx::SqliteExecutor;

use crate::models::progress::{CreateProgress, Progress};

const COLUMNS: &str =
    "id, projectId, kpiId, kpiName, target, current, status, completion, updatedAt";

pub struct ProgressRepo;

impl ProgressRepo {
    pub async fn create<'e>(
        db: impl SqliteExecutor<'e>,
        input: &CreateProgress,
    ) -> Result<Progress, sqlx::Error> {
        let query = format!(
            "INSERT INTO progress \
                 (projectId, kpiId, kpiName, target, current, status, completion) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Progress>(&query)
            .bind(input.project_id)
            .bind(&input.kpi_id)
            .bind(&input.kpi_name)
            .bind(&input.target)
            .bind(&input.current)
            .bind(&input.status)
            .bind(input.completion)
            .fetch_one(db)
            .await
    }

    pub async fn list_by_project<'e>(
        db: impl SqliteExecutor<'e>,
        project_id: DbId,
    ) -> Result<Vec<Progress>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM progress WHERE projectId = ?1 ORDER BY kpiId");
        sqlx::query_as::<_, Progress>(&query)
            .bind(project_id)
            .fetch_all(db)
            .await
    }
}
