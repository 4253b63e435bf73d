//! Repository for the `tasks` table.

use labman_core::types::DbId;
use sqlx::SqliteExecutor;

use crate::models::task::{CreateTask, Task};

const COLUMNS: &str = "id, milestoneId, name, type, startDate, endDate, assignee, status, \
                       notes, documentId, createdAt, updatedAt";

pub struct TaskRepo;

impl TaskRepo {
    pub async fn create<'e>(
        db: impl SqliteExecutor<'e>,
        input: &CreateTask,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks \
                 (milestoneId, name, type, startDate, endDate, assignee, status, updatedAt) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, COALESCE(?8, CURRENT_TIMESTAMP)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.milestone_id)
            .bind(&input.name)
            .bind(&input.output_type)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.assignee)
            .bind(&input.status)
            .bind(input.updated_at)
            .fetch_one(db)
            .await
    }

    pub async fn list_by_milestone<'e>(
        db: impl SqliteExecutor<'e>,
        milestone_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE milestoneId = ?1 ORDER BY id");
        sqlx::query_as::<_, Task>(&query)
            .bind(milestone_id)
            .fetch_all(db)
            .await
    }

    /// Change a task's status, stamping `updatedAt` with the current time.
    pub async fn update_status<'e>(
        db: impl SqliteExecutor<'e>,
        id: DbId,
        status: &str,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE tasks SET status = ?2, updatedAt = CURRENT_TIMESTAMP WHERE id = ?1")
                .bind(id)
                .bind(status)
                .execute(db)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
