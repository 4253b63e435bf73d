//! Repository for the `milestones` table.

use labman_core::types::DbId;
use sqlx::SqliteExecutor;

use crate::models::milestone::{CreateMilestone, Milestone};

const COLUMNS: &str = "id, projectId, title, description, type, dueDate, status, completion, \
                       weight, createdAt, updatedAt";

pub struct MilestoneRepo;

impl MilestoneRepo {
    pub async fn create<'e>(
        db: impl SqliteExecutor<'e>,
        input: &CreateMilestone,
    ) -> Result<Milestone, sqlx::Error> {
        let query = format!(
            "INSERT INTO milestones \
                 (projectId, title, description, type, dueDate, status, completion, weight) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, COALESCE(?8, 1)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.milestone_type)
            .bind(input.due_date)
            .bind(&input.status)
            .bind(input.completion)
            .bind(input.weight)
            .fetch_one(db)
            .await
    }

    /// Milestones of a project in due-date order.
    pub async fn list_by_project<'e>(
        db: impl SqliteExecutor<'e>,
        project_id: DbId,
    ) -> Result<Vec<Milestone>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM milestones WHERE projectId = ?1 ORDER BY dueDate, id"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(project_id)
            .fetch_all(db)
            .await
    }
}
