//! Repository for the `gantt` table.

use labman_core::payload::GanttPayload;
use labman_core::types::DbId;
use sqlx::types::Json;
use sqlx::SqliteExecutor;

use crate::models::gantt::Gantt;

const COLUMNS: &str = "id, projectId, data, updatedAt";

pub struct GanttRepo;

impl GanttRepo {
    pub async fn find_by_project<'e>(
        db: impl SqliteExecutor<'e>,
        project_id: DbId,
    ) -> Result<Option<Gantt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gantt WHERE projectId = ?1");
        sqlx::query_as::<_, Gantt>(&query)
            .bind(project_id)
            .fetch_optional(db)
            .await
    }

    /// Store a project's chart, replacing any previous one.
    ///
    /// Uses `ON CONFLICT (projectId)` to keep one document per project.
    pub async fn upsert<'e>(
        db: impl SqliteExecutor<'e>,
        project_id: DbId,
        data: &GanttPayload,
    ) -> Result<Gantt, sqlx::Error> {
        let query = format!(
            "INSERT INTO gantt (projectId, data) VALUES (?1, ?2) \
             ON CONFLICT (projectId) DO UPDATE \
             SET data = excluded.data, updatedAt = CURRENT_TIMESTAMP \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gantt>(&query)
            .bind(project_id)
            .bind(Json(data))
            .fetch_one(db)
            .await
    }
}
