//! Repository for the `project_organizations` table.

use labman_core::types::DbId;
use sqlx::types::Json;
use sqlx::SqliteExecutor;

use crate::models::project_organization::{CreateProjectOrganization, ProjectOrganization};

const COLUMNS: &str = "id, projectId, organizationId, isLeader, selfFunding, allocation, \
                       leader, contact, participants, expectedOutcomes, createdAt";

pub struct ProjectOrganizationRepo;

impl ProjectOrganizationRepo {
    /// Add an organization to a project.
    ///
    /// Fails with a unique violation if the organization already takes part
    /// in the project, or if a second leader is added.
    pub async fn create<'e>(
        db: impl SqliteExecutor<'e>,
        input: &CreateProjectOrganization,
    ) -> Result<ProjectOrganization, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_organizations \
                 (projectId, organizationId, isLeader, selfFunding, allocation, leader, \
                  contact, participants, expectedOutcomes, createdAt) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, COALESCE(?10, CURRENT_TIMESTAMP)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectOrganization>(&query)
            .bind(input.project_id)
            .bind(input.organization_id)
            .bind(input.is_leader)
            .bind(input.self_funding)
            .bind(input.allocation)
            .bind(&input.leader)
            .bind(&input.contact)
            .bind(Json(&input.participants))
            .bind(Json(&input.expected_outcomes))
            .bind(input.created_at)
            .fetch_one(db)
            .await
    }

    /// All participating organizations of a project, leader first.
    pub async fn list_by_project<'e>(
        db: impl SqliteExecutor<'e>,
        project_id: DbId,
    ) -> Result<Vec<ProjectOrganization>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_organizations \
             WHERE projectId = ?1 ORDER BY isLeader DESC, id"
        );
        sqlx::query_as::<_, ProjectOrganization>(&query)
            .bind(project_id)
            .fetch_all(db)
            .await
    }
}
