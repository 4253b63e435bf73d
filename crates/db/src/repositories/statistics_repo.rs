//! Aggregate queries behind the statistics reports.
//!
//! Every query is read-only and returns the plain row sets defined in
//! `labman_core::statistics`. Rows whose grouping column is null or whose
//! foreign key dangles are excluded by the `WHERE` clauses and inner joins.

use chrono::NaiveDate;
use labman_core::months::YearMonth;
use labman_core::statistics::{
    CollaborationPair, GroupCount, MonthCount, MonthFunding, OrganizationRow, OutputStatusCount,
    ProjectSpan,
};
use labman_core::status::{STATUS_COMPLETED, STATUS_IN_PROGRESS};
use sqlx::SqlitePool;

pub struct StatisticsRepo;

fn group_counts(rows: Vec<(String, i64)>) -> Vec<GroupCount> {
    rows.into_iter()
        .map(|(key, count)| GroupCount { key, count })
        .collect()
}

fn month_counts(rows: Vec<(String, i64)>) -> Vec<MonthCount> {
    rows.into_iter()
        .map(|(month, count)| MonthCount { month, count })
        .collect()
}

impl StatisticsRepo {
    // -----------------------------------------------------------------------
    // Projects
    // -----------------------------------------------------------------------

    pub async fn project_status_counts(pool: &SqlitePool) -> Result<Vec<GroupCount>, sqlx::Error> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT status, COUNT(*) FROM projects \
             WHERE status IS NOT NULL \
             GROUP BY status ORDER BY status",
        )
        .fetch_all(pool)
        .await?;
        Ok(group_counts(rows))
    }

    pub async fn project_type_counts(pool: &SqlitePool) -> Result<Vec<GroupCount>, sqlx::Error> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT type, COUNT(*) FROM projects \
             WHERE type IS NOT NULL \
             GROUP BY type ORDER BY type",
        )
        .fetch_all(pool)
        .await?;
        Ok(group_counts(rows))
    }

    /// In-progress projects, optionally restricted to those started on or
    /// before `cutoff`.
    pub async fn active_project_count(
        pool: &SqlitePool,
        cutoff: Option<NaiveDate>,
    ) -> Result<i64, sqlx::Error> {
        let (count,) = sqlx::query_as::<_, (i64,)>(
            "SELECT COUNT(*) FROM projects \
             WHERE status = ?1 AND (?2 IS NULL OR date(startDate) <= date(?2))",
        )
        .bind(STATUS_IN_PROGRESS)
        .bind(cutoff)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// The `limit` most recently started projects; ties broken by id.
    pub async fn recent_projects(
        pool: &SqlitePool,
        limit: i64,
    ) -> Result<Vec<ProjectSpan>, sqlx::Error> {
        let rows = sqlx::query_as::<_, (String, String, String)>(
            "SELECT name, startDate, endDate FROM projects \
             ORDER BY startDate DESC, id DESC LIMIT ?1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(name, start_date, end_date)| ProjectSpan {
                name,
                start_date,
                end_date,
            })
            .collect())
    }

    pub async fn project_year_counts(pool: &SqlitePool) -> Result<Vec<GroupCount>, sqlx::Error> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT strftime('%Y', startDate) AS year, COUNT(*) FROM projects \
             WHERE strftime('%Y', startDate) IS NOT NULL \
             GROUP BY year ORDER BY year",
        )
        .fetch_all(pool)
        .await?;
        Ok(group_counts(rows))
    }

    /// Projects per leading organization name.
    pub async fn project_organization_counts(
        pool: &SqlitePool,
    ) -> Result<Vec<GroupCount>, sqlx::Error> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT o.name, COUNT(*) FROM projects p \
             JOIN organizations o ON o.id = p.organizationId \
             GROUP BY o.id, o.name ORDER BY o.name",
        )
        .fetch_all(pool)
        .await?;
        Ok(group_counts(rows))
    }

    pub async fn project_total(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,) = sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Projects whose `[startDate, endDate]` range contains `date`.
    pub async fn projects_running_on(
        pool: &SqlitePool,
        date: NaiveDate,
    ) -> Result<i64, sqlx::Error> {
        let (count,) = sqlx::query_as::<_, (i64,)>(
            "SELECT COUNT(*) FROM projects \
             WHERE date(?1) BETWEEN date(startDate) AND date(endDate)",
        )
        .bind(date)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    // -----------------------------------------------------------------------
    // Tasks
    // -----------------------------------------------------------------------

    pub async fn tasks_due_by_month(
        pool: &SqlitePool,
        from: YearMonth,
        to: YearMonth,
    ) -> Result<Vec<MonthCount>, sqlx::Error> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT strftime('%Y-%m', endDate) AS month, COUNT(*) FROM tasks \
             WHERE strftime('%Y-%m', endDate) BETWEEN ?1 AND ?2 \
             GROUP BY month ORDER BY month",
        )
        .bind(from.key())
        .bind(to.key())
        .fetch_all(pool)
        .await?;
        Ok(month_counts(rows))
    }

    /// Completed tasks by the month they were last modified.
    pub async fn tasks_completed_by_month(
        pool: &SqlitePool,
        from: YearMonth,
        to: YearMonth,
    ) -> Result<Vec<MonthCount>, sqlx::Error> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT strftime('%Y-%m', updatedAt) AS month, COUNT(*) FROM tasks \
             WHERE status = ?3 AND strftime('%Y-%m', updatedAt) BETWEEN ?1 AND ?2 \
             GROUP BY month ORDER BY month",
        )
        .bind(from.key())
        .bind(to.key())
        .bind(STATUS_COMPLETED)
        .fetch_all(pool)
        .await?;
        Ok(month_counts(rows))
    }

    pub async fn task_output_counts(
        pool: &SqlitePool,
    ) -> Result<Vec<OutputStatusCount>, sqlx::Error> {
        let rows = sqlx::query_as::<_, (String, String, i64)>(
            "SELECT type, status, COUNT(*) FROM tasks \
             WHERE type IS NOT NULL \
             GROUP BY type, status ORDER BY type, status",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(category, status, count)| OutputStatusCount {
                category,
                status,
                count,
            })
            .collect())
    }

    // -----------------------------------------------------------------------
    // Funding
    // -----------------------------------------------------------------------

    /// Funding sums in yuan, by the month the participation was recorded.
    pub async fn funding_by_month(
        pool: &SqlitePool,
        from: YearMonth,
        to: YearMonth,
    ) -> Result<Vec<MonthFunding>, sqlx::Error> {
        let rows = sqlx::query_as::<_, (String, f64, f64)>(
            "SELECT strftime('%Y-%m', createdAt) AS month, \
                    CAST(COALESCE(SUM(allocation), 0) AS REAL), \
                    CAST(COALESCE(SUM(selfFunding), 0) AS REAL) \
             FROM project_organizations \
             WHERE strftime('%Y-%m', createdAt) BETWEEN ?1 AND ?2 \
             GROUP BY month ORDER BY month",
        )
        .bind(from.key())
        .bind(to.key())
        .fetch_all(pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(month, allocation, self_funding)| MonthFunding {
                month,
                allocation,
                self_funding,
            })
            .collect())
    }

    // -----------------------------------------------------------------------
    // Organizations
    // -----------------------------------------------------------------------

    pub async fn organizations(pool: &SqlitePool) -> Result<Vec<OrganizationRow>, sqlx::Error> {
        let rows = sqlx::query_as::<_, (i64, String, String)>(
            "SELECT id, name, type FROM organizations ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(id, name, org_type)| OrganizationRow { id, name, org_type })
            .collect())
    }

    /// Pairs of organizations taking part in the same project, weighted by
    /// the number of distinct projects they share.
    pub async fn collaboration_pairs(
        pool: &SqlitePool,
    ) -> Result<Vec<CollaborationPair>, sqlx::Error> {
        let rows = sqlx::query_as::<_, (i64, i64, i64)>(
            "SELECT po1.organizationId, po2.organizationId, COUNT(DISTINCT po1.projectId) \
             FROM project_organizations po1 \
             JOIN project_organizations po2 \
                  ON po2.projectId = po1.projectId \
                 AND po1.organizationId < po2.organizationId \
             JOIN projects p ON p.id = po1.projectId \
             JOIN organizations o1 ON o1.id = po1.organizationId \
             JOIN organizations o2 ON o2.id = po2.organizationId \
             GROUP BY po1.organizationId, po2.organizationId \
             ORDER BY po1.organizationId, po2.organizationId",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(source, target, shared_projects)| CollaborationPair {
                source,
                target,
                shared_projects,
            })
            .collect())
    }
}
