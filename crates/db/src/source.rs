//! [`StatisticsSource`] backed by the SQLite pool.

use async_trait::async_trait;
use chrono::NaiveDate;
use labman_core::months::YearMonth;
use labman_core::statistics::{
    CollaborationPair, GroupCount, MonthCount, MonthFunding, OrganizationRow, OutputStatusCount,
    ProjectSpan, SourceResult, StatisticsSource,
};

use crate::repositories::StatisticsRepo;
use crate::DbPool;

/// Runs the report queries against a shared pool.
///
/// Cloning is cheap; the pool is reference-counted.
#[derive(Debug, Clone)]
pub struct PoolStatisticsSource {
    pool: DbPool,
}

impl PoolStatisticsSource {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatisticsSource for PoolStatisticsSource {
    async fn project_status_counts(&self) -> SourceResult<Vec<GroupCount>> {
        Ok(StatisticsRepo::project_status_counts(&self.pool).await?)
    }

    async fn project_type_counts(&self) -> SourceResult<Vec<GroupCount>> {
        Ok(StatisticsRepo::project_type_counts(&self.pool).await?)
    }

    async fn active_project_count(
        &self,
        started_on_or_before: Option<NaiveDate>,
    ) -> SourceResult<i64> {
        Ok(StatisticsRepo::active_project_count(&self.pool, started_on_or_before).await?)
    }

    async fn tasks_due_by_month(
        &self,
        from: YearMonth,
        to: YearMonth,
    ) -> SourceResult<Vec<MonthCount>> {
        Ok(StatisticsRepo::tasks_due_by_month(&self.pool, from, to).await?)
    }

    async fn tasks_completed_by_month(
        &self,
        from: YearMonth,
        to: YearMonth,
    ) -> SourceResult<Vec<MonthCount>> {
        Ok(StatisticsRepo::tasks_completed_by_month(&self.pool, from, to).await?)
    }

    async fn task_output_counts(&self) -> SourceResult<Vec<OutputStatusCount>> {
        Ok(StatisticsRepo::task_output_counts(&self.pool).await?)
    }

    async fn recent_projects(&self, limit: i64) -> SourceResult<Vec<ProjectSpan>> {
        Ok(StatisticsRepo::recent_projects(&self.pool, limit).await?)
    }

    async fn funding_by_month(
        &self,
        from: YearMonth,
        to: YearMonth,
    ) -> SourceResult<Vec<MonthFunding>> {
        Ok(StatisticsRepo::funding_by_month(&self.pool, from, to).await?)
    }

    async fn organizations(&self) -> SourceResult<Vec<OrganizationRow>> {
        Ok(StatisticsRepo::organizations(&self.pool).await?)
    }

    async fn collaboration_pairs(&self) -> SourceResult<Vec<CollaborationPair>> {
        Ok(StatisticsRepo::collaboration_pairs(&self.pool).await?)
    }

    async fn project_year_counts(&self) -> SourceResult<Vec<GroupCount>> {
        Ok(StatisticsRepo::project_year_counts(&self.pool).await?)
    }

    async fn project_organization_counts(&self) -> SourceResult<Vec<GroupCount>> {
        Ok(StatisticsRepo::project_organization_counts(&self.pool).await?)
    }

    async fn project_total(&self) -> SourceResult<i64> {
        Ok(StatisticsRepo::project_total(&self.pool).await?)
    }

    async fn projects_running_on(&self, date: NaiveDate) -> SourceResult<i64> {
        Ok(StatisticsRepo::projects_running_on(&self.pool, date).await?)
    }
}
