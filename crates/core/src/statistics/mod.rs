//! Reporting layer: aggregate statistics over the LabMan datastore.
//!
//! Each report is a read-only async function taking a [`StatisticsSource`]
//! and the date the report is computed for. Sources hand back plain row
//! sets (group counts, month buckets, pairs); the functions in the
//! submodules turn those into the chart-ready shapes the frontend renders.
//!
//! Reports are all-or-nothing: the first source failure aborts the report
//! with a [`ReportError`] and no partial result is produced.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::months::YearMonth;
use crate::types::DbId;

#[cfg(any(test, feature = "test-util"))]
pub mod memory;
pub mod network;
pub mod outputs;
pub mod overview;
pub mod projects;
pub mod timeline;
pub mod trend;

pub use network::{organization_network, OrganizationNetwork};
pub use outputs::{output_statistics, OutputStatistics};
pub use overview::{statistics_overview, StatisticsOverview};
pub use projects::{project_statistics, ProjectStatistics};
pub use timeline::{timeline_data, TimelineData};
pub use trend::{budget_statistics, task_statistics, BudgetStatistics, TaskStatistics};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error type returned by a [`StatisticsSource`].
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias for [`StatisticsSource`] methods.
pub type SourceResult<T> = Result<T, SourceError>;

/// Identifies which report failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Projects,
    Tasks,
    Outputs,
    Timeline,
    Budget,
    Organizations,
    Overview,
}

impl ReportKind {
    /// Short name, used as a log field.
    pub fn name(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Tasks => "tasks",
            Self::Outputs => "outputs",
            Self::Timeline => "timeline",
            Self::Budget => "budget",
            Self::Organizations => "organizations",
            Self::Overview => "overview",
        }
    }

    /// Human-readable description, used in error messages.
    pub fn description(self) -> &'static str {
        match self {
            Self::Projects => "project statistics",
            Self::Tasks => "task statistics",
            Self::Outputs => "output statistics",
            Self::Timeline => "timeline data",
            Self::Budget => "budget statistics",
            Self::Organizations => "organization network",
            Self::Overview => "statistics overview",
        }
    }
}

/// A report could not be computed because its source failed.
///
/// The message carries the source error text unchanged.
#[derive(Debug, thiserror::Error)]
#[error("Error getting {}: {message}", .report.description())]
pub struct ReportError {
    pub report: ReportKind,
    pub message: String,
}

impl ReportError {
    pub fn from_source(report: ReportKind, err: SourceError) -> Self {
        Self {
            report,
            message: err.to_string(),
        }
    }
}

/// Shorthand used by every report to tag source failures.
pub(crate) fn failed(report: ReportKind) -> impl Fn(SourceError) -> ReportError {
    move |err| ReportError::from_source(report, err)
}

// ---------------------------------------------------------------------------
// Row sets
// ---------------------------------------------------------------------------

/// A `GROUP BY key` count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub key: String,
    pub count: i64,
}

impl GroupCount {
    pub fn new(key: impl Into<String>, count: i64) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// A count bucketed by `YYYY-MM` month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCount {
    pub month: String,
    pub count: i64,
}

/// Funding sums for project-organization rows created in one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthFunding {
    pub month: String,
    pub allocation: f64,
    pub self_funding: f64,
}

/// Task count for one (output category, status) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputStatusCount {
    pub category: String,
    pub status: String,
    pub count: i64,
}

/// A project's name and raw date columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpan {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationRow {
    pub id: DbId,
    pub name: String,
    pub org_type: String,
}

/// Two organizations sharing projects; always `source < target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaborationPair {
    pub source: DbId,
    pub target: DbId,
    pub shared_projects: i64,
}

// ---------------------------------------------------------------------------
// Source abstraction
// ---------------------------------------------------------------------------

/// Read-only access to the row sets the reports are computed from.
///
/// Constructed once at startup and shared by every request. Implementations
/// must exclude rows whose grouping column or foreign key is null or
/// dangling rather than failing on them.
#[async_trait]
pub trait StatisticsSource: Send + Sync {
    /// Projects grouped by `status`.
    async fn project_status_counts(&self) -> SourceResult<Vec<GroupCount>>;

    /// Projects grouped by `type`.
    async fn project_type_counts(&self) -> SourceResult<Vec<GroupCount>>;

    /// Count of in-progress projects, optionally only those whose start
    /// date is on or before the given date.
    async fn active_project_count(
        &self,
        started_on_or_before: Option<NaiveDate>,
    ) -> SourceResult<i64>;

    /// Tasks bucketed by the month of their `endDate`, for months in `from..=to`.
    async fn tasks_due_by_month(
        &self,
        from: YearMonth,
        to: YearMonth,
    ) -> SourceResult<Vec<MonthCount>>;

    /// Completed tasks bucketed by the month of their `updatedAt`, for
    /// months in `from..=to`.
    async fn tasks_completed_by_month(
        &self,
        from: YearMonth,
        to: YearMonth,
    ) -> SourceResult<Vec<MonthCount>>;

    /// Tasks with an output category, grouped by category and status.
    async fn task_output_counts(&self) -> SourceResult<Vec<OutputStatusCount>>;

    /// The `limit` most recently started projects, latest first.
    async fn recent_projects(&self, limit: i64) -> SourceResult<Vec<ProjectSpan>>;

    /// Allocation and self-funding sums bucketed by the month the
    /// project-organization row was created, for months in `from..=to`.
    async fn funding_by_month(
        &self,
        from: YearMonth,
        to: YearMonth,
    ) -> SourceResult<Vec<MonthFunding>>;

    /// All organizations ordered by id.
    async fn organizations(&self) -> SourceResult<Vec<OrganizationRow>>;

    /// Organization pairs that share at least one project.
    async fn collaboration_pairs(&self) -> SourceResult<Vec<CollaborationPair>>;

    /// Projects grouped by the year of their start date, ascending.
    async fn project_year_counts(&self) -> SourceResult<Vec<GroupCount>>;

    /// Projects grouped by the name of their leading organization.
    async fn project_organization_counts(&self) -> SourceResult<Vec<GroupCount>>;

    /// Total number of projects.
    async fn project_total(&self) -> SourceResult<i64>;

    /// Projects whose date range contains `date`.
    async fn projects_running_on(&self, date: NaiveDate) -> SourceResult<i64>;
}
