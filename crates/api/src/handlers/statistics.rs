//! Handlers for the statistics dashboard.
//!
//! Each handler computes one report against the shared
//! [`StatisticsSource`](labman_core::statistics::StatisticsSource) and
//! returns the bare report JSON. Date-relative reports use the current UTC
//! date.

use axum::extract::State;
use axum::Json;
use chrono::{NaiveDate, Utc};
use labman_core::statistics::{
    self, BudgetStatistics, OrganizationNetwork, OutputStatistics, ProjectStatistics,
    StatisticsOverview, TaskStatistics, TimelineData,
};

use crate::error::AppResult;
use crate::state::AppState;

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// GET /api/statistics/projects
pub async fn projects(State(state): State<AppState>) -> AppResult<Json<ProjectStatistics>> {
    let report = statistics::project_statistics(state.statistics.as_ref(), today()).await?;
    Ok(Json(report))
}

/// GET /api/statistics/tasks
pub async fn tasks(State(state): State<AppState>) -> AppResult<Json<TaskStatistics>> {
    let report = statistics::task_statistics(state.statistics.as_ref(), today()).await?;
    Ok(Json(report))
}

/// GET /api/statistics/outputs
pub async fn outputs(State(state): State<AppState>) -> AppResult<Json<OutputStatistics>> {
    let report = statistics::output_statistics(state.statistics.as_ref()).await?;
    Ok(Json(report))
}

/// GET /api/statistics/timeline
pub async fn timeline(State(state): State<AppState>) -> AppResult<Json<TimelineData>> {
    let report = statistics::timeline_data(state.statistics.as_ref()).await?;
    Ok(Json(report))
}

/// GET /api/statistics/budget
pub async fn budget(State(state): State<AppState>) -> AppResult<Json<BudgetStatistics>> {
    let report = statistics::budget_statistics(state.statistics.as_ref(), today()).await?;
    Ok(Json(report))
}

/// GET /api/statistics/organizations
pub async fn organizations(
    State(state): State<AppState>,
) -> AppResult<Json<OrganizationNetwork>> {
    let report = statistics::organization_network(state.statistics.as_ref()).await?;
    Ok(Json(report))
}

/// GET /api/statistics
pub async fn overview(State(state): State<AppState>) -> AppResult<Json<StatisticsOverview>> {
    let report = statistics::statistics_overview(state.statistics.as_ref(), today()).await?;
    Ok(Json(report))
}
