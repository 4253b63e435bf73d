//! Project status/type distribution and the active-project trend.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::{failed, GroupCount, ReportError, ReportKind, StatisticsSource};
use crate::months::one_month_before;
use crate::status::WorkStatus;

/// Project counts per lifecycle status, keyed the way the dashboard reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusDistribution {
    pub ongoing: i64,
    pub completed: i64,
    pub delayed: i64,
    pub pending: i64,
}

impl StatusDistribution {
    /// Fold grouped status rows; statuses outside the known four are ignored.
    pub fn from_counts(rows: &[GroupCount]) -> Self {
        let mut dist = Self::default();
        for row in rows {
            let Ok(status) = WorkStatus::from_label(&row.key) else {
                continue;
            };
            let slot = match status {
                WorkStatus::InProgress => &mut dist.ongoing,
                WorkStatus::Completed => &mut dist.completed,
                WorkStatus::Delayed => &mut dist.delayed,
                WorkStatus::NotStarted => &mut dist.pending,
            };
            *slot += row.count;
        }
        dist
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatistics {
    pub status_distribution: StatusDistribution,
    pub type_distribution: BTreeMap<String, i64>,
    pub active_projects: i64,
    /// Percentage change against the baseline, rounded to an integer.
    pub active_projects_trend: i64,
}

/// Month-over-month change of `current` against `baseline`, as a whole
/// percentage with halves rounded up. Zero when there is no baseline.
pub fn trend_percent(current: i64, baseline: i64) -> i64 {
    if baseline == 0 {
        return 0;
    }
    let pct = (current - baseline) as f64 / baseline as f64 * 100.0;
    (pct + 0.5).floor() as i64
}

pub async fn project_statistics<S>(
    source: &S,
    as_of: NaiveDate,
) -> Result<ProjectStatistics, ReportError>
where
    S: StatisticsSource + ?Sized,
{
    let fail = failed(ReportKind::Projects);

    let statuses = source.project_status_counts().await.map_err(&fail)?;
    let types = source.project_type_counts().await.map_err(&fail)?;
    let active = source.active_project_count(None).await.map_err(&fail)?;
    let baseline = source
        .active_project_count(Some(one_month_before(as_of)))
        .await
        .map_err(&fail)?;

    let mut type_distribution = BTreeMap::new();
    for row in types {
        *type_distribution.entry(row.key).or_insert(0) += row.count;
    }

    Ok(ProjectStatistics {
        status_distribution: StatusDistribution::from_counts(&statuses),
        type_distribution,
        active_projects: active,
        active_projects_trend: trend_percent(active, baseline),
    })
}
