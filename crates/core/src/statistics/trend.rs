//! Trailing twelve-month trends: task completion and budget.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::{failed, MonthCount, ReportError, ReportKind, StatisticsSource};
use crate::months::{trailing_months, YearMonth, TRAILING_WINDOW_MONTHS};

/// Stored budgets are in yuan; reports are in units of 10,000 yuan (万元).
pub const BUDGET_REPORT_UNIT: f64 = 10_000.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskStatistics {
    /// `YYYY-MM` labels, oldest first.
    pub timeline: Vec<String>,
    /// Tasks due in each month.
    pub planned: Vec<i64>,
    /// Tasks completed in each month.
    pub actual: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatistics {
    pub timeline: Vec<String>,
    /// Allocated funds per month, in 万元.
    pub planned: Vec<f64>,
    /// Self-raised funds per month, in 万元.
    pub actual: Vec<f64>,
}

/// Spread bucketed rows over `months`, zero-filling months without a row.
fn spread<V, T, F>(months: &[YearMonth], rows: &HashMap<String, V>, value: F) -> Vec<T>
where
    T: Default,
    F: Fn(&V) -> T,
{
    months
        .iter()
        .map(|m| rows.get(&m.key()).map(&value).unwrap_or_default())
        .collect()
}

fn by_month(rows: Vec<MonthCount>) -> HashMap<String, i64> {
    let mut map = HashMap::new();
    for row in rows {
        *map.entry(row.month).or_insert(0) += row.count.max(0);
    }
    map
}

fn window(as_of: NaiveDate) -> (Vec<YearMonth>, YearMonth, YearMonth) {
    let months = trailing_months(as_of, TRAILING_WINDOW_MONTHS);
    let from = months[0];
    let to = months[months.len() - 1];
    (months, from, to)
}

pub async fn task_statistics<S>(source: &S, as_of: NaiveDate) -> Result<TaskStatistics, ReportError>
where
    S: StatisticsSource + ?Sized,
{
    let fail = failed(ReportKind::Tasks);
    let (months, from, to) = window(as_of);

    let due = by_month(source.tasks_due_by_month(from, to).await.map_err(&fail)?);
    let done = by_month(
        source
            .tasks_completed_by_month(from, to)
            .await
            .map_err(&fail)?,
    );

    Ok(TaskStatistics {
        timeline: months.iter().map(|m| m.key()).collect(),
        planned: spread(&months, &due, |n| *n),
        actual: spread(&months, &done, |n| *n),
    })
}

pub async fn budget_statistics<S>(
    source: &S,
    as_of: NaiveDate,
) -> Result<BudgetStatistics, ReportError>
where
    S: StatisticsSource + ?Sized,
{
    let fail = failed(ReportKind::Budget);
    let (months, from, to) = window(as_of);

    let mut sums: HashMap<String, (f64, f64)> = HashMap::new();
    for row in source.funding_by_month(from, to).await.map_err(&fail)? {
        let entry = sums.entry(row.month).or_default();
        entry.0 += row.allocation;
        entry.1 += row.self_funding;
    }

    Ok(BudgetStatistics {
        timeline: months.iter().map(|m| m.key()).collect(),
        planned: spread(&months, &sums, |s| s.0 / BUDGET_REPORT_UNIT),
        actual: spread(&months, &sums, |s| s.1 / BUDGET_REPORT_UNIT),
    })
}
