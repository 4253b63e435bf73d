//! Research output counts per category and status.

use serde::Serialize;

use super::{failed, ReportError, ReportKind, StatisticsSource};
use crate::status::{OutputCategory, WorkStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputStatistics {
    pub types: Vec<&'static str>,
    pub completed: Vec<i64>,
    pub ongoing: Vec<i64>,
    pub planned: Vec<i64>,
}

pub async fn output_statistics<S>(source: &S) -> Result<OutputStatistics, ReportError>
where
    S: StatisticsSource + ?Sized,
{
    let rows = source
        .task_output_counts()
        .await
        .map_err(failed(ReportKind::Outputs))?;

    let n = OutputCategory::ALL.len();
    let mut stats = OutputStatistics {
        types: OutputCategory::ALL.iter().map(|c| c.label()).collect(),
        completed: vec![0; n],
        ongoing: vec![0; n],
        planned: vec![0; n],
    };

    for row in rows {
        let Some(idx) = OutputCategory::ALL
            .iter()
            .position(|c| c.label() == row.category)
        else {
            continue;
        };
        let column = match WorkStatus::from_label(&row.status) {
            Ok(WorkStatus::Completed) => &mut stats.completed,
            Ok(WorkStatus::InProgress) => &mut stats.ongoing,
            Ok(WorkStatus::NotStarted) => &mut stats.planned,
            // Delayed and unknown statuses are not charted.
            _ => continue,
        };
        column[idx] += row.count;
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::memory::fixtures::*;
    use crate::statistics::memory::InMemorySource;

    #[tokio::test]
    async fn counts_per_category_and_status() {
        let d = date(2024, 1, 1);
        let mut source = InMemorySource::new();
        source.tasks = vec![
            task(WorkStatus::Completed, Some("论文"), None, d),
            task(WorkStatus::Completed, Some("论文"), None, d),
            task(WorkStatus::InProgress, Some("专利"), None, d),
            task(WorkStatus::NotStarted, Some("标准规范"), None, d),
            task(WorkStatus::Delayed, Some("论文"), None, d),
            task(WorkStatus::Completed, Some("专著"), None, d),
            task(WorkStatus::Completed, None, None, d),
        ];

        let stats = output_statistics(&source).await.unwrap();
        assert_eq!(stats.types, ["论文", "专利", "软件著作权", "技术报告", "标准规范"]);
        assert_eq!(stats.completed, [2, 0, 0, 0, 0]);
        assert_eq!(stats.ongoing, [0, 1, 0, 0, 0]);
        assert_eq!(stats.planned, [0, 0, 0, 0, 1]);
    }

    #[tokio::test]
    async fn empty_source_gives_zero_columns() {
        let stats = output_statistics(&InMemorySource::new()).await.unwrap();
        assert_eq!(stats.types.len(), 5);
        assert!(stats
            .completed
            .iter()
            .chain(&stats.ongoing)
            .chain(&stats.planned)
            .all(|n| *n == 0));
    }
}
