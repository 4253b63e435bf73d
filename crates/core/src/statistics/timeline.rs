//! Start/mid/end points of the most recently started projects.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::{failed, ReportError, ReportKind, StatisticsSource};
use crate::types::Timestamp;

/// Number of projects on the timeline chart.
pub const TIMELINE_PROJECT_LIMIT: i64 = 10;

/// A chart point: `[isoTimestamp, projectName]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelinePoint(pub String, pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineData {
    pub projects: Vec<String>,
    pub start_points: Vec<TimelinePoint>,
    pub mid_points: Vec<TimelinePoint>,
    pub end_points: Vec<TimelinePoint>,
}

/// Parse a stored date column.
///
/// Accepts `YYYY-MM-DD` (midnight UTC), `YYYY-MM-DD HH:MM:SS` (SQLite's
/// `CURRENT_TIMESTAMP` form, UTC) and RFC 3339.
pub fn parse_stored_date(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Linear midpoint between two instants.
pub fn midpoint(start: Timestamp, end: Timestamp) -> Timestamp {
    start + (end - start) / 2
}

fn iso(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub async fn timeline_data<S>(source: &S) -> Result<TimelineData, ReportError>
where
    S: StatisticsSource + ?Sized,
{
    let spans = source
        .recent_projects(TIMELINE_PROJECT_LIMIT)
        .await
        .map_err(failed(ReportKind::Timeline))?;

    let mut data = TimelineData {
        projects: Vec::with_capacity(spans.len()),
        start_points: Vec::with_capacity(spans.len()),
        mid_points: Vec::with_capacity(spans.len()),
        end_points: Vec::with_capacity(spans.len()),
    };

    for span in spans {
        let (Some(start), Some(end)) = (
            parse_stored_date(&span.start_date),
            parse_stored_date(&span.end_date),
        ) else {
            tracing::warn!(
                project = %span.name,
                start_date = %span.start_date,
                end_date = %span.end_date,
                "Skipping project with unparsable dates on timeline",
            );
            continue;
        };

        let mid = midpoint(start, end);
        data.start_points
            .push(TimelinePoint(iso(start), span.name.clone()));
        data.mid_points.push(TimelinePoint(iso(mid), span.name.clone()));
        data.end_points.push(TimelinePoint(iso(end), span.name.clone()));
        data.projects.push(span.name);
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::memory::fixtures::*;
    use crate::statistics::memory::InMemorySource;
    use crate::status::WorkStatus;

    #[test]
    fn parses_supported_date_forms() {
        let day = parse_stored_date("2023-04-01").unwrap();
        assert_eq!(iso(day), "2023-04-01T00:00:00.000Z");

        let sqlite = parse_stored_date("2023-04-01 08:30:00").unwrap();
        assert_eq!(iso(sqlite), "2023-04-01T08:30:00.000Z");

        let rfc = parse_stored_date("2023-04-01T10:00:00+02:00").unwrap();
        assert_eq!(iso(rfc), "2023-04-01T08:00:00.000Z");

        assert!(parse_stored_date("next spring").is_none());
    }

    #[test]
    fn midpoint_lies_between_start_and_end() {
        let start = parse_stored_date("2022-01-01").unwrap();
        let end = parse_stored_date("2022-01-03").unwrap();
        let mid = midpoint(start, end);
        assert!(start < mid && mid < end);
        assert_eq!(iso(mid), "2022-01-02T00:00:00.000Z");
    }

    #[tokio::test]
    async fn at_most_ten_projects_latest_first() {
        let mut source = InMemorySource::new();
        source.projects = (0..12)
            .map(|i| {
                project(
                    &format!("P{i:02}"),
                    "市级项目",
                    WorkStatus::InProgress,
                    1,
                    date(2020, 1 + i as u32, 1),
                    date(2026, 1, 1),
                )
            })
            .collect();

        let data = timeline_data(&source).await.unwrap();
        assert_eq!(data.projects.len(), 10);
        assert_eq!(data.projects[0], "P11");
        assert_eq!(data.projects[9], "P02");
        assert_eq!(data.start_points[0].0, "2020-12-01T00:00:00.000Z");
        assert!(data
            .start_points
            .windows(2)
            .all(|w| w[0].0 > w[1].0));
        for ((s, m), e) in data.start_points.iter().zip(&data.mid_points).zip(&data.end_points) {
            assert!(s.0 < m.0 && m.0 < e.0);
            assert_eq!(s.1, m.1);
            assert_eq!(m.1, e.1);
        }
    }

    #[test]
    fn point_serializes_as_pair() {
        let point = TimelinePoint("2024-01-01T00:00:00.000Z".into(), "P".into());
        assert_eq!(
            serde_json::to_string(&point).unwrap(),
            r#"["2024-01-01T00:00:00.000Z","P"]"#
        );
    }
}
