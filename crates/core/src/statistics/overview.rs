//! Portfolio overview: project counts by year, type and leading organization.

use chrono::NaiveDate;
use serde::Serialize;

use super::{failed, ReportError, ReportKind, StatisticsSource};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub project_type: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationCount {
    pub organization: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsOverview {
    pub projects_by_year: Vec<YearCount>,
    pub projects_by_type: Vec<TypeCount>,
    pub projects_by_org: Vec<OrganizationCount>,
    pub total_projects: i64,
    /// Projects whose date range contains the report date.
    pub active_projects: i64,
}

pub async fn statistics_overview<S>(
    source: &S,
    as_of: NaiveDate,
) -> Result<StatisticsOverview, ReportError>
where
    S: StatisticsSource + ?Sized,
{
    let fail = failed(ReportKind::Overview);

    let mut years = source.project_year_counts().await.map_err(&fail)?;
    years.sort_by(|a, b| a.key.cmp(&b.key));
    let types = source.project_type_counts().await.map_err(&fail)?;
    let orgs = source.project_organization_counts().await.map_err(&fail)?;
    let total = source.project_total().await.map_err(&fail)?;
    let running = source.projects_running_on(as_of).await.map_err(&fail)?;

    Ok(StatisticsOverview {
        projects_by_year: years
            .into_iter()
            .map(|g| YearCount {
                year: g.key,
                count: g.count,
            })
            .collect(),
        projects_by_type: types
            .into_iter()
            .map(|g| TypeCount {
                project_type: g.key,
                count: g.count,
            })
            .collect(),
        projects_by_org: orgs
            .into_iter()
            .map(|g| OrganizationCount {
                organization: g.key,
                count: g.count,
            })
            .collect(),
        total_projects: total,
        active_projects: running,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::memory::fixtures::*;
    use crate::statistics::memory::InMemorySource;
    use crate::status::WorkStatus;

    #[tokio::test]
    async fn overview_groups_projects() {
        let mut source = InMemorySource::new();
        source.organizations = vec![organization(1, "北京大学", "学院")];
        let mut orphan = project(
            "P3",
            "横向课题",
            WorkStatus::NotStarted,
            1,
            date(2022, 2, 1),
            date(2022, 12, 31),
        );
        orphan.organization_id = Some(42);
        source.projects = vec![
            project("P1", "国家级项目", WorkStatus::InProgress, 1, date(2021, 5, 1), date(2024, 5, 1)),
            project("P2", "国家级项目", WorkStatus::InProgress, 1, date(2021, 9, 1), date(2022, 9, 1)),
            orphan,
        ];

        let overview = statistics_overview(&source, date(2023, 1, 1)).await.unwrap();
        assert_eq!(overview.total_projects, 3);
        assert_eq!(overview.active_projects, 1);
        assert_eq!(
            overview.projects_by_year,
            vec![
                YearCount { year: "2021".into(), count: 2 },
                YearCount { year: "2022".into(), count: 1 },
            ]
        );
        // The project with a dangling organization is left out.
        assert_eq!(
            overview.projects_by_org,
            vec![OrganizationCount { organization: "北京大学".into(), count: 2 }]
        );

        let json = serde_json::to_value(&overview).unwrap();
        assert_eq!(json["projectsByType"][0]["type"], "国家级项目");
    }
}
