//! In-memory [`StatisticsSource`] over plain record vectors.
//!
//! Mirrors the grouping rules of the SQL source so reports can be exercised
//! without a database. A source built with [`InMemorySource::failing`]
//! rejects every call, which is how the error path is tested.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};

use super::{
    CollaborationPair, GroupCount, MonthCount, MonthFunding, OrganizationRow, OutputStatusCount,
    ProjectSpan, SourceResult, StatisticsSource,
};
use crate::months::YearMonth;
use crate::status::WorkStatus;
use crate::types::DbId;

#[derive(Debug, Clone)]
pub struct MemProject {
    pub name: String,
    pub project_type: String,
    pub status: String,
    /// Leading organization; may dangle.
    pub organization_id: Option<DbId>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct MemTask {
    pub output_type: Option<String>,
    pub status: String,
    pub end_date: Option<NaiveDate>,
    pub updated_at: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct MemParticipation {
    pub project_id: DbId,
    pub organization_id: Option<DbId>,
    pub allocation: f64,
    pub self_funding: f64,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct MemOrganization {
    pub id: DbId,
    pub name: String,
    pub org_type: String,
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pub projects: Vec<MemProject>,
    pub tasks: Vec<MemTask>,
    pub participations: Vec<MemParticipation>,
    pub organizations: Vec<MemOrganization>,
    fail_with: Option<String>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    fn check(&self) -> SourceResult<()> {
        match &self.fail_with {
            Some(msg) => Err(msg.clone().into()),
            None => Ok(()),
        }
    }

    fn organization(&self, id: Option<DbId>) -> Option<&MemOrganization> {
        let id = id?;
        self.organizations.iter().find(|o| o.id == id)
    }
}

fn in_window(date: NaiveDate, from: YearMonth, to: YearMonth) -> bool {
    let month = YearMonth::of(date);
    from <= month && month <= to
}

fn group<I>(keys: I) -> Vec<GroupCount>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: BTreeMap<String, i64> = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(key, count)| GroupCount { key, count })
        .collect()
}

fn month_counts<I>(dates: I) -> Vec<MonthCount>
where
    I: IntoIterator<Item = NaiveDate>,
{
    group(dates.into_iter().map(|d| YearMonth::of(d).key()))
        .into_iter()
        .map(|g| MonthCount {
            month: g.key,
            count: g.count,
        })
        .collect()
}

#[async_trait]
impl StatisticsSource for InMemorySource {
    async fn project_status_counts(&self) -> SourceResult<Vec<GroupCount>> {
        self.check()?;
        Ok(group(self.projects.iter().map(|p| p.status.clone())))
    }

    async fn project_type_counts(&self) -> SourceResult<Vec<GroupCount>> {
        self.check()?;
        Ok(group(self.projects.iter().map(|p| p.project_type.clone())))
    }

    async fn active_project_count(
        &self,
        started_on_or_before: Option<NaiveDate>,
    ) -> SourceResult<i64> {
        self.check()?;
        let count = self
            .projects
            .iter()
            .filter(|p| p.status == WorkStatus::InProgress.label())
            .filter(|p| started_on_or_before.map_or(true, |cutoff| p.start_date <= cutoff))
            .count();
        Ok(count as i64)
    }

    async fn tasks_due_by_month(
        &self,
        from: YearMonth,
        to: YearMonth,
    ) -> SourceResult<Vec<MonthCount>> {
        self.check()?;
        Ok(month_counts(
            self.tasks
                .iter()
                .filter_map(|t| t.end_date)
                .filter(|d| in_window(*d, from, to)),
        ))
    }

    async fn tasks_completed_by_month(
        &self,
        from: YearMonth,
        to: YearMonth,
    ) -> SourceResult<Vec<MonthCount>> {
        self.check()?;
        Ok(month_counts(
            self.tasks
                .iter()
                .filter(|t| t.status == WorkStatus::Completed.label())
                .map(|t| t.updated_at)
                .filter(|d| in_window(*d, from, to)),
        ))
    }

    async fn task_output_counts(&self) -> SourceResult<Vec<OutputStatusCount>> {
        self.check()?;
        let mut counts: BTreeMap<(String, String), i64> = BTreeMap::new();
        for task in &self.tasks {
            if let Some(category) = &task.output_type {
                *counts
                    .entry((category.clone(), task.status.clone()))
                    .or_default() += 1;
            }
        }
        Ok(counts
            .into_iter()
            .map(|((category, status), count)| OutputStatusCount {
                category,
                status,
                count,
            })
            .collect())
    }

    async fn recent_projects(&self, limit: i64) -> SourceResult<Vec<ProjectSpan>> {
        self.check()?;
        let mut projects: Vec<&MemProject> = self.projects.iter().collect();
        projects.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(projects
            .into_iter()
            .take(usize::try_from(limit).unwrap_or(0))
            .map(|p| ProjectSpan {
                name: p.name.clone(),
                start_date: p.start_date.format("%Y-%m-%d").to_string(),
                end_date: p.end_date.format("%Y-%m-%d").to_string(),
            })
            .collect())
    }

    async fn funding_by_month(
        &self,
        from: YearMonth,
        to: YearMonth,
    ) -> SourceResult<Vec<MonthFunding>> {
        self.check()?;
        let mut sums: BTreeMap<String, (f64, f64)> = BTreeMap::new();
        for row in self
            .participations
            .iter()
            .filter(|r| in_window(r.created_at, from, to))
        {
            let entry = sums.entry(YearMonth::of(row.created_at).key()).or_default();
            entry.0 += row.allocation;
            entry.1 += row.self_funding;
        }
        Ok(sums
            .into_iter()
            .map(|(month, (allocation, self_funding))| MonthFunding {
                month,
                allocation,
                self_funding,
            })
            .collect())
    }

    async fn organizations(&self) -> SourceResult<Vec<OrganizationRow>> {
        self.check()?;
        let mut rows: Vec<OrganizationRow> = self
            .organizations
            .iter()
            .map(|o| OrganizationRow {
                id: o.id,
                name: o.name.clone(),
                org_type: o.org_type.clone(),
            })
            .collect();
        rows.sort_by_key(|r| r.id);
        Ok(rows)
    }

    async fn collaboration_pairs(&self) -> SourceResult<Vec<CollaborationPair>> {
        self.check()?;
        let mut members: BTreeMap<DbId, BTreeSet<DbId>> = BTreeMap::new();
        for row in &self.participations {
            if let Some(org) = self.organization(row.organization_id) {
                members.entry(row.project_id).or_default().insert(org.id);
            }
        }

        let mut shared: BTreeMap<(DbId, DbId), i64> = BTreeMap::new();
        for orgs in members.values() {
            let orgs: Vec<DbId> = orgs.iter().copied().collect();
            for (i, &source) in orgs.iter().enumerate() {
                for &target in &orgs[i + 1..] {
                    *shared.entry((source, target)).or_default() += 1;
                }
            }
        }

        Ok(shared
            .into_iter()
            .map(|((source, target), shared_projects)| CollaborationPair {
                source,
                target,
                shared_projects,
            })
            .collect())
    }

    async fn project_year_counts(&self) -> SourceResult<Vec<GroupCount>> {
        self.check()?;
        Ok(group(
            self.projects
                .iter()
                .map(|p| format!("{:04}", p.start_date.year())),
        ))
    }

    async fn project_organization_counts(&self) -> SourceResult<Vec<GroupCount>> {
        self.check()?;
        Ok(group(self.projects.iter().filter_map(|p| {
            self.organization(p.organization_id).map(|o| o.name.clone())
        })))
    }

    async fn project_total(&self) -> SourceResult<i64> {
        self.check()?;
        Ok(self.projects.len() as i64)
    }

    async fn projects_running_on(&self, date: NaiveDate) -> SourceResult<i64> {
        self.check()?;
        let count = self
            .projects
            .iter()
            .filter(|p| p.start_date <= date && date <= p.end_date)
            .count();
        Ok(count as i64)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Record builders shared by the report unit tests.

    use super::*;

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn organization(id: DbId, name: &str, org_type: &str) -> MemOrganization {
        MemOrganization {
            id,
            name: name.to_string(),
            org_type: org_type.to_string(),
        }
    }

    pub fn project(
        name: &str,
        project_type: &str,
        status: WorkStatus,
        organization_id: DbId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> MemProject {
        MemProject {
            name: name.to_string(),
            project_type: project_type.to_string(),
            status: status.label().to_string(),
            organization_id: Some(organization_id),
            start_date: start,
            end_date: end,
        }
    }

    pub fn participation(
        project_id: DbId,
        organization_id: DbId,
        created_at: NaiveDate,
    ) -> MemParticipation {
        MemParticipation {
            project_id,
            organization_id: Some(organization_id),
            allocation: 0.0,
            self_funding: 0.0,
            created_at,
        }
    }

    pub fn task(
        status: WorkStatus,
        output_type: Option<&str>,
        end_date: Option<NaiveDate>,
        updated_at: NaiveDate,
    ) -> MemTask {
        MemTask {
            output_type: output_type.map(str::to_string),
            status: status.label().to_string(),
            end_date,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[tokio::test]
    async fn failing_source_rejects_every_call() {
        let source = InMemorySource::failing("disk I/O error");
        let err = source.project_total().await.unwrap_err();
        assert_eq!(err.to_string(), "disk I/O error");
        assert!(source.organizations().await.is_err());
    }

    #[tokio::test]
    async fn collaboration_pairs_skip_dangling_organizations() {
        let mut source = InMemorySource::new();
        source.organizations = vec![organization(1, "A", "学院"), organization(2, "B", "企业")];
        let d = date(2024, 1, 1);
        source.participations = vec![
            participation(10, 1, d),
            participation(10, 2, d),
            participation(10, 99, d),
        ];

        let pairs = source.collaboration_pairs().await.unwrap();
        assert_eq!(
            pairs,
            vec![CollaborationPair {
                source: 1,
                target: 2,
                shared_projects: 1
            }]
        );
    }

    #[tokio::test]
    async fn recent_projects_are_latest_first_and_limited() {
        let mut source = InMemorySource::new();
        source.projects = (1..=4)
            .map(|i| {
                project(
                    &format!("P{i}"),
                    "市级项目",
                    WorkStatus::InProgress,
                    1,
                    date(2020 + i as i32, 1, 1),
                    date(2030, 1, 1),
                )
            })
            .collect();

        let spans = source.recent_projects(2).await.unwrap();
        let names: Vec<_> = spans.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["P4", "P3"]);
        assert_eq!(spans[0].start_date, "2024-01-01");
    }
}
