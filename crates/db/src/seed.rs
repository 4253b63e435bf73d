//! Randomized sample data for demos and manual testing.
//!
//! [`generate_test_data`] wipes the project-side tables and refills them
//! with plausible projects, participating organizations, milestones, tasks
//! and KPI progress. Organizations and the `admin` account are kept.

use std::collections::HashMap;

use chrono::{Months, NaiveDate};
use labman_core::payload::{
    ExpectedOutcomes, GanttLink, GanttPayload, GanttTask, KpiTarget, TeamAllocation,
};
use labman_core::status::{OutputCategory, WorkStatus, PROJECT_TYPES};
use labman_core::types::DbId;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

use crate::models::milestone::CreateMilestone;
use crate::models::organization::Organization;
use crate::models::progress::CreateProgress;
use crate::models::project::CreateProject;
use crate::models::project_organization::CreateProjectOrganization;
use crate::models::task::CreateTask;
use crate::models::user::{CreateUser, User};
use crate::repositories::{
    GanttRepo, MilestoneRepo, OrganizationRepo, ProgressRepo, ProjectOrganizationRepo,
    ProjectRepo, TaskRepo, UserRepo,
};
use crate::DbPool;

/// Number of projects generated when not configured otherwise.
pub const DEFAULT_PROJECT_COUNT: usize = 200;

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

const NAME_PREFIXES: &[&str] = &[
    "人工智能", "大数据", "区块链", "物联网", "云计算", "信息安全", "智能制造", "数字经济",
    "智慧城市", "新能源",
];

const NAME_SUFFIXES: &[&str] = &[
    "关键技术研究", "应用示范", "技术创新", "平台建设", "系统开发", "技术攻关", "产业化应用",
    "集成创新", "示范工程", "技术改造",
];

const FAMILY_NAMES: &[&str] = &[
    "王", "李", "张", "刘", "陈", "杨", "黄", "赵", "周", "吴", "徐", "孙", "马", "朱", "胡",
    "郭", "何", "高", "林", "郑",
];

const GIVEN_NAMES: &[&str] = &[
    "伟", "芳", "娜", "秀英", "敏", "静", "丽", "强", "磊", "洋", "艳", "勇", "军", "杰", "娟",
    "涛", "超", "明", "霞", "平", "刚", "辉", "玲", "桂英", "丹", "萍", "鹏", "华", "健", "红",
];

const TITLES: &[&str] = &["教授", "副教授", "讲师", "研究员", "高级工程师", "工程师", "技术员"];

const POSITIONS: &[&str] = &["院长", "副院长", "系主任", "副主任", "项目负责人", "研究员", "工程师"];

const EDUCATIONS: &[&str] = &["博士", "硕士", "学士"];

const MAJORS: &[&str] = &["计算机科学", "软件工程", "人工智能", "信息工程", "电子工程", "通信工程"];

const RESEARCH_AREAS: &[&str] = &["人工智能", "大数据", "云计算", "物联网", "信息安全", "智能制造"];

const MILESTONE_TYPES: &[&str] = &["关键", "普通"];

/// Statuses used for milestones and KPI progress; these are never delayed.
const PLAN_STATUSES: &[WorkStatus] = &[
    WorkStatus::NotStarted,
    WorkStatus::InProgress,
    WorkStatus::Completed,
];

/// `(kpiId, name, target)` recorded for every project.
const KPIS: &[(&str, &str, &str)] = &[
    ("kpi1", "论文发表", "3篇"),
    ("kpi2", "专利申请", "2项"),
    ("kpi3", "软件著作权", "1项"),
];

const COLLABORATORS: &[&str] = &["合作单位A", "合作单位B"];

// ---------------------------------------------------------------------------
// Options and results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SeedOptions {
    pub projects: usize,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            projects: DEFAULT_PROJECT_COUNT,
        }
    }
}

/// Row counts written by one generator run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub users: usize,
    pub projects: usize,
    pub project_organizations: usize,
    pub milestones: usize,
    pub tasks: usize,
    pub progress: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("No organizations found; run the migrations first")]
    NoOrganizations,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

fn person_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}{}", pick(rng, FAMILY_NAMES), pick(rng, GIVEN_NAMES))
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

/// Outcome counts; participants are given about half of the leader's range.
fn expected_outcomes<R: Rng + ?Sized>(rng: &mut R, leading: bool) -> ExpectedOutcomes {
    let mut draw = |lead_max: u32, member_max: u32| {
        let max = if leading { lead_max } else { member_max };
        rng.random_range(0..max.max(1))
    };
    ExpectedOutcomes {
        software: draw(5, 3),
        hardware: draw(3, 2),
        papers: draw(10, 5),
        patents: draw(5, 3),
        copyrights: draw(5, 3),
        standards: draw(2, 1),
        reports: draw(5, 3),
        demonstrations: draw(3, 2),
    }
}

/// Up to three staff names other than the leader and contact.
fn participants(staff: &[User], leader: &User, contact: &User) -> Vec<String> {
    staff
        .iter()
        .filter(|u| u.id != leader.id && u.id != contact.id)
        .take(3)
        .map(|u| u.name.clone())
        .collect()
}

/// Replace all project data with randomly generated records.
///
/// Runs in a single transaction: on error nothing is changed.
pub async fn generate_test_data<R>(
    pool: &DbPool,
    rng: &mut R,
    options: &SeedOptions,
) -> Result<SeedSummary, SeedError>
where
    R: Rng + ?Sized,
{
    let mut tx = pool.begin().await?;
    let mut summary = SeedSummary::default();

    for table in ["tasks", "milestones", "progress", "gantt", "project_organizations", "projects"] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *tx)
            .await?;
    }
    sqlx::query("DELETE FROM users WHERE username != 'admin'")
        .execute(&mut *tx)
        .await?;

    let organizations: Vec<Organization> = OrganizationRepo::list(&mut *tx).await?;
    if organizations.is_empty() {
        return Err(SeedError::NoOrganizations);
    }

    // Staff for every organization.
    let mut staff: HashMap<DbId, Vec<User>> = HashMap::new();
    for org in &organizations {
        let count = rng.random_range(5..=10);
        for i in 1..=count {
            let input = CreateUser {
                username: format!("user_{}_{i}", org.id),
                name: person_name(rng),
                role: "user".to_string(),
                organization_id: Some(org.id),
                position: Some(pick(rng, POSITIONS).to_string()),
                title: Some(pick(rng, TITLES).to_string()),
                education: Some(pick(rng, EDUCATIONS).to_string()),
                major: Some(pick(rng, MAJORS).to_string()),
                research_area: Some(pick(rng, RESEARCH_AREAS).to_string()),
            };
            let user = UserRepo::create(&mut *tx, &input).await?;
            staff.entry(org.id).or_default().push(user);
            summary.users += 1;
        }
    }

    let team: TeamAllocation = [("研究人员", 3), ("技术人员", 2), ("管理人员", 1)]
        .into_iter()
        .map(|(role, n)| (role.to_string(), n))
        .collect();
    let kpis: Vec<KpiTarget> = KPIS
        .iter()
        .map(|(_, name, target)| KpiTarget {
            name: name.to_string(),
            target: target.to_string(),
        })
        .collect();

    for _ in 0..options.projects {
        let start = first_of_month(rng.random_range(2020..=2022), rng.random_range(1..=12));
        let duration: u32 = rng.random_range(12..=35);
        let end = add_months(start, duration);

        let lead_org = pick(rng, &organizations);
        let lead_staff = &staff[&lead_org.id];
        let leader = pick(rng, lead_staff);
        let contact = pick(rng, lead_staff);

        let prefix = *pick(rng, NAME_PREFIXES);
        let project_type = *pick(rng, PROJECT_TYPES);
        let name = format!("{prefix}{}", pick(rng, NAME_SUFFIXES));

        let project = ProjectRepo::create(
            &mut *tx,
            &CreateProject {
                name: name.clone(),
                project_type: project_type.to_string(),
                status: Some(pick(rng, &WorkStatus::ALL).label().to_string()),
                organization_id: Some(lead_org.id),
                leader_id: Some(leader.id),
                contact_id: Some(contact.id),
                team_allocation: team.clone(),
                collaborators: COLLABORATORS.iter().map(|c| c.to_string()).collect(),
                start_date: start,
                end_date: end,
                summary: Some(format!(
                    "这是一个{project_type}，主要研究{name}相关内容，包括关键技术突破、应用示范等。"
                )),
                kpis: kpis.clone(),
                budget: None,
            },
        )
        .await?;
        summary.projects += 1;

        // Leading organization.
        ProjectOrganizationRepo::create(
            &mut *tx,
            &CreateProjectOrganization {
                project_id: project.id,
                organization_id: Some(lead_org.id),
                is_leader: true,
                self_funding: f64::from(rng.random_range(50..500)),
                allocation: f64::from(rng.random_range(100..1000)),
                leader: Some(leader.name.clone()),
                contact: Some(contact.name.clone()),
                participants: participants(lead_staff, leader, contact),
                expected_outcomes: expected_outcomes(rng, true),
                created_at: None,
            },
        )
        .await?;
        summary.project_organizations += 1;

        // Participating organizations.
        let others: Vec<&Organization> = organizations
            .iter()
            .filter(|o| o.id != lead_org.id)
            .collect();
        let member_count = rng.random_range(1..=3);
        let members: Vec<&Organization> =
            others.choose_multiple(rng, member_count).copied().collect();
        for org in members {
            let org_staff = &staff[&org.id];
            let org_leader = pick(rng, org_staff);
            let org_contact = pick(rng, org_staff);
            ProjectOrganizationRepo::create(
                &mut *tx,
                &CreateProjectOrganization {
                    project_id: project.id,
                    organization_id: Some(org.id),
                    is_leader: false,
                    self_funding: f64::from(rng.random_range(20..200)),
                    allocation: f64::from(rng.random_range(50..500)),
                    leader: Some(org_leader.name.clone()),
                    contact: Some(org_contact.name.clone()),
                    participants: participants(org_staff, org_leader, org_contact),
                    expected_outcomes: expected_outcomes(rng, false),
                    created_at: None,
                },
            )
            .await?;
            summary.project_organizations += 1;
        }

        // Milestones spread evenly over the project, each with a few tasks.
        let milestone_count: u32 = rng.random_range(3..=5);
        let mut gantt = GanttPayload::default();
        let mut phase_start = start;
        for j in 0..milestone_count {
            let due = add_months(start, duration * (j + 1) / (milestone_count + 1));
            let completion = f64::from(rng.random_range(0..100));
            let milestone = MilestoneRepo::create(
                &mut *tx,
                &CreateMilestone {
                    project_id: project.id,
                    title: format!("{prefix}{}阶段性目标", j + 1),
                    description: Some(format!("完成{prefix}相关的第{}阶段研究内容", j + 1)),
                    milestone_type: pick(rng, MILESTONE_TYPES).to_string(),
                    due_date: due,
                    status: pick(rng, PLAN_STATUSES).label().to_string(),
                    completion,
                    weight: None,
                },
            )
            .await?;
            summary.milestones += 1;

            let task_count = rng.random_range(1..=3);
            for k in 0..task_count {
                let category = pick(rng, &OutputCategory::ALL);
                TaskRepo::create(
                    &mut *tx,
                    &CreateTask {
                        milestone_id: Some(milestone.id),
                        name: format!("{prefix}第{}阶段{}{}", j + 1, category.label(), k + 1),
                        output_type: Some(category.label().to_string()),
                        start_date: Some(phase_start),
                        end_date: Some(due),
                        assignee: Some(pick(rng, lead_staff).name.clone()),
                        status: pick(rng, &WorkStatus::ALL).label().to_string(),
                        updated_at: None,
                    },
                )
                .await?;
                summary.tasks += 1;
            }

            let id = i64::from(j) + 1;
            gantt.tasks.push(GanttTask {
                id,
                text: milestone.title.clone(),
                start_date: phase_start.format("%Y-%m-%d").to_string(),
                duration: u32::try_from((due - phase_start).num_days()).unwrap_or(0),
                progress: completion / 100.0,
                parent: 0,
            });
            if id > 1 {
                gantt.links.push(GanttLink {
                    id: id - 1,
                    source: id - 1,
                    target: id,
                    link_type: "0".to_string(),
                });
            }
            phase_start = due;
        }
        GanttRepo::upsert(&mut *tx, project.id, &gantt).await?;

        for (kpi_id, kpi_name, target) in KPIS {
            ProgressRepo::create(
                &mut *tx,
                &CreateProgress {
                    project_id: project.id,
                    kpi_id: kpi_id.to_string(),
                    kpi_name: kpi_name.to_string(),
                    target: target.to_string(),
                    current: Some(format!("{}项", rng.random_range(0..3))),
                    status: pick(rng, PLAN_STATUSES).label().to_string(),
                    completion: f64::from(rng.random_range(0..100)),
                },
            )
            .await?;
            summary.progress += 1;
        }
    }

    tx.commit().await?;

    tracing::info!(
        users = summary.users,
        projects = summary.projects,
        project_organizations = summary.project_organizations,
        milestones = summary.milestones,
        tasks = summary.tasks,
        progress = summary.progress,
        "Generated sample data",
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn add_months_clamps_to_month_end() {
        let jan31 = NaiveDate::from_ymd_opt(2021, 1, 31).unwrap();
        assert_eq!(add_months(jan31, 1), NaiveDate::from_ymd_opt(2021, 2, 28).unwrap());
    }

    #[test]
    fn participant_outcomes_stay_in_narrower_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let outcomes = expected_outcomes(&mut rng, false);
            assert_eq!(outcomes.standards, 0);
            assert!(outcomes.papers < 5);
        }
    }

    #[test]
    fn person_names_combine_family_and_given_name() {
        let mut rng = StdRng::seed_from_u64(11);
        let name = person_name(&mut rng);
        assert!(FAMILY_NAMES.iter().any(|f| name.starts_with(f)));
        assert!(name.chars().count() >= 2);
    }
}
