//! Integration tests for the `/api/statistics` endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use chrono::NaiveDate;
use common::{body_json, get};
use labman_core::statistics::memory::{
    InMemorySource, MemOrganization, MemParticipation, MemProject,
};
use labman_db::seed::{generate_test_data, SeedOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sqlx::SqlitePool;

const REPORT_PATHS: [&str; 7] = [
    "/api/statistics",
    "/api/statistics/projects",
    "/api/statistics/tasks",
    "/api/statistics/outputs",
    "/api/statistics/timeline",
    "/api/statistics/budget",
    "/api/statistics/organizations",
];

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn organization(id: i64, name: &str, org_type: &str) -> MemOrganization {
    MemOrganization {
        id,
        name: name.to_string(),
        org_type: org_type.to_string(),
    }
}

fn project(id: i64, project_type: &str, status: &str, organization_id: i64) -> MemProject {
    MemProject {
        name: format!("P{id}"),
        project_type: project_type.to_string(),
        status: status.to_string(),
        organization_id: Some(organization_id),
        start_date: date(2021, id as u32, 1),
        end_date: date(2031, 1, 1),
    }
}

fn participation(project_id: i64, organization_id: i64) -> MemParticipation {
    MemParticipation {
        project_id,
        organization_id: Some(organization_id),
        allocation: 0.0,
        self_funding: 0.0,
        created_at: date(2021, 1, 1),
    }
}

/// Two projects led by A, one by B; B also takes part in A's first project.
fn three_project_source() -> InMemorySource {
    let mut source = InMemorySource::new();
    source.organizations = vec![organization(1, "A", "学院"), organization(2, "B", "企业")];
    source.projects = vec![
        project(1, "国家级项目", "进行中", 1),
        project(2, "市级项目", "已完成", 1),
        project(3, "市级项目", "进行中", 2),
    ];
    source.participations = vec![
        participation(1, 1),
        participation(1, 2),
        participation(2, 1),
        participation(3, 2),
    ];
    source
}

// ---------------------------------------------------------------------------
// Seeded database
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn all_reports_render_over_seeded_data(pool: SqlitePool) {
    let mut rng = StdRng::seed_from_u64(2024);
    let summary = generate_test_data(&pool, &mut rng, &SeedOptions { projects: 30 })
        .await
        .unwrap();

    for path in REPORT_PATHS {
        let response = get(common::build_test_app(pool.clone()), path).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {path}");
    }

    let projects = body_json(get(common::build_test_app(pool.clone()), "/api/statistics/projects").await).await;
    let by_status = &projects["statusDistribution"];
    let status_total: i64 = ["ongoing", "completed", "delayed", "pending"]
        .iter()
        .map(|k| by_status[k].as_i64().unwrap())
        .sum();
    assert_eq!(status_total, summary.projects as i64);
    let type_total: i64 = projects["typeDistribution"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_i64().unwrap())
        .sum();
    assert_eq!(type_total, 30);

    let tasks = body_json(get(common::build_test_app(pool.clone()), "/api/statistics/tasks").await).await;
    assert_eq!(tasks["timeline"].as_array().unwrap().len(), 12);
    assert_eq!(tasks["planned"].as_array().unwrap().len(), 12);

    let timeline = body_json(get(common::build_test_app(pool.clone()), "/api/statistics/timeline").await).await;
    assert_eq!(timeline["projects"].as_array().unwrap().len(), 10);
    assert_eq!(timeline["startPoints"][0].as_array().unwrap().len(), 2);

    let network = body_json(get(common::build_test_app(pool.clone()), "/api/statistics/organizations").await).await;
    assert_eq!(network["nodes"].as_array().unwrap().len(), 9);
    for link in network["links"].as_array().unwrap() {
        assert!(link["source"].as_i64().unwrap() < link["target"].as_i64().unwrap());
        assert!(link["value"].as_i64().unwrap() >= 1);
    }

    let overview = body_json(get(common::build_test_app(pool), "/api/statistics").await).await;
    assert_eq!(overview["totalProjects"], 30);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_database_returns_zero_filled_reports(pool: SqlitePool) {
    let outputs = body_json(get(common::build_test_app(pool.clone()), "/api/statistics/outputs").await).await;
    assert_eq!(
        outputs["types"],
        serde_json::json!(["论文", "专利", "软件著作权", "技术报告", "标准规范"])
    );
    assert_eq!(outputs["completed"], serde_json::json!([0, 0, 0, 0, 0]));

    let budget = body_json(get(common::build_test_app(pool), "/api/statistics/budget").await).await;
    assert!(budget["planned"]
        .as_array()
        .unwrap()
        .iter()
        .all(|v| v.as_f64() == Some(0.0)));
}

// ---------------------------------------------------------------------------
// In-memory source
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn three_project_example_over_http(pool: SqlitePool) {
    let source = Arc::new(three_project_source());

    let app = common::build_test_app_with_source(pool.clone(), source.clone());
    let projects = body_json(get(app, "/api/statistics/projects").await).await;
    assert_eq!(projects["typeDistribution"]["市级项目"], 2);
    assert_eq!(projects["typeDistribution"]["国家级项目"], 1);
    assert_eq!(projects["statusDistribution"]["ongoing"], 2);
    assert_eq!(projects["activeProjects"], 2);

    let app = common::build_test_app_with_source(pool, source);
    let network = body_json(get(app, "/api/statistics/organizations").await).await;
    assert_eq!(
        network["links"],
        serde_json::json!([{ "source": 1, "target": 2, "value": 1 }])
    );
    assert_eq!(network["nodes"][0]["symbolSize"], 50);
    assert_eq!(
        network["categories"],
        serde_json::json!([{ "name": "学院" }, { "name": "企业" }])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn failing_source_returns_500_with_report_message(pool: SqlitePool) {
    let source = Arc::new(InMemorySource::failing("database is locked"));
    let expected = [
        "Error getting statistics overview: database is locked",
        "Error getting project statistics: database is locked",
        "Error getting task statistics: database is locked",
        "Error getting output statistics: database is locked",
        "Error getting timeline data: database is locked",
        "Error getting budget statistics: database is locked",
        "Error getting organization network: database is locked",
    ];

    for (path, message) in REPORT_PATHS.iter().zip(expected) {
        let app = common::build_test_app_with_source(pool.clone(), source.clone());
        let response = get(app, path).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "GET {path}");

        let json = body_json(response).await;
        assert_eq!(json["error"], message);
        assert_eq!(json["code"], "REPORT_ERROR");
    }
}
