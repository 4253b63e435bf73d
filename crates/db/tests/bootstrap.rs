use sqlx::SqlitePool;

/// Full bootstrap test: connect, migrate, verify schema and reference data.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: SqlitePool) {
    labman_db::health_check(&pool).await.unwrap();

    let tables = [
        "organizations",
        "users",
        "projects",
        "project_organizations",
        "milestones",
        "documents",
        "tasks",
        "progress",
        "gantt",
    ];
    for table in tables {
        sqlx::query(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
    }

    let (orgs,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM organizations")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(orgs, 9);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_account_is_seeded(pool: SqlitePool) {
    let admin = labman_db::repositories::UserRepo::find_by_username(&pool, "admin")
        .await
        .unwrap()
        .expect("admin user should exist");
    assert_eq!(admin.role, "admin");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_foreign_keys_enforced(pool: SqlitePool) {
    let result = sqlx::query(
        "INSERT INTO milestones (projectId, title, dueDate) VALUES (9999, 'orphan', '2024-01-01')",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err(), "milestone without project should be rejected");
}
