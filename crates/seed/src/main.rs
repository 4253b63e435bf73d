//! `labman-seed` -- fills a LabMan database with randomized sample data.
//!
//! Applies pending migrations, then replaces all project data with
//! generated records. Organizations and the `admin` account are kept.
//!
//! # Environment variables
//!
//! | Variable        | Required | Default                       | Description                          |
//! |-----------------|----------|-------------------------------|--------------------------------------|
//! | `DATABASE_URL`  | no       | `sqlite://labman.db?mode=rwc` | SQLite connection string             |
//! | `SEED_PROJECTS` | no       | `200`                         | Number of projects to generate       |
//! | `SEED_RNG`      | no       | --                            | u64 seed for reproducible output     |

use anyhow::Context;
use labman_db::seed::{generate_test_data, SeedOptions, DEFAULT_PROJECT_COUNT};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "labman_seed=info,labman_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://labman.db?mode=rwc".into());

    let projects: usize = match std::env::var("SEED_PROJECTS") {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("SEED_PROJECTS must be a non-negative integer, got '{raw}'"))?,
        Err(_) => DEFAULT_PROJECT_COUNT,
    };

    let mut rng = match std::env::var("SEED_RNG") {
        Ok(raw) => {
            let seed: u64 = raw
                .parse()
                .with_context(|| format!("SEED_RNG must be a u64, got '{raw}'"))?;
            StdRng::seed_from_u64(seed)
        }
        Err(_) => StdRng::from_rng(&mut rand::rng()),
    };

    tracing::info!(%database_url, projects, "Seeding database");

    let pool = labman_db::create_pool(&database_url, 1)
        .await
        .context("Failed to connect to database")?;
    labman_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let summary = generate_test_data(&pool, &mut rng, &SeedOptions { projects })
        .await
        .context("Failed to generate sample data")?;

    pool.close().await;

    tracing::info!(
        users = summary.users,
        projects = summary.projects,
        tasks = summary.tasks,
        "Seeding complete",
    );
    Ok(())
}
