use std::sync::Arc;

use labman_core::statistics::StatisticsSource;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: every field is a pool handle or an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: labman_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Row-set source the statistics reports read from.
    pub statistics: Arc<dyn StatisticsSource>,
}

impl AppState {
    /// State whose reports run against `pool`.
    pub fn new(pool: labman_db::DbPool, config: ServerConfig) -> Self {
        let statistics = Arc::new(labman_db::PoolStatisticsSource::new(pool.clone()));
        Self {
            pool,
            config: Arc::new(config),
            statistics,
        }
    }
}
