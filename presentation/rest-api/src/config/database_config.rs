use std::env;
use std::sync::Arc;
use std::time::Duration;

use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::product::in_memory::InMemoryProductRepository;
use persistence::product::repository::ProductRepositoryPostgres;

use super::error::{ConfigError, env_or};

/// PostgreSQL settings, present only when DATABASE_URL is set.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Load database settings from environment variables
    ///
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (optional)
    /// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
    /// - DATABASE_ACQUIRE_TIMEOUT_SECS: Pool acquire timeout (default: 30)
    /// - DATABASE_MIGRATIONS_PATH: Migrations directory (default: "./migrations")
    ///
    /// # Errors
    /// Returns error if a numeric setting cannot be parsed
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        let Ok(url) = env::var("DATABASE_URL") else {
            return Ok(None);
        };

        let max_connections = env_or(
            "DATABASE_MAX_CONNECTIONS",
            DatabaseConfig::DEFAULT_MAX_CONNECTIONS,
        )?;
        let acquire_timeout_secs = env_or(
            "DATABASE_ACQUIRE_TIMEOUT_SECS",
            DatabaseConfig::DEFAULT_ACQUIRE_TIMEOUT.as_secs(),
        )?;
        let migrations_path =
            env::var("DATABASE_MIGRATIONS_PATH").unwrap_or_else(|_| "./migrations".to_string());

        Ok(Some(Self {
            url,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            migrations_path,
        }))
    }

    fn pool_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(self.url.clone())
            .with_max_connections(self.max_connections)
            .with_acquire_timeout(self.acquire_timeout)
    }
}

/// Initialize the product store
///
/// Connects to PostgreSQL and applies migrations when settings are present;
/// otherwise falls back to a process-local in-memory store.
///
/// # Errors
/// Returns error if the connection or the migrations fail
pub async fn init_repository(
    settings: Option<&DatabaseSettings>,
) -> anyhow::Result<Arc<dyn ProductRepository>> {
    let Some(settings) = settings else {
        tracing::warn!("DATABASE_URL not set, products are kept in memory only");
        return Ok(Arc::new(InMemoryProductRepository::new()));
    };

    let pool = create_postgres_pool(&settings.pool_config()).await?;
    run_migrations(&pool, &settings.migrations_path).await?;

    Ok(Arc::new(ProductRepositoryPostgres::new(pool)))
}
