mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, ConfigError, VapidConfig};
pub use repos::{IEventRepo, ISubscriptionRepo, ITickLockRepo, Repos};
pub use services::*;
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::{FixedSys, ISys, RealSys};

#[derive(Clone)]
pub struct HomeboardContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub push: Arc<dyn IPushTransport>,
}

struct ContextParams {
    pub postgres_connection_string: String,
    pub config: Config,
    pub vapid: VapidConfig,
}

impl HomeboardContext {
    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let repos = Repos::create_postgres(&params.postgres_connection_string).await?;
        let push = WebPushTransport::new(params.vapid)?;
        Ok(Self {
            repos,
            config: params.config,
            sys: Arc::new(RealSys {}),
            push: Arc::new(push),
        })
    }

    /// Context backed by in memory repositories, used when testing
    pub fn create_inmemory(config: Config, push: Arc<dyn IPushTransport>) -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config,
            sys: Arc::new(RealSys {}),
            push,
        }
    }
}

/// Will setup the infrastructure context given the environment.
///
/// Fails fast when the datastore or push credentials are missing.
pub async fn setup_context() -> anyhow::Result<HomeboardContext> {
    HomeboardContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string()?,
        config: Config::from_env()?,
        vapid: VapidConfig::from_env()?,
    })
    .await
}

fn get_psql_connection_string() -> Result<String, ConfigError> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING).map_err(|_| ConfigError::Missing(PSQL_CONNECTION_STRING))
}

pub async fn run_migration() -> anyhow::Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&get_psql_connection_string()?)
        .await?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e: MigrateError| anyhow::anyhow!("Unable to run migrations: {}", e))
}
