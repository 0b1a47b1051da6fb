mod event;
mod shared;
mod subscription;
mod tick_lock;

pub use event::IEventRepo;
use event::{InMemoryEventRepo, PostgresEventRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use subscription::ISubscriptionRepo;
use subscription::{InMemorySubscriptionRepo, PostgresSubscriptionRepo};
pub use tick_lock::ITickLockRepo;
use tick_lock::{InMemoryTickLockRepo, PostgresTickLockRepo};
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub events: Arc<dyn IEventRepo>,
    pub subscriptions: Arc<dyn ISubscriptionRepo>,
    pub tick_lock: Arc<dyn ITickLockRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            events: Arc::new(PostgresEventRepo::new(pool.clone())),
            subscriptions: Arc::new(PostgresSubscriptionRepo::new(pool.clone())),
            tick_lock: Arc::new(PostgresTickLockRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            events: Arc::new(InMemoryEventRepo::new()),
            subscriptions: Arc::new(InMemorySubscriptionRepo::new()),
            tick_lock: Arc::new(InMemoryTickLockRepo::new()),
        }
    }
}
