mod inmemory;
mod postgres;

use homeboard_domain::ID;
pub use inmemory::InMemoryTickLockRepo;
pub use postgres::PostgresTickLockRepo;

/// A single lease that keeps two reminder ticks from overlapping.
///
/// The lease expires on its own so a tick that crashed while holding it does
/// not block every later tick.
#[async_trait::async_trait]
pub trait ITickLockRepo: Send + Sync {
    /// Takes the lease for `holder` until `now + lease_millis` if nobody holds
    /// an unexpired lease. Returns whether the lease was taken.
    async fn try_acquire(&self, holder: &ID, now: i64, lease_millis: i64) -> anyhow::Result<bool>;
    /// Gives the lease back if `holder` still owns it
    async fn release(&self, holder: &ID) -> anyhow::Result<()>;
}
