mod inmemory;
mod postgres;

use chrono::NaiveDate;
use homeboard_domain::{HouseholdEvent, ReminderTier, ID};
pub use inmemory::InMemoryEventRepo;
pub use postgres::PostgresEventRepo;

/// Access to the household events, restricted to what the reminder engine
/// is allowed to touch
#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, e: &HouseholdEvent) -> anyhow::Result<()>;
    async fn find(&self, event_id: &ID) -> Option<HouseholdEvent>;
    /// Important events dated `from_date` or later that still have at least
    /// one tier flag unset. Importance is compared after trimming and case
    /// folding, like `Importance::from_str` does.
    async fn find_pending_reminders(
        &self,
        from_date: NaiveDate,
    ) -> anyhow::Result<Vec<HouseholdEvent>>;
    /// Sets the flag of `tier` and writes no other field of the event.
    /// Succeeds without changes when the event has been deleted meanwhile.
    async fn mark_tier_sent(&self, event_id: &ID, tier: ReminderTier) -> anyhow::Result<()>;
}
