use super::IEventRepo;
use chrono::NaiveDate;
use crate::repos::shared::inmemory_repo::*;
use homeboard_domain::{HouseholdEvent, ReminderTier, ID};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<HouseholdEvent>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, e: &HouseholdEvent) -> anyhow::Result<()> {
        insert(e, &self.events);
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<HouseholdEvent> {
        find(event_id, &self.events)
    }

    async fn find_pending_reminders(
        &self,
        from_date: NaiveDate,
    ) -> anyhow::Result<Vec<HouseholdEvent>> {
        let res = find_by(&self.events, |e| {
            e.is_reminder_eligible() && e.has_pending_tiers() && e.date >= from_date
        });
        Ok(res)
    }

    async fn mark_tier_sent(&self, event_id: &ID, tier: ReminderTier) -> anyhow::Result<()> {
        update(event_id, &self.events, |e| e.mark_tier_sent(tier));
        Ok(())
    }
}
