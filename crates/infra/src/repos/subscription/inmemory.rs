use super::ISubscriptionRepo;
use crate::repos::shared::inmemory_repo::*;
use homeboard_domain::{PushSubscription, ID};

pub struct InMemorySubscriptionRepo {
    subscriptions: std::sync::Mutex<Vec<PushSubscription>>,
}

impl InMemorySubscriptionRepo {
    pub fn new() -> Self {
        Self {
            subscriptions: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ISubscriptionRepo for InMemorySubscriptionRepo {
    async fn upsert(&self, sub: &PushSubscription) -> anyhow::Result<PushSubscription> {
        let existing = find_by(&self.subscriptions, |s| {
            s.owner_id == sub.owner_id && s.transport.endpoint == sub.transport.endpoint
        });
        match existing.into_iter().next() {
            Some(existing) => {
                let transport = sub.transport.clone();
                update(&existing.id, &self.subscriptions, |s| s.transport = transport);
                Ok(PushSubscription {
                    id: existing.id,
                    owner_id: sub.owner_id.clone(),
                    transport: sub.transport.clone(),
                })
            }
            None => {
                insert(sub, &self.subscriptions);
                Ok(sub.clone())
            }
        }
    }

    async fn find_all(&self) -> anyhow::Result<Vec<PushSubscription>> {
        Ok(find_by(&self.subscriptions, |_| true))
    }

    async fn delete(&self, subscription_id: &ID) -> anyhow::Result<Option<PushSubscription>> {
        Ok(delete(subscription_id, &self.subscriptions))
    }
}
