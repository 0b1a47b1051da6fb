mod inmemory;
mod postgres;

use homeboard_domain::{PushSubscription, ID};
pub use inmemory::InMemorySubscriptionRepo;
pub use postgres::PostgresSubscriptionRepo;

#[async_trait::async_trait]
pub trait ISubscriptionRepo: Send + Sync {
    /// Stores a device registration. A registration from the same owner for
    /// an endpoint that is already stored replaces the keys of that record
    /// and keeps its id.
    async fn upsert(&self, sub: &PushSubscription) -> anyhow::Result<PushSubscription>;
    async fn find_all(&self) -> anyhow::Result<Vec<PushSubscription>>;
    async fn delete(&self, subscription_id: &ID) -> anyhow::Result<Option<PushSubscription>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeboard_domain::PushTransportInfo;

    fn transport(endpoint: &str, auth: &str) -> PushTransportInfo {
        PushTransportInfo::new(endpoint.into(), "p256dh".into(), auth.into())
    }

    #[tokio::test]
    async fn reregistering_a_device_replaces_its_record() {
        let repo = InMemorySubscriptionRepo::new();
        let first = repo
            .upsert(&PushSubscription::new(
                "andrea".into(),
                transport("https://push.example/1", "old"),
            ))
            .await
            .unwrap();
        let second = repo
            .upsert(&PushSubscription::new(
                "andrea".into(),
                transport("https://push.example/1", "new"),
            ))
            .await
            .unwrap();
        assert_eq!(first.id, second.id);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].transport.keys.auth, "new");
    }

    #[tokio::test]
    async fn one_person_can_register_several_devices() {
        let repo = InMemorySubscriptionRepo::new();
        for endpoint in &["https://push.example/phone", "https://push.example/laptop"] {
            repo.upsert(&PushSubscription::new(
                "zsolt".into(),
                transport(endpoint, "auth"),
            ))
            .await
            .unwrap();
        }
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn deletes_by_id() {
        let repo = InMemorySubscriptionRepo::new();
        let sub = repo
            .upsert(&PushSubscription::new(
                "adel".into(),
                transport("https://push.example/1", "auth"),
            ))
            .await
            .unwrap();

        let deleted = repo.delete(&sub.id).await.unwrap();
        assert_eq!(deleted, Some(sub.clone()));
        assert!(repo.find_all().await.unwrap().is_empty());
        assert_eq!(repo.delete(&sub.id).await.unwrap(), None);
    }
}
