use super::ISubscriptionRepo;
use homeboard_domain::{PushSubscription, PushTransportInfo, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresSubscriptionRepo {
    pool: PgPool,
}

impl PostgresSubscriptionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubscriptionRaw {
    subscription_uid: Uuid,
    owner_id: Option<String>,
    endpoint: String,
    p256dh: String,
    auth: String,
}

impl From<SubscriptionRaw> for PushSubscription {
    fn from(s: SubscriptionRaw) -> Self {
        Self {
            id: s.subscription_uid.into(),
            owner_id: s.owner_id,
            transport: PushTransportInfo::new(s.endpoint, s.p256dh, s.auth),
        }
    }
}

#[async_trait::async_trait]
impl ISubscriptionRepo for PostgresSubscriptionRepo {
    async fn upsert(&self, sub: &PushSubscription) -> anyhow::Result<PushSubscription> {
        let stored = sqlx::query_as::<_, SubscriptionRaw>(
            r#"
            INSERT INTO push_subscriptions
                (subscription_uid, owner_id, endpoint, p256dh, auth)
            VALUES($1, $2, $3, $4, $5)
            ON CONFLICT (owner_id, endpoint) DO UPDATE SET
                p256dh = EXCLUDED.p256dh,
                auth = EXCLUDED.auth
            RETURNING *
            "#,
        )
        .bind(sub.id.inner_ref())
        .bind(&sub.owner_id)
        .bind(&sub.transport.endpoint)
        .bind(&sub.transport.keys.p256dh)
        .bind(&sub.transport.keys.auth)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored.into())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<PushSubscription>> {
        let subs = sqlx::query_as::<_, SubscriptionRaw>(
            r#"
            SELECT subscription_uid, owner_id, endpoint, p256dh, auth
            FROM push_subscriptions
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(subs.into_iter().map(|s| s.into()).collect())
    }

    async fn delete(&self, subscription_id: &ID) -> anyhow::Result<Option<PushSubscription>> {
        let deleted = sqlx::query_as::<_, SubscriptionRaw>(
            r#"
            DELETE FROM push_subscriptions AS s
            WHERE s.subscription_uid = $1
            RETURNING *
            "#,
        )
        .bind(subscription_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(deleted.map(|s| s.into()))
    }
}
