use super::IEventRepo;
use chrono::{NaiveDate, NaiveTime};
use homeboard_domain::{HouseholdEvent, Importance, ReminderTier, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::warn;

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRaw {
    event_uid: Uuid,
    title: String,
    event_date: NaiveDate,
    event_time: NaiveTime,
    participants: Vec<String>,
    importance: String,
    tier1_sent: bool,
    tier2_sent: bool,
}

impl From<EventRaw> for HouseholdEvent {
    fn from(e: EventRaw) -> Self {
        // Unknown values written by the calendar screens are not reminder
        // eligible
        let importance = e.importance.parse::<Importance>().unwrap_or_else(|err| {
            warn!("Event {} has {}, treating it as normal", e.event_uid, err);
            Importance::Normal
        });
        Self {
            id: e.event_uid.into(),
            title: e.title,
            date: e.event_date,
            time: e.event_time,
            participants: e.participants,
            importance,
            tier1_sent: e.tier1_sent,
            tier2_sent: e.tier2_sent,
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for PostgresEventRepo {
    async fn insert(&self, e: &HouseholdEvent) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO household_events(
                event_uid,
                title,
                event_date,
                event_time,
                participants,
                importance,
                tier1_sent,
                tier2_sent
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(e.id.inner_ref())
        .bind(&e.title)
        .bind(e.date)
        .bind(e.time)
        .bind(&e.participants)
        .bind(e.importance.as_str())
        .bind(e.tier1_sent)
        .bind(e.tier2_sent)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<HouseholdEvent> {
        sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM household_events AS e
            WHERE e.event_uid = $1
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()?
        .map(|e| e.into())
    }

    async fn find_pending_reminders(
        &self,
        from_date: NaiveDate,
    ) -> anyhow::Result<Vec<HouseholdEvent>> {
        let events = sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM household_events AS e
            WHERE lower(btrim(e.importance)) = $1
            AND (e.tier1_sent = false OR e.tier2_sent = false)
            AND e.event_date >= $2
            "#,
        )
        .bind(Importance::Important.as_str())
        .bind(from_date)
        .fetch_all(&self.pool)
        .await?;

        Ok(events.into_iter().map(|e| e.into()).collect())
    }

    async fn mark_tier_sent(&self, event_id: &ID, tier: ReminderTier) -> anyhow::Result<()> {
        let query = match tier {
            ReminderTier::DayBefore => {
                "UPDATE household_events SET tier1_sent = true WHERE event_uid = $1"
            }
            ReminderTier::Imminent => {
                "UPDATE household_events SET tier2_sent = true WHERE event_uid = $1"
            }
        };
        sqlx::query(query)
            .bind(event_id.inner_ref())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
