use super::ITickLockRepo;
use homeboard_domain::ID;
use sqlx::PgPool;

const LOCK_ID: i32 = 1;

pub struct PostgresTickLockRepo {
    pool: PgPool,
}

impl PostgresTickLockRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ITickLockRepo for PostgresTickLockRepo {
    async fn try_acquire(&self, holder: &ID, now: i64, lease_millis: i64) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            UPDATE reminder_tick_lock
            SET holder = $2, locked_until = $3
            WHERE lock_id = $1 AND locked_until <= $4
            "#,
        )
        .bind(LOCK_ID)
        .bind(holder.inner_ref())
        .bind(now + lease_millis)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected() == 1)
    }

    async fn release(&self, holder: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reminder_tick_lock
            SET holder = NULL, locked_until = 0
            WHERE lock_id = $1 AND holder = $2
            "#,
        )
        .bind(LOCK_ID)
        .bind(holder.inner_ref())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
