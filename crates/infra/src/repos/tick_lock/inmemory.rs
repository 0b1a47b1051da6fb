use super::ITickLockRepo;
use homeboard_domain::ID;
use std::sync::Mutex;

struct Lease {
    holder: ID,
    locked_until: i64,
}

pub struct InMemoryTickLockRepo {
    lease: Mutex<Option<Lease>>,
}

impl InMemoryTickLockRepo {
    pub fn new() -> Self {
        Self {
            lease: Mutex::new(None),
        }
    }
}

#[async_trait::async_trait]
impl ITickLockRepo for InMemoryTickLockRepo {
    async fn try_acquire(&self, holder: &ID, now: i64, lease_millis: i64) -> anyhow::Result<bool> {
        let mut lease = self.lease.lock().unwrap();
        match &*lease {
            Some(current) if current.locked_until > now => Ok(false),
            _ => {
                *lease = Some(Lease {
                    holder: holder.clone(),
                    locked_until: now + lease_millis,
                });
                Ok(true)
            }
        }
    }

    async fn release(&self, holder: &ID) -> anyhow::Result<()> {
        let mut lease = self.lease.lock().unwrap();
        if lease.as_ref().map(|l| &l.holder == holder).unwrap_or(false) {
            *lease = None;
        }
        Ok(())
    }
}
