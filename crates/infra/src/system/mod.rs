use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of the current instant, swapped out in tests so a reminder tick can
/// be evaluated at any point in time
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock that only moves when told to
pub struct FixedSys {
    timestamp_millis: AtomicI64,
}

impl FixedSys {
    pub fn new(timestamp_millis: i64) -> Self {
        Self {
            timestamp_millis: AtomicI64::new(timestamp_millis),
        }
    }

    pub fn set(&self, timestamp_millis: i64) {
        self.timestamp_millis
            .store(timestamp_millis, Ordering::SeqCst);
    }

    pub fn advance(&self, millis: i64) {
        self.timestamp_millis.fetch_add(millis, Ordering::SeqCst);
    }
}

impl ISys for FixedSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.timestamp_millis.load(Ordering::SeqCst)
    }
}
