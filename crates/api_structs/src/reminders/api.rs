use serde::{Deserialize, Serialize};

pub mod send_reminders {
    use super::*;

    /// Summary of one reminder tick
    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        /// Notifications delivered
        pub sent: usize,
        /// Events whose due tier was handled this tick
        pub processed: usize,
        /// Subscriptions removed because their device is gone
        pub pruned: usize,
        /// Delivery attempts that failed and may succeed later
        pub failed: usize,
        /// True when another tick held the tick lock and nothing was done
        #[serde(default)]
        pub skipped: bool,
    }
}
