mod base;
mod push;
mod reminder;
mod status;
mod subscription;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
pub use homeboard_api_structs::dtos::*;
pub use homeboard_domain::ID;
use push::PushClient;
pub use push::SendNotificationInput;
use reminder::ReminderClient;
use status::StatusClient;
use std::sync::Arc;
use subscription::SubscriptionClient;
pub use subscription::RegisterSubscriptionInput;

/// Homeboard Reminders SDK
///
/// The SDK contains methods for interacting with the reminder dispatch
/// server API.
#[derive(Clone)]
pub struct HomeboardSDK {
    pub push: PushClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
    pub subscription: SubscriptionClient,
}

impl HomeboardSDK {
    /// `cron_secret` is only needed for running ticks and ad hoc sends
    pub fn new<T: Into<String>>(address: String, cron_secret: Option<T>) -> Self {
        let mut base = BaseClient::new(address);
        if let Some(secret) = cron_secret {
            base.set_cron_secret(secret.into());
        }
        let base = Arc::new(base);
        let push = PushClient::new(base.clone());
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base.clone());
        let subscription = SubscriptionClient::new(base);

        Self {
            push,
            reminder,
            status,
            subscription,
        }
    }
}
