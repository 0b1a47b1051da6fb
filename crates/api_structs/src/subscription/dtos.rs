use homeboard_domain::{PushSubscription, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PushSubscriptionDTO {
    pub id: ID,
    pub owner_id: Option<String>,
    /// Only the endpoint is echoed back, the keys stay on the server
    pub endpoint: String,
}

impl PushSubscriptionDTO {
    pub fn new(subscription: PushSubscription) -> Self {
        Self {
            id: subscription.id,
            owner_id: subscription.owner_id,
            endpoint: subscription.transport.endpoint,
        }
    }
}

/// The browser's `PushSubscription.toJSON()` output
pub use homeboard_domain::PushTransportInfo as PushTransportDTO;
