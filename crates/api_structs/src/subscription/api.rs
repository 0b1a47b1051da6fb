use crate::dtos::{PushSubscriptionDTO, PushTransportDTO};
use homeboard_domain::PushSubscription;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PushSubscriptionResponse {
    pub subscription: PushSubscriptionDTO,
}

impl PushSubscriptionResponse {
    pub fn new(subscription: PushSubscription) -> Self {
        Self {
            subscription: PushSubscriptionDTO::new(subscription),
        }
    }
}

pub mod register_subscription {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub owner_id: String,
        pub subscription: PushTransportDTO,
    }

    pub type APIResponse = PushSubscriptionResponse;
}
