use crate::{APIResponse, BaseClient};
use homeboard_api_structs::dtos::PushTransportDTO;
use homeboard_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct SubscriptionClient {
    base: Arc<BaseClient>,
}

pub struct RegisterSubscriptionInput {
    pub owner_id: String,
    pub subscription: PushTransportDTO,
}

impl SubscriptionClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn register(
        &self,
        input: RegisterSubscriptionInput,
    ) -> APIResponse<register_subscription::APIResponse> {
        let body = register_subscription::RequestBody {
            owner_id: input.owner_id,
            subscription: input.subscription,
        };
        self.base
            .post(body, "push/subscriptions".into(), StatusCode::OK)
            .await
    }
}
