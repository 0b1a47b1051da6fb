use crate::{APIResponse, BaseClient};
use homeboard_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct PushClient {
    base: Arc<BaseClient>,
}

pub struct SendNotificationInput {
    pub recipients: Vec<String>,
    pub title: String,
    pub message: String,
    pub url: Option<String>,
}

impl PushClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn send(
        &self,
        input: SendNotificationInput,
    ) -> APIResponse<send_notification::APIResponse> {
        let body = send_notification::RequestBody {
            recipients: input.recipients,
            title: input.title,
            message: input.message,
            url: input.url,
        };
        self.base
            .post(body, "push/send".into(), StatusCode::OK)
            .await
    }
}
