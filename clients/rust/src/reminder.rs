use crate::{APIResponse, BaseClient};
use homeboard_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Runs one reminder tick, the same request an external cron job makes
    pub async fn run_tick(&self) -> APIResponse<send_reminders::APIResponse> {
        self.base
            .post((), "push/cron".into(), StatusCode::OK)
            .await
    }
}
