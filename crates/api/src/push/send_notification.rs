use super::dispatcher::{dispatch_notification, prune_dead_subscriptions};
use crate::error::HomeboardError;
use crate::shared::{
    auth::protect_cron_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use homeboard_api_structs::send_notification::*;
use homeboard_domain::{resolve_recipients, NotificationMessage};
use homeboard_infra::HomeboardContext;
use tracing::{error, warn};

pub async fn send_notification_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<HomeboardContext>,
) -> Result<HttpResponse, HomeboardError> {
    protect_cron_route(&http_req, &ctx)?;

    let body = body.0;
    let url = body
        .url
        .unwrap_or_else(|| ctx.config.reminder_click_url.clone());
    let usecase = SendNotificationUseCase {
        recipients: body.recipients,
        message: NotificationMessage::new(body.title, body.message, url),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                success: true,
                sent: res.sent,
                pruned: res.pruned,
                failed: res.failed,
            })
        })
        .map_err(HomeboardError::from)
}

/// Pushes a one off message to the devices of the given people
#[derive(Debug)]
pub struct SendNotificationUseCase {
    pub recipients: Vec<String>,
    pub message: NotificationMessage,
}

#[derive(Debug, Default, PartialEq)]
pub struct SendNotificationResult {
    pub sent: usize,
    pub pruned: usize,
    pub failed: usize,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NoRecipients,
    MissingTitle,
    StorageError,
}

impl From<UseCaseError> for HomeboardError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NoRecipients => {
                Self::BadClientData("At least one recipient must be given".into())
            }
            UseCaseError::MissingTitle => {
                Self::BadClientData("A notification needs a title".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendNotificationUseCase {
    type Response = SendNotificationResult;

    type Error = UseCaseError;

    const NAME: &'static str = "SendNotification";

    async fn execute(&mut self, ctx: &HomeboardContext) -> Result<Self::Response, Self::Error> {
        if self.recipients.iter().all(|r| r.trim().is_empty()) {
            return Err(UseCaseError::NoRecipients);
        }
        if self.message.title.trim().is_empty() {
            return Err(UseCaseError::MissingTitle);
        }

        let subscriptions = ctx.repos.subscriptions.find_all().await.map_err(|e| {
            error!("Unable to load push subscriptions: {:?}", e);
            UseCaseError::StorageError
        })?;
        let resolved = resolve_recipients(&self.recipients, &subscriptions);
        if !resolved.unmatched_participants.is_empty() {
            warn!(
                recipients = ?resolved.unmatched_participants,
                "Recipients without any registered device"
            );
        }

        let report = dispatch_notification(&resolved.subscriptions, &self.message, ctx).await;
        let pruned = prune_dead_subscriptions(&report.dead, ctx).await;

        Ok(SendNotificationResult {
            sent: report.delivered.len(),
            pruned,
            failed: report.failed.len(),
        })
    }
}
