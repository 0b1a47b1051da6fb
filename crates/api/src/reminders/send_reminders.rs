use crate::error::HomeboardError;
use crate::push::dispatcher::{dispatch_notification, prune_dead_subscriptions};
use crate::shared::{
    auth::protect_cron_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use homeboard_api_structs::send_reminders::APIResponse;
use homeboard_domain::{
    civil_now, resolve_event_recipients, HouseholdEvent, NotificationMessage, PushSubscription,
    ReminderTier, ReminderWindows, ID,
};
use chrono::NaiveDate;
use homeboard_infra::HomeboardContext;
use std::collections::HashSet;
use tracing::{error, info, warn};

pub async fn send_reminders_controller(
    http_req: HttpRequest,
    ctx: web::Data<HomeboardContext>,
) -> Result<HttpResponse, HomeboardError> {
    protect_cron_route(&http_req, &ctx)?;

    let usecase = SendRemindersUseCase::default();
    execute(usecase, &ctx)
        .await
        .map(|summary| {
            HttpResponse::Ok().json(APIResponse {
                success: true,
                sent: summary.sent,
                processed: summary.processed,
                pruned: summary.pruned,
                failed: summary.failed,
                skipped: summary.skipped,
            })
        })
        .map_err(HomeboardError::from)
}

/// One reminder tick: finds every important event that has entered one of
/// its reminder windows, notifies its participants and records the tier as
/// sent so that it is never sent again.
#[derive(Debug, Default)]
pub struct SendRemindersUseCase {
    pub windows: ReminderWindows,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TickSummary {
    /// Number of (event, tier) reminders dispatched
    pub processed: usize,
    pub sent: usize,
    pub pruned: usize,
    pub failed: usize,
    /// Another tick was already running
    pub skipped: bool,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
    InvalidClock(i64),
    CommitFailed(usize),
}

impl From<UseCaseError> for HomeboardError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => {
                Self::TickFailed("Unable to load events or push subscriptions".into())
            }
            UseCaseError::InvalidClock(ts) => {
                Self::TickFailed(format!("Current time {} is not representable", ts))
            }
            UseCaseError::CommitFailed(count) => Self::TickFailed(format!(
                "Reminders were dispatched but {} of them could not be marked as sent",
                count
            )),
        }
    }
}

struct DueReminder {
    event: HouseholdEvent,
    tier: ReminderTier,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendRemindersUseCase {
    type Response = TickSummary;

    type Error = UseCaseError;

    const NAME: &'static str = "SendReminders";

    async fn execute(&mut self, ctx: &HomeboardContext) -> Result<Self::Response, Self::Error> {
        let now_ts = ctx.sys.get_timestamp_millis();
        if !ctx.config.tick_lock_enabled {
            return self.run_tick(now_ts, ctx).await;
        }

        let holder = ID::default();
        let acquired = ctx
            .repos
            .tick_lock
            .try_acquire(&holder, now_ts, ctx.config.tick_lock_ttl_millis)
            .await
            .map_err(|e| {
                error!("Unable to acquire the reminder tick lock: {:?}", e);
                UseCaseError::StorageError
            })?;
        if !acquired {
            info!("Another reminder tick is in progress, skipping");
            return Ok(TickSummary {
                skipped: true,
                ..Default::default()
            });
        }

        let res = self.run_tick(now_ts, ctx).await;
        if let Err(e) = ctx.repos.tick_lock.release(&holder).await {
            error!("Unable to release the reminder tick lock: {:?}", e);
        }
        res
    }
}

impl SendRemindersUseCase {
    async fn run_tick(
        &self,
        now_ts: i64,
        ctx: &HomeboardContext,
    ) -> Result<TickSummary, UseCaseError> {
        let now = civil_now(now_ts, &ctx.config.timezone)
            .ok_or(UseCaseError::InvalidClock(now_ts))?;

        // Events dated before today can no longer be due
        let (subscriptions, events) = load(now.date(), ctx).await?;
        let due = events
            .into_iter()
            .filter_map(|event| {
                self.windows
                    .due_tier(&now, &event)
                    .map(|tier| DueReminder { event, tier })
            })
            .collect::<Vec<_>>();
        info!(now = %now, due = due.len(), "Evaluated pending reminders");

        let mut summary = TickSummary::default();
        let mut dead: HashSet<ID> = HashSet::new();
        let mut commit_failures = 0;
        for DueReminder { event, tier } in due {
            let resolved = resolve_event_recipients(&event, &subscriptions);
            if !resolved.unmatched_participants.is_empty() {
                warn!(
                    event_id = %event.id,
                    participants = ?resolved.unmatched_participants,
                    "Participants without any registered device"
                );
            }
            if !resolved.unusable.is_empty() {
                warn!(
                    event_id = %event.id,
                    subscriptions = resolved.unusable.len(),
                    "Skipping subscriptions with malformed transport info"
                );
            }
            // Endpoints found gone earlier in this tick are not retried
            let recipients = resolved
                .subscriptions
                .into_iter()
                .filter(|sub| !dead.contains(&sub.id))
                .collect::<Vec<_>>();

            let message = NotificationMessage::reminder(&event, tier, &ctx.config.reminder_click_url);
            let report = dispatch_notification(&recipients, &message, ctx).await;
            info!(
                event_id = %event.id,
                tier = %tier,
                recipients = recipients.len(),
                delivered = report.delivered.len(),
                failed = report.failed.len(),
                "Reminder dispatched"
            );
            summary.processed += 1;
            summary.sent += report.delivered.len();
            summary.failed += report.failed.len();
            dead.extend(report.dead);

            if let Err(e) = ctx.repos.events.mark_tier_sent(&event.id, tier).await {
                error!(
                    event_id = %event.id,
                    tier = %tier,
                    "Unable to mark reminder as sent: {:?}", e
                );
                commit_failures += 1;
            }
        }

        let dead = dead.into_iter().collect::<Vec<_>>();
        summary.pruned = prune_dead_subscriptions(&dead, ctx).await;
        info!(
            processed = summary.processed,
            sent = summary.sent,
            failed = summary.failed,
            pruned = summary.pruned,
            "Reminder tick finished"
        );

        if commit_failures > 0 {
            return Err(UseCaseError::CommitFailed(commit_failures));
        }
        Ok(summary)
    }
}

async fn load(
    from_date: NaiveDate,
    ctx: &HomeboardContext,
) -> Result<(Vec<PushSubscription>, Vec<HouseholdEvent>), UseCaseError> {
    let subscriptions = ctx.repos.subscriptions.find_all().await.map_err(|e| {
        error!("Unable to load push subscriptions: {:?}", e);
        UseCaseError::StorageError
    })?;
    let events = ctx.repos.events.find_pending_reminders(from_date).await.map_err(|e| {
        error!("Unable to load pending reminders: {:?}", e);
        UseCaseError::StorageError
    })?;

    let orphaned = subscriptions.iter().filter(|s| s.is_orphaned()).count();
    if orphaned > 0 {
        warn!(
            subscriptions = orphaned,
            "Ignoring push subscriptions without an owner"
        );
    }
    Ok((subscriptions, events))
}
