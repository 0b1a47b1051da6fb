use actix_web::rt::time::timeout;
use futures::future::join_all;
use homeboard_domain::{NotificationMessage, PushSubscription, ID};
use homeboard_infra::{HomeboardContext, PushError};
use tracing::{error, info, warn};

/// What happened to every recipient of a single dispatch
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DispatchReport {
    pub delivered: Vec<ID>,
    /// Subscriptions the push service reported as permanently gone
    pub dead: Vec<ID>,
    pub failed: Vec<ID>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DeliveryOutcome {
    Delivered,
    Dead,
    Failed,
}

async fn deliver(
    sub: &PushSubscription,
    message: &NotificationMessage,
    ctx: &HomeboardContext,
) -> DeliveryOutcome {
    let attempt = ctx.push.send(&sub.transport, message);
    match timeout(ctx.config.push_timeout, attempt).await {
        Ok(Ok(())) => DeliveryOutcome::Delivered,
        Ok(Err(PushError::Gone)) => {
            warn!(subscription_id = %sub.id, "Push endpoint is gone");
            DeliveryOutcome::Dead
        }
        Ok(Err(e)) => {
            warn!(subscription_id = %sub.id, error = %e, "Push delivery failed");
            DeliveryOutcome::Failed
        }
        Err(_) => {
            warn!(
                subscription_id = %sub.id,
                timeout_ms = ctx.config.push_timeout.as_millis() as u64,
                "Push delivery timed out"
            );
            DeliveryOutcome::Failed
        }
    }
}

/// Sends `message` to every recipient concurrently and waits for all of the
/// attempts to settle. A failing device never prevents delivery to the others.
pub async fn dispatch_notification(
    recipients: &[PushSubscription],
    message: &NotificationMessage,
    ctx: &HomeboardContext,
) -> DispatchReport {
    let outcomes = join_all(recipients.iter().map(|sub| deliver(sub, message, ctx))).await;

    let mut report = DispatchReport::default();
    for (sub, outcome) in recipients.iter().zip(outcomes) {
        let bucket = match outcome {
            DeliveryOutcome::Delivered => &mut report.delivered,
            DeliveryOutcome::Dead => &mut report.dead,
            DeliveryOutcome::Failed => &mut report.failed,
        };
        bucket.push(sub.id.clone());
    }
    report
}

/// Removes subscriptions found dead while dispatching, returns how many are gone
pub async fn prune_dead_subscriptions(dead: &[ID], ctx: &HomeboardContext) -> usize {
    let mut pruned = 0;
    for subscription_id in dead {
        match ctx.repos.subscriptions.delete(subscription_id).await {
            Ok(_) => {
                info!(subscription_id = %subscription_id, "Removed dead push subscription");
                pruned += 1;
            }
            Err(e) => error!(
                subscription_id = %subscription_id,
                "Unable to remove dead push subscription: {:?}", e
            ),
        }
    }
    pruned
}
