mod recording;
mod web_push;

use homeboard_domain::{NotificationMessage, PushTransportInfo};
use thiserror::Error;
pub use self::web_push::WebPushTransport;
pub use recording::{RecordingPushTransport, ScriptedOutcome};

/// Outcome of a failed delivery attempt to one device
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PushError {
    /// The device unsubscribed or the endpoint will never accept deliveries
    /// again (HTTP 404 / 410)
    #[error("Push endpoint is gone")]
    Gone,
    /// The stored transport blob can not be used to address the device
    #[error("Push transport is invalid: {0}")]
    InvalidTransport(String),
    /// Anything else: timeouts, 5xx answers, rejected payloads. The device
    /// may accept a later attempt.
    #[error("Push delivery failed: {0}")]
    Transient(String),
}

/// Performs a single push delivery attempt to one device.
///
/// Implementations must not retry.
#[async_trait::async_trait]
pub trait IPushTransport: Send + Sync {
    async fn send(
        &self,
        transport: &PushTransportInfo,
        message: &NotificationMessage,
    ) -> Result<(), PushError>;
}
