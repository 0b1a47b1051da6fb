use super::{IPushTransport, PushError};
use homeboard_domain::{NotificationMessage, PushTransportInfo};
use std::{collections::HashMap, sync::Mutex};

/// How `RecordingPushTransport` answers for an endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptedOutcome {
    Deliver,
    Gone,
    Fail,
    /// Never answers, the caller's timeout has to kick in
    Hang,
}

/// Push transport that never touches the network. Every attempt is recorded
/// and answered with the outcome scripted for its endpoint, `Deliver` by
/// default. Used when testing.
pub struct RecordingPushTransport {
    outcomes: Mutex<HashMap<String, ScriptedOutcome>>,
    attempts: Mutex<Vec<(String, NotificationMessage)>>,
}

impl RecordingPushTransport {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(HashMap::new()),
            attempts: Mutex::new(Vec::new()),
        }
    }

    pub fn script(&self, endpoint: &str, outcome: ScriptedOutcome) {
        self.outcomes
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), outcome);
    }

    /// Every attempt so far as (endpoint, message)
    pub fn attempts(&self) -> Vec<(String, NotificationMessage)> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn attempts_to(&self, endpoint: &str) -> usize {
        self.attempts
            .lock()
            .unwrap()
            .iter()
            .filter(|(e, _)| e == endpoint)
            .count()
    }
}

impl Default for RecordingPushTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IPushTransport for RecordingPushTransport {
    async fn send(
        &self,
        transport: &PushTransportInfo,
        message: &NotificationMessage,
    ) -> Result<(), PushError> {
        self.attempts
            .lock()
            .unwrap()
            .push((transport.endpoint.clone(), message.clone()));
        let outcome = self
            .outcomes
            .lock()
            .unwrap()
            .get(&transport.endpoint)
            .cloned()
            .unwrap_or(ScriptedOutcome::Deliver);

        match outcome {
            ScriptedOutcome::Deliver => Ok(()),
            ScriptedOutcome::Gone => Err(PushError::Gone),
            ScriptedOutcome::Fail => Err(PushError::Transient("503 Service Unavailable".into())),
            ScriptedOutcome::Hang => {
                std::future::pending::<()>().await;
                Ok(())
            }
        }
    }
}
