use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Encryption keys handed out by the browser push service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushTransportKeys {
    pub p256dh: String,
    pub auth: String,
}

/// The addressing and credential blob of a single device, in the shape the
/// browser `PushSubscription.toJSON()` produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushTransportInfo {
    pub endpoint: String,
    pub keys: PushTransportKeys,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidTransportError {
    #[error("Push endpoint is missing")]
    MissingEndpoint,
    #[error("Push endpoint: {0} is not a valid http(s) url")]
    MalformedEndpoint(String),
    #[error("Push subscription key `{0}` is missing")]
    MissingKey(&'static str),
}

impl PushTransportInfo {
    pub fn new(endpoint: String, p256dh: String, auth: String) -> Self {
        Self {
            endpoint,
            keys: PushTransportKeys { p256dh, auth },
        }
    }

    pub fn validate(&self) -> Result<(), InvalidTransportError> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(InvalidTransportError::MissingEndpoint);
        }
        match url::Url::parse(endpoint) {
            Ok(parsed) if ["https", "http"].contains(&parsed.scheme()) => {}
            _ => return Err(InvalidTransportError::MalformedEndpoint(endpoint.to_string())),
        }
        if self.keys.p256dh.trim().is_empty() {
            return Err(InvalidTransportError::MissingKey("p256dh"));
        }
        if self.keys.auth.trim().is_empty() {
            return Err(InvalidTransportError::MissingKey("auth"));
        }
        Ok(())
    }

    pub fn is_usable(&self) -> bool {
        self.validate().is_ok()
    }
}

/// One registered device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushSubscription {
    pub id: ID,
    /// Person who registered the device. Missing on records created before
    /// devices were registered per person, those never receive targeted sends.
    pub owner_id: Option<String>,
    pub transport: PushTransportInfo,
}

impl Entity for PushSubscription {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl PushSubscription {
    pub fn new(owner_id: String, transport: PushTransportInfo) -> Self {
        Self {
            id: Default::default(),
            owner_id: Some(owner_id),
            transport,
        }
    }

    pub fn is_orphaned(&self) -> bool {
        self.owner_id
            .as_ref()
            .map(|owner| owner.trim().is_empty())
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_accepts_browser_subscription_json() {
        let raw = r#"{
            "endpoint": "https://fcm.googleapis.com/fcm/send/abc",
            "expirationTime": null,
            "keys": { "p256dh": "BNcRdreALRFXTkOOUHK1EtK2wtaz5Ry4YfYCA", "auth": "tBHItJI5svbpez7KI4CCXg" }
        }"#;
        let transport: PushTransportInfo = serde_json::from_str(raw).expect("To parse");
        assert!(transport.validate().is_ok());
    }

    #[test]
    fn it_rejects_malformed_transport() {
        let cases = vec![
            (
                PushTransportInfo::new("".into(), "k".into(), "a".into()),
                InvalidTransportError::MissingEndpoint,
            ),
            (
                PushTransportInfo::new("fcm.googleapis.com".into(), "k".into(), "a".into()),
                InvalidTransportError::MalformedEndpoint("fcm.googleapis.com".into()),
            ),
            (
                PushTransportInfo::new("ftp://push.example".into(), "k".into(), "a".into()),
                InvalidTransportError::MalformedEndpoint("ftp://push.example".into()),
            ),
            (
                PushTransportInfo::new("https://push.example".into(), " ".into(), "a".into()),
                InvalidTransportError::MissingKey("p256dh"),
            ),
            (
                PushTransportInfo::new("https://push.example".into(), "k".into(), "".into()),
                InvalidTransportError::MissingKey("auth"),
            ),
        ];
        for (transport, expected) in cases {
            assert_eq!(transport.validate(), Err(expected));
            assert!(!transport.is_usable());
        }
    }

    #[test]
    fn subscriptions_without_owner_are_orphaned() {
        let transport = PushTransportInfo::new("https://push.example".into(), "k".into(), "a".into());
        let mut sub = PushSubscription::new("zsombor".into(), transport);
        assert!(!sub.is_orphaned());
        sub.owner_id = None;
        assert!(sub.is_orphaned());
        sub.owner_id = Some("  ".into());
        assert!(sub.is_orphaned());
    }
}
