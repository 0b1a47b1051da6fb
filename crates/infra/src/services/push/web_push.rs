use super::{IPushTransport, PushError};
use crate::config::VapidConfig;
use homeboard_domain::{NotificationMessage, PushTransportInfo};
use web_push::{
    ContentEncoding, IsahcWebPushClient, SubscriptionInfo, VapidSignatureBuilder, WebPushClient,
    WebPushError, WebPushMessage, WebPushMessageBuilder,
};

/// Web push (RFC 8030) delivery signed with VAPID
pub struct WebPushTransport {
    client: IsahcWebPushClient,
    vapid: VapidConfig,
}

impl WebPushTransport {
    /// Fails if the http client can not be created or the VAPID key is not
    /// a valid PEM encoded key
    pub fn new(vapid: VapidConfig) -> anyhow::Result<Self> {
        VapidSignatureBuilder::from_pem_no_sub(vapid.private_key_pem.as_bytes())
            .map_err(|e| anyhow::anyhow!("VAPID_PRIVATE_KEY is not a valid PEM key: {}", e))?;
        let client = IsahcWebPushClient::new()?;

        Ok(Self { client, vapid })
    }

    fn build_message(
        &self,
        transport: &PushTransportInfo,
        payload: &[u8],
    ) -> Result<WebPushMessage, WebPushError> {
        let subscription_info = SubscriptionInfo::new(
            transport.endpoint.as_str(),
            transport.keys.p256dh.as_str(),
            transport.keys.auth.as_str(),
        );

        let mut signature_builder =
            VapidSignatureBuilder::from_pem(self.vapid.private_key_pem.as_bytes(), &subscription_info)?;
        signature_builder.add_claim("sub", self.vapid.subject.as_str());
        let signature = signature_builder.build()?;

        let mut builder = WebPushMessageBuilder::new(&subscription_info);
        builder.set_ttl(self.vapid.ttl_secs);
        builder.set_payload(ContentEncoding::Aes128Gcm, payload);
        builder.set_vapid_signature(signature);
        builder.build()
    }
}

fn classify(err: WebPushError) -> PushError {
    match err {
        WebPushError::EndpointNotValid { .. } | WebPushError::EndpointNotFound { .. } => {
            PushError::Gone
        }
        WebPushError::InvalidUri { .. } => PushError::InvalidTransport(err.to_string()),
        other => PushError::Transient(other.to_string()),
    }
}

#[async_trait::async_trait]
impl IPushTransport for WebPushTransport {
    async fn send(
        &self,
        transport: &PushTransportInfo,
        message: &NotificationMessage,
    ) -> Result<(), PushError> {
        if let Err(e) = transport.validate() {
            return Err(PushError::InvalidTransport(e.to_string()));
        }
        let payload =
            serde_json::to_vec(message).map_err(|e| PushError::Transient(e.to_string()))?;

        let push_message = self.build_message(transport, &payload).map_err(classify)?;
        self.client.send(push_message).await.map_err(classify)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsubscribed_devices_are_gone() {
        // 410 and 404 from the push service
        assert_eq!(classify(WebPushError::EndpointNotValid), PushError::Gone);
        assert_eq!(classify(WebPushError::EndpointNotFound), PushError::Gone);
    }

    #[test]
    fn other_push_service_errors_are_transient() {
        for err in [
            WebPushError::ServerError(None),
            WebPushError::Unauthorized,
            WebPushError::BadRequest(None),
            WebPushError::PayloadTooLarge,
        ] {
            assert!(matches!(classify(err), PushError::Transient(_)));
        }
    }

    #[test]
    fn unusable_endpoint_is_an_invalid_transport() {
        assert!(matches!(
            classify(WebPushError::InvalidUri),
            PushError::InvalidTransport(_)
        ));
    }
}
