//! The seam between the conversation flow and the HTTP layer.

use async_trait::async_trait;

use crate::client::WebhookClient;
use crate::payload::WebhookPayload;

/// Anything that can deliver a payload to a webhook URL.
///
/// Implementations do not error: transport problems are expected to
/// surface as the localized fallback text, keeping the flow layer free of
/// transport concerns.
#[async_trait]
pub trait WebhookDispatch: Send + Sync {
    async fn dispatch(&self, url: &str, payload: &WebhookPayload) -> String;
}

#[async_trait]
impl WebhookDispatch for WebhookClient {
    async fn dispatch(&self, url: &str, payload: &WebhookPayload) -> String {
        self.send(url, payload).await
    }
}
