//! The HTTP webhook client.

use std::time::Duration;

use anyhow::anyhow;
use chat_core::l10n;
use log::{info, warn};
use reqwest::Client;

use crate::error::WebhookError;
use crate::normalize;
use crate::payload::WebhookPayload;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Delivers outgoing messages to contact webhooks.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: Client,
}

impl WebhookClient {
    pub fn new() -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| anyhow!("failed to build webhook http client: {e}"))?;
        Ok(Self { http })
    }

    /// Use a pre-configured reqwest client (proxies, custom timeouts).
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }

    /// Deliver one payload and return the reply text.
    ///
    /// Exactly one attempt, no retry. Any failure - connect error, timeout,
    /// non-success status, unparsable body - is collapsed into the fixed
    /// localized fallback reply, so the caller treats the result as a
    /// normal bot message either way.
    pub async fn send(&self, url: &str, payload: &WebhookPayload) -> String {
        match self.try_send(url, payload).await {
            Ok(text) => text,
            Err(err) => {
                warn!("webhook call to {url} failed: {err}");
                l10n::fallback_reply(payload.language).to_string()
            }
        }
    }

    async fn try_send(&self, url: &str, payload: &WebhookPayload) -> Result<String, WebhookError> {
        info!("POST {url} (session {})", payload.session_id);

        let response = self.http.post(url).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WebhookError::Status(status));
        }

        let body: serde_json::Value = response.json().await?;
        Ok(normalize::response_text(&body))
    }
}
