//! Internal webhook failure taxonomy.
//!
//! These never cross the crate boundary: `WebhookClient::send` collapses
//! them into the localized fallback reply.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}
