//! webhook_client - HTTP delivery of chat messages to contact webhooks
//!
//! One JSON POST per outgoing message. The heterogeneous response shapes
//! the endpoints produce are normalized to plain text, and every failure
//! collapses into a localized fallback reply: callers never see transport
//! errors.

pub mod client;
pub mod dispatch;
pub mod error;
pub mod normalize;
pub mod payload;

// Re-exports
pub use client::WebhookClient;
pub use dispatch::WebhookDispatch;
pub use error::WebhookError;
pub use payload::WebhookPayload;
