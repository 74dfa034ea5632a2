//! chat_flow - Conversation flow controller for the contact chat system
//!
//! Drives a session through language selection, detail collection, the
//! optional service-option step, and free-form messaging, dispatching
//! outgoing messages through a [`webhook_client::WebhookDispatch`] and
//! classifying the replies. Also hosts the cooperative typewriter reveal
//! used by a rendering surface.

pub mod controller;
pub mod error;
pub mod outcome;
pub mod reveal;

// Re-exports
pub use controller::FlowController;
pub use error::FlowError;
pub use outcome::{DetailsOutcome, LanguageOutcome, OptionOutcome, SendOutcome};
pub use reveal::Typewriter;
