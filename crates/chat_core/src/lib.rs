//! chat_core - Core types and configuration for the contact chat system
//!
//! This crate provides the foundational types used across all chat crates:
//! - `contact` - contacts, webhook routing and service option menus
//! - `directory` - the static contact directory with load-time validation
//! - `message` - chat messages and control-message kinds
//! - `user` - collected user details
//! - `l10n` - the localized strings the conversation flow emits
//! - `classify` - image-URL detection for bot replies

pub mod classify;
pub mod contact;
pub mod directory;
pub mod error;
pub mod l10n;
pub mod language;
pub mod message;
pub mod user;

// Re-export commonly used types
pub use contact::{
    ChatOption, Contact, ContactCategory, LocalizedLabel, OptionMenu, OptionSpec, OptionWebhooks,
    WebhookConfig,
};
pub use directory::ContactDirectory;
pub use error::ConfigError;
pub use language::Language;
pub use message::{Message, MessageKind, Sender};
pub use user::{InvalidUserData, UserData};
