//! Chat messages and control-message kinds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contact::ChatOption;

/// Who produced a message.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    System,
    Bot,
}

/// The variant of a message.
///
/// `LanguageSelector` and `OptionSelector` are control messages: transient
/// prompts that are stripped from the sequence the instant the user acts on
/// them, so a session holds at most one pending prompt of each kind.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum MessageKind {
    Text,
    LanguageSelector,
    OptionSelector { options: Vec<ChatOption> },
    Image { url: String },
}

impl MessageKind {
    pub fn is_language_selector(&self) -> bool {
        matches!(self, Self::LanguageSelector)
    }

    pub fn is_option_selector(&self) -> bool {
        matches!(self, Self::OptionSelector { .. })
    }

    pub fn is_control(&self) -> bool {
        self.is_language_selector() || self.is_option_selector()
    }
}

/// One entry of a session's message sequence. Insertion order is display
/// order.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Message {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: MessageKind,
    /// One-shot typewriter flag. Set on fresh bot text and cleared exactly
    /// once when the reveal completes, so replaying a session never
    /// re-triggers the animation.
    #[serde(default)]
    pub animate: bool,
}

impl Message {
    fn new(sender: Sender, text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            timestamp: Utc::now(),
            kind,
            animate: false,
        }
    }

    pub fn user_text(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text, MessageKind::Text)
    }

    pub fn system_text(text: impl Into<String>) -> Self {
        Self::new(Sender::System, text, MessageKind::Text)
    }

    /// A bot text reply, flagged for the one-shot typewriter reveal.
    pub fn bot_text(text: impl Into<String>) -> Self {
        let mut message = Self::new(Sender::Bot, text, MessageKind::Text);
        message.animate = true;
        message
    }

    /// A bot reply carrying a media URL; the display text is reduced to a
    /// placeholder label.
    pub fn bot_image(url: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self::new(
            Sender::Bot,
            placeholder,
            MessageKind::Image { url: url.into() },
        )
    }

    pub fn language_selector(prompt: impl Into<String>) -> Self {
        Self::new(Sender::System, prompt, MessageKind::LanguageSelector)
    }

    pub fn option_selector(prompt: impl Into<String>, options: Vec<ChatOption>) -> Self {
        Self::new(Sender::System, prompt, MessageKind::OptionSelector { options })
    }
}
