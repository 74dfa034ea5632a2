//! Flow events - UI-originated events that trigger state transitions

use chat_core::Language;
use serde::{Deserialize, Serialize};

/// Defines the events that can trigger state transitions in the FSM.
///
/// Every event is raised by a discrete rendering-surface action except
/// `ReplyReceived`, which marks the arrival of a webhook response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FlowEvent {
    /// A contact was opened and its session created.
    ContactOpened,

    /// The user picked a conversation language.
    LanguageSelected {
        language: Language,
        /// Whether user details were already collected in this session.
        details_on_file: bool,
    },

    /// Valid user details were submitted.
    DetailsSubmitted {
        /// Whether the contact carries a service option menu.
        has_option_menu: bool,
    },

    /// The user picked a service option.
    OptionSelected { value: String },

    /// An outgoing user message was handed to the webhook client.
    MessageDispatched,

    /// A bot reply (or the fallback) was appended.
    ReplyReceived,
}

impl FlowEvent {
    /// Check if this event is user-initiated.
    pub fn is_user_event(&self) -> bool {
        !matches!(self, Self::ReplyReceived)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_event_detection() {
        assert!(FlowEvent::ContactOpened.is_user_event());
        assert!(FlowEvent::MessageDispatched.is_user_event());
        assert!(!FlowEvent::ReplyReceived.is_user_event());
    }

    #[test]
    fn test_serialized_tag() {
        let event = FlowEvent::LanguageSelected {
            language: Language::English,
            details_on_file: false,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "language_selected");
        assert_eq!(json["language"], "en");
    }
}
