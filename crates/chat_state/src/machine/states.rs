//! Flow states - the stages a chat session moves through

use serde::{Deserialize, Serialize};

/// Defines the possible states of a session's conversation flow.
///
/// The happy path is `NeedsLanguage → NeedsDetails → Ready`, with
/// `NeedsServiceOption` inserted for contacts that carry an option menu.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    /// Waiting for the user to pick a conversation language.
    #[default]
    NeedsLanguage,

    /// Waiting for the contact-details form to be submitted.
    NeedsDetails,

    /// Waiting for a service option pick (option-menu contacts only).
    NeedsServiceOption,

    /// Free-form messaging is enabled.
    Ready,
}

impl FlowState {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Whether free-form text may be dispatched from this state.
    pub fn accepts_free_text(&self) -> bool {
        self.is_ready()
    }

    /// Get a human-readable description of the current state.
    pub fn description(&self) -> &'static str {
        match self {
            Self::NeedsLanguage => "Select a language",
            Self::NeedsDetails => "Complete your details",
            Self::NeedsServiceOption => "Choose a service",
            Self::Ready => "Ready for input",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_needs_language() {
        assert_eq!(FlowState::default(), FlowState::NeedsLanguage);
    }

    #[test]
    fn test_only_ready_accepts_free_text() {
        assert!(FlowState::Ready.accepts_free_text());
        assert!(!FlowState::NeedsLanguage.accepts_free_text());
        assert!(!FlowState::NeedsDetails.accepts_free_text());
        assert!(!FlowState::NeedsServiceOption.accepts_free_text());
    }

    #[test]
    fn test_descriptions_are_distinct() {
        let states = [
            FlowState::NeedsLanguage,
            FlowState::NeedsDetails,
            FlowState::NeedsServiceOption,
            FlowState::Ready,
        ];
        for (i, a) in states.iter().enumerate() {
            for b in &states[i + 1..] {
                assert_ne!(a.description(), b.description());
            }
        }
    }
}
