//! State transitions - FSM transition logic
//!
//! Implements the state machine that handles event-driven state transitions.

use serde::{Deserialize, Serialize};

use super::events::FlowEvent;
use super::states::FlowState;

/// Represents a state transition result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state before the transition.
    pub from: FlowState,
    /// The state after the transition.
    pub to: FlowState,
    /// The event that triggered the transition.
    pub event: FlowEvent,
    /// Whether the state actually changed.
    pub changed: bool,
}

/// State machine for managing a session's flow state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateMachine {
    /// Current state.
    current_state: FlowState,
    /// Transition history (limited).
    history: Vec<StateTransition>,
    /// Max history entries to keep.
    max_history: usize,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    /// Create a new state machine in the NeedsLanguage state.
    pub fn new() -> Self {
        Self {
            current_state: FlowState::NeedsLanguage,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Create a state machine with a specific initial state.
    pub fn with_state(state: FlowState) -> Self {
        Self {
            current_state: state,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> FlowState {
        self.current_state
    }

    /// Get the transition history.
    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    /// Handle an event and transition to a new state.
    pub fn handle_event(&mut self, event: FlowEvent) -> StateTransition {
        let old_state = self.current_state;
        let new_state = compute_next_state(old_state, &event);
        let changed = old_state != new_state;

        if changed {
            tracing::debug!(from = ?old_state, to = ?new_state, "flow transition");
        }
        self.current_state = new_state;

        let transition = StateTransition {
            from: old_state,
            to: new_state,
            event,
            changed,
        };

        self.history.push(transition.clone());
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }

        transition
    }

    /// Check if a transition would change the state, without executing it.
    pub fn can_transition(&self, event: &FlowEvent) -> bool {
        compute_next_state(self.current_state, event) != self.current_state
    }
}

/// Compute the next state given current state and event.
///
/// Unknown pairs leave the state unchanged; repeated picks of language or
/// option are absorbed rather than rejected.
fn compute_next_state(state: FlowState, event: &FlowEvent) -> FlowState {
    use FlowEvent::*;
    use FlowState::*;

    match (state, event) {
        (
            NeedsLanguage,
            LanguageSelected {
                details_on_file, ..
            },
        ) => {
            if *details_on_file {
                Ready
            } else {
                NeedsDetails
            }
        }

        (NeedsDetails, DetailsSubmitted { has_option_menu }) => {
            if *has_option_menu {
                NeedsServiceOption
            } else {
                Ready
            }
        }

        (NeedsServiceOption, OptionSelected { .. }) => Ready,

        // Ready absorbs the messaging events.
        (Ready, MessageDispatched) | (Ready, ReplyReceived) => Ready,

        // Default: no transition.
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_core::Language;

    #[test]
    fn test_basic_flow() {
        let mut sm = StateMachine::new();
        assert_eq!(sm.state(), FlowState::NeedsLanguage);

        let t1 = sm.handle_event(FlowEvent::LanguageSelected {
            language: Language::English,
            details_on_file: false,
        });
        assert!(t1.changed);
        assert_eq!(sm.state(), FlowState::NeedsDetails);

        let t2 = sm.handle_event(FlowEvent::DetailsSubmitted {
            has_option_menu: false,
        });
        assert!(t2.changed);
        assert_eq!(sm.state(), FlowState::Ready);
    }

    #[test]
    fn test_option_menu_branch() {
        let mut sm = StateMachine::with_state(FlowState::NeedsDetails);

        sm.handle_event(FlowEvent::DetailsSubmitted {
            has_option_menu: true,
        });
        assert_eq!(sm.state(), FlowState::NeedsServiceOption);

        let t = sm.handle_event(FlowEvent::OptionSelected {
            value: "driveThru".to_string(),
        });
        assert!(t.changed);
        assert_eq!(sm.state(), FlowState::Ready);
    }

    #[test]
    fn test_language_pick_skips_details_when_on_file() {
        let mut sm = StateMachine::new();
        sm.handle_event(FlowEvent::LanguageSelected {
            language: Language::Arabic,
            details_on_file: true,
        });
        assert_eq!(sm.state(), FlowState::Ready);
    }

    #[test]
    fn test_unknown_pairs_are_no_ops() {
        let mut sm = StateMachine::new();
        let t = sm.handle_event(FlowEvent::MessageDispatched);
        assert!(!t.changed);
        assert_eq!(sm.state(), FlowState::NeedsLanguage);
        assert!(!sm.can_transition(&FlowEvent::ReplyReceived));
    }

    #[test]
    fn test_history_tracking() {
        let mut sm = StateMachine::new();
        sm.handle_event(FlowEvent::ContactOpened);
        sm.handle_event(FlowEvent::LanguageSelected {
            language: Language::English,
            details_on_file: false,
        });

        assert_eq!(sm.history().len(), 2);
        assert!(!sm.history()[0].changed);
        assert!(sm.history()[1].changed);
    }
}
