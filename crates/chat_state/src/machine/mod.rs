//! State machine module
//!
//! Contains the FSM implementation for the conversation flow lifecycle.

mod events;
mod states;
mod transitions;

pub use events::FlowEvent;
pub use states::FlowState;
pub use transitions::{StateMachine, StateTransition};
