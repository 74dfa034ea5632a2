//! chat_state - State machine for the contact chat conversation flow
//!
//! This crate provides the per-session state machine that gates the
//! conversation: language selection, detail collection, the optional
//! service-option step, and free-form messaging.

pub mod machine;

// Re-export commonly used types
pub use machine::{FlowEvent, FlowState, StateMachine, StateTransition};
