//! Per-contact session state

use chat_core::{Language, Message, UserData};
use chat_state::{FlowEvent, FlowState, StateMachine, StateTransition};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The conversation state for one contact.
///
/// A session holds the ordered message sequence (insertion order is display
/// order), the selected language, the collected user details, and the
/// webhook override established by a service-option pick. The session
/// identifier is generated once on construction and never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    contact_id: String,
    session_id: String,

    pub messages: Vec<Message>,
    pub language: Language,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,

    /// If set, overrides the contact's default webhook for outgoing sends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_webhook_url: Option<String>,

    /// The value of the service option picked in this session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_option: Option<String>,

    /// Raised while a webhook call is in flight. A plain flag: overlapping
    /// calls share it rather than reference-counting.
    #[serde(default)]
    pub typing: bool,

    machine: StateMachine,
    created_at: DateTime<Utc>,
}

impl Session {
    pub(crate) fn new(contact_id: impl Into<String>) -> Self {
        Self {
            contact_id: contact_id.into(),
            session_id: Uuid::new_v4().to_string(),
            messages: Vec::new(),
            language: Language::Unselected,
            user_data: None,
            active_webhook_url: None,
            selected_option: None,
            typing: false,
            machine: StateMachine::new(),
            created_at: Utc::now(),
        }
    }

    pub fn contact_id(&self) -> &str {
        &self.contact_id
    }

    /// Opaque identifier, stable for the session's lifetime.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn state(&self) -> FlowState {
        self.machine.state()
    }

    /// Feed a flow event through the session's state machine.
    pub fn apply(&mut self, event: FlowEvent) -> StateTransition {
        self.machine.handle_event(event)
    }

    pub fn transitions(&self) -> &[StateTransition] {
        self.machine.history()
    }

    /// Append a message, returning its id.
    pub fn push(&mut self, message: Message) -> Uuid {
        let id = message.id;
        tracing::debug!(
            contact = %self.contact_id,
            sender = ?message.sender,
            "append message"
        );
        self.messages.push(message);
        id
    }

    /// Remove every pending language selector. Returns how many were removed.
    pub fn strip_language_selectors(&mut self) -> usize {
        let before = self.messages.len();
        self.messages.retain(|m| !m.kind.is_language_selector());
        before - self.messages.len()
    }

    /// Remove every pending option selector. Returns how many were removed.
    pub fn strip_option_selectors(&mut self) -> usize {
        let before = self.messages.len();
        self.messages.retain(|m| !m.kind.is_option_selector());
        before - self.messages.len()
    }

    pub fn pending_language_selector(&self) -> bool {
        self.messages.iter().any(|m| m.kind.is_language_selector())
    }

    pub fn pending_option_selector(&self) -> bool {
        self.messages.iter().any(|m| m.kind.is_option_selector())
    }

    pub fn message(&self, id: Uuid) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn message_mut(&mut self, id: Uuid) -> Option<&mut Message> {
        self.messages.iter_mut().find(|m| m.id == id)
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Clear the one-shot animate flag after the reveal completes.
    ///
    /// Returns true only when a set flag was actually cleared; clearing an
    /// already-cleared flag (or an unknown id) is a no-op.
    pub fn mark_revealed(&mut self, id: Uuid) -> bool {
        match self.message_mut(id) {
            Some(message) if message.animate => {
                message.animate = false;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_fresh() {
        let session = Session::new("retailer-electrical");
        assert_eq!(session.contact_id(), "retailer-electrical");
        assert!(!session.session_id().is_empty());
        assert_eq!(session.language, Language::Unselected);
        assert!(session.messages.is_empty());
        assert!(session.user_data.is_none());
        assert_eq!(session.state(), FlowState::NeedsLanguage);
    }

    #[test]
    fn test_session_ids_are_unique() {
        let a = Session::new("a");
        let b = Session::new("b");
        assert_ne!(a.session_id(), b.session_id());
    }

    #[test]
    fn test_push_and_last_message() {
        let mut session = Session::new("retailer-hardware");
        assert!(session.last_message().is_none());
        assert!(session.created_at() <= chrono::Utc::now());

        let id = session.push(Message::user_text("hi"));
        assert_eq!(session.last_message().unwrap().id, id);
    }

    #[test]
    fn test_strip_selectors() {
        let mut session = Session::new("restaurant-general");
        session.push(Message::language_selector("pick"));
        session.push(Message::user_text("hi"));
        assert!(session.pending_language_selector());

        assert_eq!(session.strip_language_selectors(), 1);
        assert_eq!(session.strip_language_selectors(), 0);
        assert!(!session.pending_language_selector());
        assert_eq!(session.messages.len(), 1);
    }

    #[test]
    fn test_mark_revealed_is_idempotent() {
        let mut session = Session::new("retailer-paint");
        let id = session.push(Message::bot_text("Welcome!"));

        assert!(session.mark_revealed(id));
        assert!(!session.mark_revealed(id));
        assert!(!session.message(id).unwrap().animate);
        assert!(!session.mark_revealed(Uuid::new_v4()));
    }

    #[test]
    fn test_serde_round_trip_keeps_identity() {
        let mut session = Session::new("warehouses-gcc");
        session.push(Message::system_text("hello"));

        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back.session_id(), session.session_id());
        assert_eq!(back.messages.len(), 1);
        assert_eq!(back.state(), session.state());
    }
}
