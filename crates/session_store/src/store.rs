//! Session Store - owns every session, keyed by contact id

use std::collections::HashMap;

use crate::error::{Result, SessionError};
use crate::session::Session;

/// The single owner of all chat sessions.
///
/// Exactly one session exists per contact id; `open` creates it lazily and
/// every later open returns the same session. Sessions are never removed:
/// they live for the lifetime of the store.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the session for a contact, creating it on first open.
    ///
    /// The second element is true when the session was created by this call.
    pub fn open(&mut self, contact_id: &str) -> (&mut Session, bool) {
        let created = !self.sessions.contains_key(contact_id);
        let session = self
            .sessions
            .entry(contact_id.to_string())
            .or_insert_with(|| {
                tracing::debug!(contact = contact_id, "creating session");
                Session::new(contact_id)
            });
        (session, created)
    }

    pub fn get(&self, contact_id: &str) -> Option<&Session> {
        self.sessions.get(contact_id)
    }

    pub fn get_mut(&mut self, contact_id: &str) -> Option<&mut Session> {
        self.sessions.get_mut(contact_id)
    }

    /// Like `get_mut`, but an absent session is an error.
    pub fn require_mut(&mut self, contact_id: &str) -> Result<&mut Session> {
        self.sessions
            .get_mut(contact_id)
            .ok_or_else(|| SessionError::NotFound(contact_id.to_string()))
    }

    pub fn contains(&self, contact_id: &str) -> bool {
        self.sessions.contains_key(contact_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Session> {
        self.sessions.values()
    }
}
