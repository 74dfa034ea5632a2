//! Flow controller error types

use chat_core::InvalidUserData;
use session_store::SessionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("unknown contact: {0}")]
    UnknownContact(String),

    #[error("no session for contact {0}")]
    SessionMissing(String),

    #[error("invalid user details: {0}")]
    InvalidDetails(#[from] InvalidUserData),
}

impl From<SessionError> for FlowError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound(contact_id) => Self::SessionMissing(contact_id),
        }
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;
