//! Session store error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("no session for contact {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;
