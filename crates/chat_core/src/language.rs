//! Conversation languages.

use serde::{Deserialize, Serialize};

/// Language of a chat session.
///
/// Every session starts out `Unselected`; the first message of a fresh
/// session is the language prompt, and free-form messaging stays locked
/// until the user has picked one of the two supported languages.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    #[serde(rename = "unselected")]
    Unselected,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
}

impl Language {
    /// Whether the user has made a choice yet.
    pub fn is_selected(&self) -> bool {
        !matches!(self, Self::Unselected)
    }

    /// Wire code, matching the serialized form.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unselected => "unselected",
            Self::English => "en",
            Self::Arabic => "ar",
        }
    }
}
