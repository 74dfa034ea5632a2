//! Configuration error types.

use thiserror::Error;

/// Problems found while loading or validating the contact directory.
///
/// Option-webhook completeness is checked here, at load time, so a missing
/// (language, option) entry surfaces as a startup error instead of a
/// silently dropped selection at runtime.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("duplicate contact id: {0}")]
    DuplicateContactId(String),

    #[error("contact {contact}: invalid {language} webhook url {url:?}")]
    InvalidWebhookUrl {
        contact: String,
        language: &'static str,
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("contact {contact}: option menu has no options")]
    EmptyOptionMenu { contact: String },

    #[error("contact {contact}: no {language} webhook for option {option:?}")]
    MissingOptionWebhook {
        contact: String,
        language: &'static str,
        option: String,
    },

    #[error("failed to read contact directory {path:?}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse contact directory")]
    Parse(#[from] toml::de::Error),
}
