//! User details collected once per session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Contact details submitted through the details form.
///
/// All three fields are required once the record exists; a session either
/// has complete details or none at all.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserData {
    pub name: String,
    /// Phone number with a leading country code, e.g. `+971501234567`.
    pub number: String,
    pub email: String,
}

/// Why a details submission was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidUserData {
    #[error("name is required")]
    MissingName,
    #[error("phone number is required")]
    MissingNumber,
    #[error("phone number must start with a country code, e.g. +971")]
    NumberMissingCountryCode,
    #[error("email is required")]
    MissingEmail,
    #[error("email address is malformed: {0}")]
    MalformedEmail(String),
}

impl UserData {
    pub fn validate(&self) -> Result<(), InvalidUserData> {
        if self.name.trim().is_empty() {
            return Err(InvalidUserData::MissingName);
        }
        let number = self.number.trim();
        if number.is_empty() {
            return Err(InvalidUserData::MissingNumber);
        }
        if !number.starts_with('+') {
            return Err(InvalidUserData::NumberMissingCountryCode);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(InvalidUserData::MissingEmail);
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(InvalidUserData::MalformedEmail(email.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> UserData {
        UserData {
            name: "Aisha".to_string(),
            number: "+971501234567".to_string(),
            email: "aisha@example.com".to_string(),
        }
    }

    #[test]
    fn test_complete_details_pass() {
        assert!(details().validate().is_ok());
    }

    #[test]
    fn test_blank_fields_rejected() {
        let mut d = details();
        d.name = "  ".to_string();
        assert_eq!(d.validate(), Err(InvalidUserData::MissingName));

        let mut d = details();
        d.number = String::new();
        assert_eq!(d.validate(), Err(InvalidUserData::MissingNumber));

        let mut d = details();
        d.email = String::new();
        assert_eq!(d.validate(), Err(InvalidUserData::MissingEmail));
    }

    #[test]
    fn test_number_requires_country_code() {
        let mut d = details();
        d.number = "0501234567".to_string();
        assert_eq!(d.validate(), Err(InvalidUserData::NumberMissingCountryCode));
    }

    #[test]
    fn test_email_requires_local_and_domain() {
        for email in ["no-at-sign", "@example.com", "user@"] {
            let mut d = details();
            d.email = email.to_string();
            assert!(matches!(
                d.validate(),
                Err(InvalidUserData::MalformedEmail(_))
            ));
        }
    }
}
