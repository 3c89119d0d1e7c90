use secrecy::{ExposeSecret, Secret};

use super::account::ValidationError;

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 64;

/// Returns true iff `value` is 8 to 64 characters long and mixes ASCII letters
/// with ASCII digits.
pub fn validate_password(value: &str) -> bool {
    let length = value.chars().count();

    (MIN_LENGTH..=MAX_LENGTH).contains(&length)
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit())
}

#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = ValidationError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if validate_password(value.expose_secret()) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidPassword)
        }
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
