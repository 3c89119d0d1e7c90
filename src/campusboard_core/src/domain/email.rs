use std::{fmt, sync::LazyLock};

use regex::Regex;

use super::account::ValidationError;

// Only college addresses are accepted: the last domain label must be `edu`.
static COLLEGE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9._%+-]+@(?:[a-z0-9-]+\.)+edu$").expect("valid email pattern")
});

/// Returns true iff `value` is a college (`.edu`) email address.
pub fn validate_email(value: &str) -> bool {
    COLLEGE_EMAIL.is_match(value)
}

/// An email address that passed [`validate_email`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if validate_email(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidEmail)
        }
    }
}

impl TryFrom<&str> for Email {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_owned())
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
