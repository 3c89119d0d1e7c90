use std::{fmt, sync::LazyLock};

use regex::Regex;

use super::account::ValidationError;

static USERNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.]{2,19}$").expect("valid username pattern")
});

/// Returns true iff `value` is 3 to 20 characters of letters, digits, `_` or `.`,
/// starting with a letter or digit.
pub fn validate_username(value: &str) -> bool {
    USERNAME.is_match(value)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if validate_username(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidUsername)
        }
    }
}

impl TryFrom<&str> for Username {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_owned())
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn accepts_plain_usernames() {
        assert!(validate_username("testuser"));
        assert!(validate_username("test"));
        assert!(validate_username("j.doe_2024"));
    }

    #[test]
    fn rejects_malformed_usernames() {
        assert!(!validate_username(""));
        assert!(!validate_username("ab"));
        assert!(!validate_username("_hidden"));
        assert!(!validate_username("has space"));
        assert!(!validate_username("averyveryverylongusername"));
    }

    #[quickcheck]
    fn usernames_longer_than_twenty_chars_are_rejected(value: String) -> bool {
        value.chars().count() <= 20 || !validate_username(&value)
    }
}
