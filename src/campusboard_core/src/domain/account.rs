use secrecy::Secret;
use thiserror::Error;

use super::{email::Email, password::Password, username::Username};

/// Client-side input rejections. The display text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid email. You must use a college email.")]
    InvalidEmail,
    #[error("Invalid username")]
    InvalidUsername,
    #[error("Invalid password")]
    InvalidPassword,
}

/// Credentials for a new account, every field already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    email: Email,
    username: Username,
    password: Password,
}

impl NewAccount {
    /// Validates the raw sign-up fields.
    ///
    /// Fields are checked in order (email, username, password) and the first
    /// failing check is returned.
    pub fn parse(email: &str, username: &str, password: &str) -> Result<Self, ValidationError> {
        let email = Email::try_from(email)?;
        let username = Username::try_from(username)?;
        let password = Password::try_from(Secret::new(password.to_owned()))?;

        Ok(Self {
            email,
            username,
            password,
        })
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}
