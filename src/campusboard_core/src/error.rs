use thiserror::Error;

use crate::domain::account::ValidationError;

/// Why a form submission ended without success.
///
/// `Display` renders exactly the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Authentication Error")]
    Authentication,
    /// Business rejection from the backend, e.g. a taken username.
    #[error("{0}")]
    Conflict(String),
    #[error("Internal Service Error")]
    InternalService,
}
