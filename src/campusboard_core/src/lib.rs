pub mod domain;
pub mod error;
pub mod form_state;
pub mod ports;
pub mod request;
pub mod service_result;

// Re-export commonly used types for convenience
pub use domain::{
    account::{NewAccount, ValidationError},
    email::{Email, validate_email},
    password::{Password, validate_password},
    session_token::SessionToken,
    username::{Username, validate_username},
};

pub use error::FormError;
pub use form_state::FormState;

pub use ports::{
    services::ServiceClient,
    token_store::{TokenStore, TokenStoreError},
};

pub use request::{
    AUTHORIZATION_HEADER, ApiTarget, ConfigurationError, DEFAULT_TOKEN_NAME, RequestBuilder,
    RequestPayload, paths,
};
pub use service_result::ServiceResult;
