//! # Campusboard - Campus Board Client Library
//!
//! This is a facade crate that re-exports all public APIs from the client components.
//! Use this crate to get the form workflows, request plumbing and adapters in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! campusboard = { path = "../campusboard" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Username`, `Password`, `NewAccount`, etc.
//! - **Ports**: `TokenStore`, `ServiceClient`
//! - **Use cases**: `SignUpForm`, `CreatePostForm` on top of `FormMachine`
//! - **Adapters**: `ReqwestServiceClient`, `CookieFileTokenStore`, `ClientSettings`, etc.

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types, request plumbing and ports
pub mod core {
    pub use campusboard_core::*;
}

// Re-export most commonly used core types at the root level
pub use campusboard_core::{
    ApiTarget, ConfigurationError, Email, FormError, FormState, NewAccount, Password,
    RequestBuilder, RequestPayload, ServiceResult, SessionToken, Username, ValidationError, paths,
    validate_email, validate_password, validate_username,
};

// ============================================================================
// Ports
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use campusboard_core::{ServiceClient, TokenStore, TokenStoreError};
}

pub use ports::{ServiceClient, TokenStore, TokenStoreError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Form workflows
pub mod use_cases {
    pub use campusboard_application::*;
}

pub use campusboard_application::{
    CreatePostForm, FormMachine, FormPhase, PostField, Resolution, SignUpField, SignUpForm,
    SubmitRejected,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP service client
    pub mod http {
        pub use campusboard_adapters::http::*;
    }

    /// Token store implementations
    pub mod persistence {
        pub use campusboard_adapters::persistence::*;
    }

    /// Configuration
    pub mod config {
        pub use campusboard_adapters::config::*;
    }
}

pub use campusboard_adapters::{
    ClientSettings, CookieFileTokenStore, InMemoryTokenStore, ReqwestServiceClient,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing `ServiceClient`
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
