use std::{collections::BTreeMap, fmt};

use http::Method;
use secrecy::ExposeSecret;
use serde_json::Value;
use thiserror::Error;

use crate::ports::token_store::TokenStore;

/// Backend paths used by the forms.
pub mod paths {
    pub const CREATE_POST: &str = "/api/v1/user/createpost";
    pub const SIGN_UP: &str = "/api/v1/user/signup";
}

pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const DEFAULT_TOKEN_NAME: &str = "jwtToken";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("No backend domain configured")]
    MissingDomain,
    #[error("Invalid backend target: {0}")]
    InvalidTarget(String),
}

/// Where requests go: scheme and backend domain (host, optionally with port).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiTarget {
    scheme: String,
    domain: Option<String>,
    token_name: String,
}

impl ApiTarget {
    pub fn new(domain: Option<String>) -> Self {
        Self {
            scheme: "https".to_string(),
            domain,
            token_name: DEFAULT_TOKEN_NAME.to_string(),
        }
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_token_name(mut self, token_name: impl Into<String>) -> Self {
        self.token_name = token_name.into();
        self
    }

    pub fn token_name(&self) -> &str {
        &self.token_name
    }

    fn url_for(&self, path: &str) -> Result<String, ConfigurationError> {
        let domain = self
            .domain
            .as_deref()
            .map(str::trim)
            .filter(|domain| !domain.is_empty())
            .ok_or(ConfigurationError::MissingDomain)?;

        if self.scheme != "https" && self.scheme != "http" {
            return Err(ConfigurationError::InvalidTarget(format!(
                "unsupported scheme `{}`",
                self.scheme
            )));
        }
        if domain.contains('/') {
            return Err(ConfigurationError::InvalidTarget(format!(
                "domain `{domain}` must not contain a path"
            )));
        }
        if !path.starts_with('/') {
            return Err(ConfigurationError::InvalidTarget(format!(
                "path `{path}` must start with `/`"
            )));
        }

        Ok(format!("{}://{}{}", self.scheme, domain, path))
    }
}

/// Fully composed outbound request. Immutable once built.
#[derive(Clone, PartialEq)]
pub struct RequestPayload {
    method: Method,
    url: String,
    headers: BTreeMap<String, String>,
    body: Value,
}

impl RequestPayload {
    pub fn new(
        method: Method,
        url: impl Into<String>,
        headers: BTreeMap<String, String>,
        body: Value,
    ) -> Self {
        Self {
            method,
            url: url.into(),
            headers,
            body,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn body(&self) -> &Value {
        &self.body
    }
}

impl fmt::Debug for RequestPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: BTreeMap<&str, &str> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case(AUTHORIZATION_HEADER) {
                    (name.as_str(), "[REDACTED]")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("RequestPayload")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .finish_non_exhaustive()
    }
}

/// Composes requests against the configured backend, attaching whatever
/// session token the injected store currently holds.
#[derive(Debug, Clone)]
pub struct RequestBuilder<T> {
    target: ApiTarget,
    token_store: T,
}

impl<T> RequestBuilder<T>
where
    T: TokenStore,
{
    pub fn new(target: ApiTarget, token_store: T) -> Self {
        Self {
            target,
            token_store,
        }
    }

    pub fn target(&self) -> &ApiTarget {
        &self.target
    }

    pub fn token_store(&self) -> &T {
        &self.token_store
    }

    /// Builds a request for `path` carrying `body`.
    ///
    /// The `Authorization` header is always present; it is empty when the
    /// store has no token. A store that cannot be read counts as empty.
    pub fn build(
        &self,
        method: Method,
        path: &str,
        body: Value,
    ) -> Result<RequestPayload, ConfigurationError> {
        let url = self.target.url_for(path)?;

        let token = match self.token_store.load(self.target.token_name()) {
            Ok(token) => token
                .map(|token| token.as_ref().expose_secret().clone())
                .unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read session token, sending without one");
                String::new()
            }
        };

        let mut headers = BTreeMap::new();
        headers.insert(AUTHORIZATION_HEADER.to_string(), token);

        Ok(RequestPayload::new(method, url, headers, body))
    }
}
