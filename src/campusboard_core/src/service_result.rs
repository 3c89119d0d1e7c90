use serde::Deserialize;
use serde_json::Value;

/// Outcome of one backend call, as seen by a form controller.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceResult {
    /// The backend answered `status: "success"`.
    Success { data: Value },
    /// The backend answered `status: "error"`, optionally with a message.
    Error { message: Option<String> },
    /// Transport failure, undecodable body, or a body without a known status.
    InternalError { reason: String },
}

#[derive(Debug, Deserialize)]
struct Envelope {
    status: Option<String>,
    #[serde(default)]
    data: Value,
    message: Option<String>,
}

const STATUS_SUCCESS: &str = "success";
const STATUS_ERROR: &str = "error";

impl ServiceResult {
    pub fn internal(reason: impl Into<String>) -> Self {
        Self::InternalError {
            reason: reason.into(),
        }
    }

    /// Classifies a decoded response body.
    ///
    /// A body whose `status` is missing is an internal error even if it carries
    /// usable `data`.
    pub fn from_envelope(body: Value) -> Self {
        let envelope: Envelope = match serde_json::from_value(body) {
            Ok(envelope) => envelope,
            Err(e) => return Self::internal(format!("unexpected response shape: {e}")),
        };

        match envelope.status.as_deref() {
            Some(STATUS_SUCCESS) => Self::Success {
                data: envelope.data,
            },
            Some(STATUS_ERROR) => Self::Error {
                message: envelope.message,
            },
            Some(other) => Self::internal(format!("unknown response status `{other}`")),
            None => Self::internal("response has no status"),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
