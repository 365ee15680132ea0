//! Raw result of one call to the verification endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status reported when the request never produced a usable HTTP response.
pub const TRANSPORT_FAILURE_STATUS: u16 = 0;

/// What the verification endpoint said, or why it could not be asked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Transport succeeded and the HTTP status was in the 2xx range.
    pub ok: bool,
    /// HTTP status, or [`TRANSPORT_FAILURE_STATUS`] on transport failure.
    pub status: u16,
    /// Decoded response body, or `{"error": ...}` on transport failure.
    pub body: Value,
}

impl VerificationResult {
    pub fn from_response(status: u16, body: Value) -> Self {
        Self {
            ok: (200..300).contains(&status),
            status,
            body,
        }
    }

    /// A request that failed before a JSON body could be read.
    pub fn transport_failure(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            status: TRANSPORT_FAILURE_STATUS,
            body: serde_json::json!({ "error": reason.into() }),
        }
    }

    pub fn is_transport_failure(&self) -> bool {
        self.status == TRANSPORT_FAILURE_STATUS
    }

    /// Whether the body carries a `user` object.
    pub fn has_user(&self) -> bool {
        self.body.get("user").is_some_and(Value::is_object)
    }
}
