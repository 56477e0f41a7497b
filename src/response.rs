//! The uniform response envelope returned by every SAURES endpoint.

use serde::Deserialize;
use serde_json::Value;

/// Top-level `status` field of the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Bad,
}

/// The `{data, errors, status}` envelope every endpoint responds with.
///
/// The client hands this back verbatim: application-level failures arrive
/// as `status: "bad"` with a populated `errors` list, never as a Rust
/// error. Payload shapes under `data` vary per endpoint and are left as
/// opaque JSON for the caller to pick apart.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub errors: Vec<Value>,
    pub status: Status,
}

impl ApiResponse {
    /// True when the service reported `status: "ok"`.
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}
