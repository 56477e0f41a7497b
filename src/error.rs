//! Error type for client operations.
//!
//! Only transport failures and unparseable bodies become errors. A
//! syntactically valid envelope with `status: "bad"` is ordinary data and
//! is returned to the caller, not raised here.

use thiserror::Error;

/// Maximum length of the response-body snippet carried in a decode error.
const MAX_ERROR_BODY_LENGTH: usize = 500;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure: DNS, connect, TLS, or read. Passed through
    /// from the HTTP layer untranslated.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not a valid JSON envelope.
    #[error("invalid response body: {source}: {body}")]
    Decode {
        source: serde_json::Error,
        body: String,
    },
}

impl Error {
    pub(crate) fn decode(source: serde_json::Error, body: &str) -> Self {
        Self::Decode {
            source,
            body: truncate_body(body),
        }
    }
}

/// Truncate a response body so error messages stay loggable.
fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_LENGTH {
        body.to_string()
    } else {
        let head: String = body.chars().take(MAX_ERROR_BODY_LENGTH).collect();
        format!("{}... (truncated, {} total bytes)", head, body.len())
    }
}
