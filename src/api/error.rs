//! Failure taxonomy for remote API calls.
//!
//! ERROR HANDLING
//! ==============
//! Every call settles into exactly one of five kinds. Nothing is thrown or
//! swallowed: callers receive the kind and decide how to present it. Only
//! `Unauthorized` obliges the caller to react beyond presentation — it must
//! clear the stored session and send the user back to login.

/// Outcome kinds for one remote API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No session token was available locally; the request was never sent.
    #[error("no session token")]
    Unauthenticated,
    /// The server rejected the token (HTTP 401).
    #[error("token invalid or expired")]
    Unauthorized,
    /// The request never completed (DNS, connect, reset, ...).
    #[error("network error: {0}")]
    Transport(String),
    /// The response arrived but its body could not be decoded.
    #[error("malformed response body: {0}")]
    Decode(String),
    /// The server reported a business error.
    #[error("{message}")]
    Api { status: u16, message: String },
}

/// Best-effort extraction of the `message` field from a JSON error body.
/// The failure path itself never fails: anything unreadable falls back to a
/// generic message carrying the status code.
#[must_use]
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| format!("request failed with status {status}"))
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
