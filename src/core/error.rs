//! Error types for backend calls.
//!
//! Every failure ends up as a transient on-screen message, so besides the
//! usual `Display` each variant knows which text to show the user.

use thiserror::Error;

/// Failure of a request to the file API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure (offline, CORS, aborted request)
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a JSON body (`message` is empty when it
    /// carried no `error`)
    #[error("rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// Non-2xx response without a usable JSON error body
    #[error("HTTP error {status} {status_text}")]
    Status { status: u16, status_text: String },
    /// Successful response whose body could not be decoded
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown to the user for this error.
    ///
    /// Uses the server-provided message when there is one, then the HTTP
    /// status text, then `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message, .. } if !message.is_empty() => message.clone(),
            Self::Status { status_text, .. } if !status_text.is_empty() => status_text.clone(),
            _ => fallback.to_string(),
        }
    }
}
