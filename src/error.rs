//! Client error type shared by REST and WebSocket helpers.
//!
//! ERROR HANDLING
//! ==============
//! Every remote failure is folded into `ClientError` so pages can hand it to
//! the shared error sink without caring which transport produced it. Local
//! precondition failures (e.g. starting a game without enough players) are
//! not errors here; they live next to the form that rejects them.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced while talking to the game server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The request never reached the server or the connection dropped.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success HTTP status.
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The request payload could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// The session WebSocket failed.
    #[error("state socket failed: {0}")]
    Socket(String),

    /// Network helpers are only available in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ClientError {
    /// Build a `Status` error, trimming the body so long HTML error pages
    /// do not flood the error list.
    pub fn status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let body = match body.char_indices().nth(MAX_BODY_CHARS) {
            Some((idx, _)) => format!("{}…", &body[..idx]),
            None => body.to_owned(),
        };
        Self::Status { status, body }
    }

    /// Short user-facing message for the error list.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { body, .. } if !body.is_empty() => body.clone(),
            Self::Status { status, .. } => format!("The server rejected the request ({status})."),
            Self::Request(_) | Self::Socket(_) => "Could not reach the game server.".to_owned(),
            Self::Decode(_) => "The game server sent an unexpected response.".to_owned(),
            Self::Encode(_) => "The request could not be prepared.".to_owned(),
            Self::Unavailable => "This action is only available in the browser.".to_owned(),
        }
    }
}

const MAX_BODY_CHARS: usize = 200;
