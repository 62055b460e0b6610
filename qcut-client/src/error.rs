//! Client error types

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (transport / network)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Missing configuration value
    #[error("Missing configuration: {0}")]
    Config(&'static str),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Server-reported validation failure, one message per field
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Server-reported generic failure
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Error body shape of the venue API
///
/// `message` is either a single string or a list of per-field
/// `{ "message": ... }` objects for validation failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: ErrorMessage,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    One(String),
    Many(Vec<FieldMessage>),
}

#[derive(Debug, Deserialize)]
struct FieldMessage {
    message: String,
}

impl ClientError {
    /// Map a non-success status and its body to an error
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        if status == StatusCode::UNAUTHORIZED {
            return ClientError::Unauthorized;
        }

        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => match parsed.message {
                ErrorMessage::Many(fields) => {
                    ClientError::Validation(fields.into_iter().map(|f| f.message).collect())
                }
                ErrorMessage::One(message) => ClientError::Api {
                    status: status.as_u16(),
                    message,
                },
            },
            // Not every failure carries a JSON body; fall back to the raw text.
            Err(_) => ClientError::Api {
                status: status.as_u16(),
                message: body.to_string(),
            },
        }
    }

    /// Messages to surface to the user
    ///
    /// Validation failures yield every field message; everything else
    /// yields a single message.
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            ClientError::Validation(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}
