//! Error types for the Concessionario client.

use concessionario_types::StorageError;
use thiserror::Error;

/// Message shown when the server cannot be reached at all.
pub const UNREACHABLE_MESSAGE: &str = "Impossibile connettersi al server. Riprova più tardi.";

/// Errors that can occur when calling the remote API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// No response was received (DNS, refused connection, CORS, timeout).
    #[error("Connection failed: {0}")]
    Transport(String),

    /// Server answered with a non-2xx status.
    #[error("Server error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body, if any.
        message: Option<String>,
    },

    /// Server answered 2xx but the body does not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// The configured base URL cannot be combined with the request path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// HTTP status, when the server responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text for a notification: the server's own message when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Transport(_) => UNREACHABLE_MESSAGE.to_string(),
            Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Reasons a login attempt fails. `Display` is the text shown on the login form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Credentials refused, either by status code or by `success: false`.
    #[error("{0}")]
    Rejected(String),

    #[error("Impossibile connettersi al server. Verifica la tua connessione.")]
    Unreachable,

    /// Successful status but no username/token in the body.
    #[error("Risposta del server non valida")]
    Malformed,

    #[error("Impossibile salvare la sessione: {0}")]
    Storage(#[from] StorageError),
}
