//! Crate error types
//!
//! Every failure is scoped to the operation that triggered it; nothing here
//! is fatal to the process. Validation and sign-in errors are raised before
//! any network traffic happens.

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for feed operations
#[derive(Debug)]
pub enum Error {
    /// A submit precondition failed (empty URL, unknown source)
    Validation(String),
    /// The operation requires an authenticated session
    NotSignedIn,
    /// The API was unreachable or the transport failed
    Network(String),
    /// The API answered with a non-success status
    Api {
        /// HTTP status code returned by the server
        status: u16,
        /// Response body text, if any
        message: String,
    },
    /// The API answered with a body that could not be decoded
    Decode(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Validation(msg) => write!(f, "Validation failed: {}", msg),
            Error::NotSignedIn => write!(f, "Must sign in first"),
            Error::Network(msg) => write!(f, "Network error: {}", msg),
            Error::Api { status, message } => {
                write!(f, "API returned status {}: {}", status, message)
            }
            Error::Decode(msg) => write!(f, "Malformed API response: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl Error {
    /// Whether the error was raised before any request was issued
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::NotSignedIn)
    }
}
