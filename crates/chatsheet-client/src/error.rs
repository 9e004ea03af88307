use std::fmt;

/// Result type for chatsheet-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while retrieving sessions
#[derive(Debug)]
pub enum Error {
    /// Transport failure or undecodable response body
    Http(reqwest::Error),

    /// The service answered with a non-success status
    Status { session_id: String, status: u16 },

    /// Client settings are incomplete or invalid
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Status { session_id, status } => {
                write!(f, "Session {} returned HTTP {}", session_id, status)
            }
            Error::Config(msg) => write!(f, "Client configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Status { .. } | Error::Config(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}
