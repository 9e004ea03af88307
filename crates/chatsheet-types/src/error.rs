use std::fmt;

/// Result type for chatsheet-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading session data
#[derive(Debug)]
pub enum Error {
    /// JSON parsing failed
    Json(serde_json::Error),

    /// Input parsed but is not shaped like a session map
    Shape(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Shape(msg) => write!(f, "Unexpected input shape: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::Shape(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
