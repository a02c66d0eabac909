use serde::Serialize;
use thiserror::Error;

/// Classified failure returned by every catalog operation.
///
/// The set is closed: callers match on it exhaustively and can show
/// `message()` to the user as-is. `detail` is diagnostic text for logs and
/// never part of the displayed message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum AppError {
    #[error("Could not reach the catalog service")]
    TransportFailure { detail: String },

    #[error("Catalog service responded with status {status_code}")]
    ServerResponseFailure { status_code: u16 },

    #[error("Catalog response did not have the expected shape")]
    ShapeMismatch { detail: String },

    #[error("Unexpected error while talking to the catalog service")]
    Unclassified { detail: String },
}

impl AppError {
    pub fn transport(detail: impl Into<String>) -> Self {
        AppError::TransportFailure {
            detail: detail.into(),
        }
    }

    pub fn server_response(status_code: u16) -> Self {
        AppError::ServerResponseFailure { status_code }
    }

    pub fn shape_mismatch(detail: impl Into<String>) -> Self {
        AppError::ShapeMismatch {
            detail: detail.into(),
        }
    }

    pub fn unclassified(detail: impl Into<String>) -> Self {
        AppError::Unclassified {
            detail: detail.into(),
        }
    }

    /// Human-readable description, safe to display.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Status code for `ServerResponseFailure`, `None` for everything else.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::ServerResponseFailure { status_code } => Some(*status_code),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            AppError::TransportFailure { detail }
            | AppError::ShapeMismatch { detail }
            | AppError::Unclassified { detail } => Some(detail),
            AppError::ServerResponseFailure { .. } => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::shape_mismatch(err.to_string())
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
