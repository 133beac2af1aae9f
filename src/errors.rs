use axum::http::StatusCode;
use thiserror::Error;

/// Failures of the streak engine. All of them are deterministic in their input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid log date '{input}': {reason}")]
    Parse { input: String, reason: String },
}

impl EngineError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Raised while loading an achievement catalog, never during evaluation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("achievement '{id}' has unknown threshold kind '{kind}'")]
    UnknownKind { id: String, kind: String },

    #[error("achievement '{id}' threshold must be positive, got {value}")]
    NonPositiveThreshold { id: String, value: i64 },

    #[error("achievement '{id}' threshold {value} is out of range")]
    ThresholdOutOfRange { id: String, value: i64 },

    #[error("achievement id must not be empty")]
    EmptyId,

    #[error("duplicate achievement id '{0}'")]
    DuplicateId(String),

    #[error("catalog is not valid json: {0}")]
    Malformed(String),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
