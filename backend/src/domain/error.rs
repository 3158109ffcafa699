//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! statuses and response envelopes.

use serde::{Deserialize, Serialize};

use crate::domain::TraceId;
use crate::domain::ports::StudentRepositoryError;
use crate::domain::StudentId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// The request conflicts with the current state of a resource.
    Conflict,
    /// An unexpected error occurred inside the service.
    InternalError,
}

/// Error payload handed to inbound adapters.
///
/// Captures the trace identifier in scope at construction time so the
/// adapter can correlate the response with request logs.
///
/// # Examples
/// ```
/// use student_records::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("missing");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "missing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
}

impl Error {
    /// Create a new error, capturing the current trace identifier if any.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to clients.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Correlation identifier captured when the error was raised.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach a trace identifier to the error.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

/// Business-rule violations raised by the student service.
///
/// The set is closed: adapters match on it exhaustively to pick a status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StudentServiceError {
    /// A record with the same identifier is already stored.
    #[error("Student with id {id} already exists")]
    AlreadyExists { id: StudentId },
    /// No record carries the identifier.
    #[error("Student with id {id} does not exist")]
    NotExists { id: StudentId },
    /// The identifier in the request path differs from the body identifier.
    #[error("Student with id {path_id} mismatch with body id {body_id}")]
    IdMismatch {
        path_id: StudentId,
        body_id: StudentId,
    },
    /// The backing store failed.
    #[error(transparent)]
    Repository(#[from] StudentRepositoryError),
}

impl From<StudentServiceError> for Error {
    fn from(err: StudentServiceError) -> Self {
        let message = err.to_string();
        match err {
            StudentServiceError::AlreadyExists { .. } => Self::conflict(message),
            StudentServiceError::NotExists { .. } => Self::not_found(message),
            StudentServiceError::IdMismatch { .. } => Self::invalid_request(message),
            StudentServiceError::Repository(_) => Self::internal(message),
        }
    }
}

#[cfg(test)]
mod tests;
