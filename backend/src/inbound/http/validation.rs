//! Shared validation helpers for inbound HTTP adapters.
//!
//! Extractor failures (malformed JSON bodies, non-numeric path segments) and
//! mapper rejections all surface as [`Error::invalid_request`] so clients see
//! a single 400 error envelope shape.

use actix_web::{HttpRequest, error::JsonPayloadError, error::PathError, web};
use tracing::debug;

use crate::domain::{Error, StudentValidationError};

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    Error::invalid_request(format!("missing required field: {}", field.as_str()))
}

impl From<StudentValidationError> for Error {
    fn from(err: StudentValidationError) -> Self {
        Error::invalid_request(err.to_string())
    }
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = req.path(), error = %err, "rejected request body");
    Error::invalid_request(err.to_string()).into()
}

fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = req.path(), error = %err, "rejected path parameters");
    Error::invalid_request(err.to_string()).into()
}

/// JSON extractor configuration routing failures into error envelopes.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// Path extractor configuration routing failures into error envelopes.
#[must_use]
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error_handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use actix_web::test::TestRequest;
    use rstest::rstest;

    #[rstest]
    fn missing_field_names_the_field() {
        let err = missing_field_error(FieldName::new("id"));
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), "missing required field: id");
    }

    #[rstest]
    #[case(StudentValidationError::EmptyFirstName, "firstName must not be empty")]
    #[case(StudentValidationError::NegativeAge, "age must not be negative")]
    fn validation_failures_are_invalid_requests(
        #[case] source: StudentValidationError,
        #[case] message: &str,
    ) {
        let err = Error::from(source);
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), message);
    }

    #[rstest]
    fn json_errors_become_bad_requests() {
        let req = TestRequest::default().to_http_request();
        let err = json_error_handler(JsonPayloadError::ContentType, &req);
        assert_eq!(
            err.error_response().status(),
            actix_web::http::StatusCode::BAD_REQUEST
        );
    }
}
