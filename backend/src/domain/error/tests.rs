//! Tests for domain errors and their mapping onto error codes.

use super::*;
use rstest::rstest;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid uuid");
    let error = TraceId::scope(trace_id, async { Error::conflict("taken") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
#[case(
    StudentServiceError::AlreadyExists { id: StudentId::new(2) },
    ErrorCode::Conflict,
    "Student with id 2 already exists"
)]
#[case(
    StudentServiceError::NotExists { id: StudentId::new(99) },
    ErrorCode::NotFound,
    "Student with id 99 does not exist"
)]
#[case(
    StudentServiceError::IdMismatch { path_id: StudentId::new(3), body_id: StudentId::new(2) },
    ErrorCode::InvalidRequest,
    "Student with id 3 mismatch with body id 2"
)]
#[case(
    StudentServiceError::Repository(StudentRepositoryError::connection("disk on fire")),
    ErrorCode::InternalError,
    "student repository connection failed: disk on fire"
)]
fn service_errors_map_to_codes(
    #[case] source: StudentServiceError,
    #[case] code: ErrorCode,
    #[case] message: &str,
) {
    let error = Error::from(source);
    assert_eq!(error.code(), code);
    assert_eq!(error.message(), message);
}

#[rstest]
fn error_code_serialises_as_snake_case() {
    let value = serde_json::to_value(ErrorCode::InvalidRequest).expect("serialise code");
    assert_eq!(value, serde_json::json!("invalid_request"));
}
