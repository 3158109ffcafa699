//! Domain primitives, errors, ports and services.
//!
//! Purpose: define the student record model and the business rules applied
//! to it, independent of HTTP or storage concerns.
//!
//! Public surface:
//! - `Student` / `StudentId` — the record and its caller-assigned identifier.
//! - `StudentServiceError` — closed set of business-rule violations.
//! - `Error` / `ErrorCode` — adapter-facing error payload.
//! - `StudentsService` — implementation of the driving ports.

pub mod error;
pub mod ports;
pub mod student;
pub mod students_service;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, StudentServiceError};
pub use self::student::{Student, StudentId, StudentValidationError, demo_students};
pub use self::students_service::StudentsService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
