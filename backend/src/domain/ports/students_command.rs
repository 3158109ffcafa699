//! Driving port for student mutations.

use async_trait::async_trait;

use crate::domain::{Student, StudentId, StudentServiceError};

/// Write-side use cases for student records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentsCommand: Send + Sync {
    /// Store a new student and return it unchanged.
    ///
    /// Fails with [`StudentServiceError::AlreadyExists`] when the identifier
    /// is taken.
    async fn add_student(&self, student: Student) -> Result<Student, StudentServiceError>;

    /// Replace the names and age of an existing student.
    ///
    /// The body identifier must exist ([`StudentServiceError::NotExists`])
    /// and must equal `path_id` ([`StudentServiceError::IdMismatch`]); the
    /// existence check runs first.
    async fn update_student(
        &self,
        student: Student,
        path_id: StudentId,
    ) -> Result<Student, StudentServiceError>;

    /// Remove a student.
    ///
    /// Fails with [`StudentServiceError::NotExists`] when absent.
    async fn delete_student(&self, id: StudentId) -> Result<(), StudentServiceError>;
}
