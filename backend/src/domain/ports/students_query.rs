//! Driving port for student read operations.

use async_trait::async_trait;

use crate::domain::{Student, StudentId, StudentServiceError};

/// Read-side use cases for student records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentsQuery: Send + Sync {
    /// Every stored student in insertion order.
    async fn list_students(&self) -> Result<Vec<Student>, StudentServiceError>;

    /// The student with `id`.
    ///
    /// Fails with [`StudentServiceError::NotExists`] when absent.
    async fn get_student(&self, id: StudentId) -> Result<Student, StudentServiceError>;
}
