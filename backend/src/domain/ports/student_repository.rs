//! Port for student record storage.
//!
//! The [`StudentRepository`] trait is the record store contract. Each call is
//! a single primitive operation; business rules and the serialisation of
//! check-then-act sequences live in the domain service.

use async_trait::async_trait;

use crate::domain::{Student, StudentId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by student repository adapters.
    pub enum StudentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "student repository connection failed: {message}",
    }
}

/// Ordered store of student records keyed by identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Return every record in insertion order.
    async fn list_all(&self) -> Result<Vec<Student>, StudentRepositoryError>;

    /// Fetch the record with `id`, if stored.
    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StudentRepositoryError>;

    /// Append a record.
    ///
    /// Adapters do not check for duplicates; callers must do so first.
    async fn insert(&self, student: &Student) -> Result<(), StudentRepositoryError>;

    /// Overwrite the mutable fields of the record sharing `changes.id()`.
    ///
    /// Returns the stored record after the update, or `None` when no record
    /// matches.
    async fn update(&self, changes: &Student) -> Result<Option<Student>, StudentRepositoryError>;

    /// Remove the record with `id`, reporting whether one was removed.
    async fn remove(&self, id: StudentId) -> Result<bool, StudentRepositoryError>;
}
