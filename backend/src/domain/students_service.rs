//! Student record domain service.
//!
//! Implements the driving ports on top of a [`StudentRepository`]. Mutations
//! hold a single service-wide lock from the existence check through the
//! write so concurrent requests cannot interleave between the two.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::ports::{StudentRepository, StudentsCommand, StudentsQuery};
use crate::domain::{Student, StudentId, StudentServiceError};

/// Student service implementing [`StudentsQuery`] and [`StudentsCommand`].
pub struct StudentsService<R> {
    repository: Arc<R>,
    write_lock: Mutex<()>,
}

impl<R> StudentsService<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }
}

impl<R> StudentsService<R>
where
    R: StudentRepository,
{
    async fn require_existing(&self, id: StudentId) -> Result<Student, StudentServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(StudentServiceError::NotExists { id })
    }
}

#[async_trait]
impl<R> StudentsQuery for StudentsService<R>
where
    R: StudentRepository,
{
    async fn list_students(&self) -> Result<Vec<Student>, StudentServiceError> {
        Ok(self.repository.list_all().await?)
    }

    async fn get_student(&self, id: StudentId) -> Result<Student, StudentServiceError> {
        self.require_existing(id).await
    }
}

#[async_trait]
impl<R> StudentsCommand for StudentsService<R>
where
    R: StudentRepository,
{
    async fn add_student(&self, student: Student) -> Result<Student, StudentServiceError> {
        let _guard = self.write_lock.lock().await;
        let id = student.id();
        if self.repository.find_by_id(id).await?.is_some() {
            debug!(student_id = %id, "rejected add: id already present");
            return Err(StudentServiceError::AlreadyExists { id });
        }
        self.repository.insert(&student).await?;
        debug!(student_id = %id, "student added");
        Ok(student)
    }

    async fn update_student(
        &self,
        student: Student,
        path_id: StudentId,
    ) -> Result<Student, StudentServiceError> {
        let _guard = self.write_lock.lock().await;
        let body_id = student.id();
        self.require_existing(body_id).await?;
        if body_id != path_id {
            debug!(%path_id, %body_id, "rejected update: id mismatch");
            return Err(StudentServiceError::IdMismatch { path_id, body_id });
        }
        let updated = self
            .repository
            .update(&student)
            .await?
            .ok_or(StudentServiceError::NotExists { id: body_id })?;
        debug!(student_id = %body_id, "student updated");
        Ok(updated)
    }

    async fn delete_student(&self, id: StudentId) -> Result<(), StudentServiceError> {
        let _guard = self.write_lock.lock().await;
        self.require_existing(id).await?;
        if !self.repository.remove(id).await? {
            return Err(StudentServiceError::NotExists { id });
        }
        debug!(student_id = %id, "student deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "students_service_tests.rs"]
mod tests;
