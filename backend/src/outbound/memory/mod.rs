//! In-memory student repository.
//!
//! Records live in a `Vec` behind an async read-write lock, preserving
//! insertion order. Contents are lost when the process exits.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{StudentRepository, StudentRepositoryError};
use crate::domain::{Student, StudentId, StudentValidationError, demo_students};

/// Process-local [`StudentRepository`] adapter.
///
/// # Examples
/// ```
/// use student_records::outbound::memory::InMemoryStudentRepository;
///
/// let repo = InMemoryStudentRepository::seeded().expect("seed data is valid");
/// # let _ = repo;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    students: RwLock<Vec<Student>>,
}

impl InMemoryStudentRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `students` in the given order.
    #[must_use]
    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            students: RwLock::new(students),
        }
    }

    /// Create a repository holding the demo records with ids 1 to 4.
    ///
    /// # Errors
    /// Returns [`StudentValidationError`] if the seed data is invalid.
    pub fn seeded() -> Result<Self, StudentValidationError> {
        demo_students().map(Self::with_students)
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn list_all(&self) -> Result<Vec<Student>, StudentRepositoryError> {
        Ok(self.students.read().await.clone())
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StudentRepositoryError> {
        let students = self.students.read().await;
        Ok(students.iter().find(|s| s.id() == id).cloned())
    }

    async fn insert(&self, student: &Student) -> Result<(), StudentRepositoryError> {
        self.students.write().await.push(student.clone());
        Ok(())
    }

    async fn update(&self, changes: &Student) -> Result<Option<Student>, StudentRepositoryError> {
        let mut students = self.students.write().await;
        Ok(students
            .iter_mut()
            .find(|s| s.id() == changes.id())
            .map(|stored| {
                stored.apply_changes(changes);
                stored.clone()
            }))
    }

    async fn remove(&self, id: StudentId) -> Result<bool, StudentRepositoryError> {
        let mut students = self.students.write().await;
        let before = students.len();
        students.retain(|s| s.id() != id);
        Ok(students.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn student(id: i64, first_name: &str, last_name: &str, age: f64) -> Student {
        Student::try_new(StudentId::new(id), first_name, last_name, age).expect("valid student")
    }

    #[fixture]
    fn repo() -> InMemoryStudentRepository {
        InMemoryStudentRepository::seeded().expect("seed data is valid")
    }

    #[rstest]
    #[tokio::test]
    async fn insert_appends_in_order(repo: InMemoryStudentRepository) {
        repo.insert(&student(5, "Eve", "Lee", 19.0))
            .await
            .expect("insert succeeds");

        let ids: Vec<i64> = repo
            .list_all()
            .await
            .expect("list succeeds")
            .iter()
            .map(|s| s.id().get())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    #[tokio::test]
    async fn update_overwrites_fields_of_matching_record(repo: InMemoryStudentRepository) {
        let updated = repo
            .update(&student(3, "Charles", "Brown", 24.0))
            .await
            .expect("update succeeds")
            .expect("record exists");
        assert_eq!(updated.first_name(), "Charles");

        let stored = repo
            .find_by_id(StudentId::new(3))
            .await
            .expect("find succeeds")
            .expect("record exists");
        assert_eq!(stored, updated);
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_unknown_id_changes_nothing(repo: InMemoryStudentRepository) {
        let before = repo.list_all().await.expect("list succeeds");
        let result = repo
            .update(&student(77, "Ghost", "Writer", 40.0))
            .await
            .expect("update succeeds");
        assert!(result.is_none());
        assert_eq!(repo.list_all().await.expect("list succeeds"), before);
    }

    #[rstest]
    #[tokio::test]
    async fn remove_reports_whether_a_record_was_dropped(repo: InMemoryStudentRepository) {
        assert!(repo.remove(StudentId::new(1)).await.expect("remove succeeds"));
        assert!(!repo.remove(StudentId::new(1)).await.expect("remove succeeds"));
        assert_eq!(repo.list_all().await.expect("list succeeds").len(), 3);
    }

    #[tokio::test]
    async fn new_repository_starts_empty() {
        let repo = InMemoryStudentRepository::new();
        assert!(repo.list_all().await.expect("list succeeds").is_empty());
    }
}
