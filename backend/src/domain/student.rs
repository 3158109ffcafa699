//! Student record model.

use std::fmt;

/// Validation errors returned by [`Student::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentValidationError {
    EmptyFirstName,
    EmptyLastName,
    NonFiniteAge,
    NegativeAge,
}

impl fmt::Display for StudentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFirstName => write!(f, "firstName must not be empty"),
            Self::EmptyLastName => write!(f, "lastName must not be empty"),
            Self::NonFiniteAge => write!(f, "age must be a finite number"),
            Self::NegativeAge => write!(f, "age must not be negative"),
        }
    }
}

impl std::error::Error for StudentValidationError {}

/// Caller-assigned student identifier.
///
/// Identifiers are never generated by the service; the client picks them on
/// creation and they stay fixed for the record's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(i64);

impl StudentId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for StudentId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A student record.
///
/// ## Invariants
/// - `first_name` and `last_name` are non-blank.
/// - `age` is finite and non-negative. Fractional ages such as `21.3` are
///   allowed.
///
/// # Examples
/// ```
/// use student_records::domain::{Student, StudentId};
///
/// let student = Student::try_new(StudentId::new(1), "Alice", "Moskovitz", 21.3)
///     .expect("valid student");
/// assert_eq!(student.first_name(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: StudentId,
    first_name: String,
    last_name: String,
    age: f64,
}

impl Student {
    /// Validate and construct a student record.
    pub fn try_new(
        id: StudentId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: f64,
    ) -> Result<Self, StudentValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        if first_name.trim().is_empty() {
            return Err(StudentValidationError::EmptyFirstName);
        }
        if last_name.trim().is_empty() {
            return Err(StudentValidationError::EmptyLastName);
        }
        if !age.is_finite() {
            return Err(StudentValidationError::NonFiniteAge);
        }
        if age < 0.0 {
            return Err(StudentValidationError::NegativeAge);
        }
        Ok(Self {
            id,
            first_name,
            last_name,
            age,
        })
    }

    /// Record identifier.
    #[must_use]
    pub fn id(&self) -> StudentId {
        self.id
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn age(&self) -> f64 {
        self.age
    }

    /// Overwrite the mutable fields with those of `changes`.
    ///
    /// The identifier is left untouched even when `changes` carries a
    /// different one.
    pub fn apply_changes(&mut self, changes: &Student) {
        self.first_name.clone_from(&changes.first_name);
        self.last_name.clone_from(&changes.last_name);
        self.age = changes.age;
    }
}

/// The four records a fresh demo store starts with.
///
/// # Errors
/// Returns [`StudentValidationError`] if a seed entry violates the record
/// invariants.
pub fn demo_students() -> Result<Vec<Student>, StudentValidationError> {
    const SEED: [(i64, &str, &str, f64); 4] = [
        (1, "Alice", "Moskovitz", 21.3),
        (2, "Bob", "Smith", 22.3),
        (3, "Charlie", "Brown", 23.3),
        (4, "David", "Miller", 24.3),
    ];

    SEED.into_iter()
        .map(|(id, first_name, last_name, age)| {
            Student::try_new(StudentId::new(id), first_name, last_name, age)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "Smith", 20.0, StudentValidationError::EmptyFirstName)]
    #[case("Bob", "   ", 20.0, StudentValidationError::EmptyLastName)]
    #[case("Bob", "Smith", f64::NAN, StudentValidationError::NonFiniteAge)]
    #[case("Bob", "Smith", f64::INFINITY, StudentValidationError::NonFiniteAge)]
    #[case("Bob", "Smith", -1.5, StudentValidationError::NegativeAge)]
    fn try_new_rejects_invalid_fields(
        #[case] first_name: &str,
        #[case] last_name: &str,
        #[case] age: f64,
        #[case] expected: StudentValidationError,
    ) {
        let result = Student::try_new(StudentId::new(7), first_name, last_name, age);
        assert_eq!(result, Err(expected));
    }

    #[test]
    fn apply_changes_keeps_identifier() {
        let mut stored =
            Student::try_new(StudentId::new(2), "Bob", "Smith", 22.3).expect("valid student");
        let changes =
            Student::try_new(StudentId::new(9), "Bobby", "Smythe", 23.0).expect("valid student");

        stored.apply_changes(&changes);

        assert_eq!(stored.id(), StudentId::new(2));
        assert_eq!(stored.first_name(), "Bobby");
        assert_eq!(stored.last_name(), "Smythe");
        assert_eq!(stored.age(), 23.0);
    }

    #[test]
    fn demo_students_are_ordered_by_id() {
        let students = demo_students().expect("seed data is valid");
        let ids: Vec<i64> = students.iter().map(|s| s.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
