//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{StudentsCommand, StudentsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub students: Arc<dyn StudentsCommand>,
    pub students_query: Arc<dyn StudentsQuery>,
}

impl HttpState {
    /// Construct state from the student ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use student_records::domain::StudentsService;
    /// use student_records::inbound::http::state::HttpState;
    /// use student_records::outbound::memory::InMemoryStudentRepository;
    ///
    /// let service = Arc::new(StudentsService::new(Arc::new(InMemoryStudentRepository::new())));
    /// let state = HttpState::new(service.clone(), service);
    /// let _query = state.students_query.clone();
    /// ```
    pub fn new(students: Arc<dyn StudentsCommand>, students_query: Arc<dyn StudentsQuery>) -> Self {
        Self {
            students,
            students_query,
        }
    }
}
