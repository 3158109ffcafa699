//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local student store backing the repository port.
//!
//! Adapters are thin translators between domain types and their storage
//! representation. They contain no business logic.

pub mod memory;
