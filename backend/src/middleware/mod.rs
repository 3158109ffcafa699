//! Request middleware.
//!
//! Purpose: define middleware components for request lifecycle concerns:
//! trace identifiers and response envelopes.

pub mod envelope;
pub mod trace;

pub use envelope::ResponseEnvelope;
pub use trace::Trace;
