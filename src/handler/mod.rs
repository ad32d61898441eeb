//! Request handler module
//!
//! Responsible for request routing dispatch and invoking the hosted function.

pub mod function;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
