//! HTTP request handlers organized by domain

pub mod recommendations;
pub mod todos;

// Re-export all handlers for use in router
pub use recommendations::*;
pub use todos::*;
