//! REST API routes

pub mod games;
pub mod populate;

// Re-export all route handlers
pub use games::*;
pub use populate::*;
