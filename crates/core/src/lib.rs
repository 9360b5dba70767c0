//! Shared data model for the gamedex service
//!
//! Types that cross the boundary between the HTTP surface and the
//! persistence layer.

pub mod models;

pub use models::*;
