//! Tend Core Library
//!
//! Shared functionality for the Tend task manager:
//! - Database access and migrations
//! - Todo CRUD operations
//! - Recommendation engine (completion stats, keyword ranking, heuristic rules)

pub mod db;
pub mod error;
pub mod insights;
pub mod models;

pub use db::Database;
pub use error::{Error, Result};
pub use insights::{RecommendationEngine, Report, ReportStats};
pub use models::{NewTodo, Todo, UpdateTodo};
