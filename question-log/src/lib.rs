//! Question log crate: append-only persistence for classified questions.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – QuestionRecord, CategoryCount, QuestionStats
//! - [`question_repo`] – QuestionRepository (SQLite)

mod error;
mod models;
mod question_repo;


pub use error::StorageError;
pub use models::{CategoryCount, QuestionRecord, QuestionStats};
pub use question_repo::QuestionRepository;
