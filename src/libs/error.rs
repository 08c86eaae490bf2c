//! Typed errors for the storage layer and the input validation boundary.
//!
//! Two families of errors are handled at different call sites:
//!
//! - [`ValidationError`] is raised by the form types before anything reaches
//!   a store. The shells print it and keep the form unsubmitted.
//! - [`StoreError`] covers disk, SQLite and document failures. Operations on
//!   ids that no longer exist are *not* errors; they report
//!   [`Outcome::NotFound`](crate::db::Outcome) instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    EmptyField(&'static str),

    #[error("Priority must be between 0 and 5, got {0}")]
    PriorityOutOfRange(i32),

    #[error("Priority must be a whole number, got '{0}'")]
    InvalidPriority(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unknown priority '{0}', expected Low, Medium or High")]
    UnknownPriorityLabel(String),

    #[error("Unknown value '{value}' for {field}")]
    UnknownChoice { field: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot attach to {entity} {id}: it does not exist")]
    MissingParent { entity: &'static str, id: i64 },

    #[error("No backup file found at {}", .0.display())]
    BackupNotFound(PathBuf),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
