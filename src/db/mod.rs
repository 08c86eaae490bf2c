//! Storage layer for the JTBD tools.
//!
//! Two independent SQLite files back the suite:
//!
//! - the **todo store** (`todos` table), opened with [`StoreKind::Todo`](db::StoreKind)
//! - the **tracker store** (`projects`, `issues`, `comments`, `tags`), opened
//!   with [`StoreKind::Tracker`](db::StoreKind)
//!
//! Each table has its own handle type owning a connection. Handles are built
//! from the [`Config`](crate::libs::config::Config) passed down from `main`,
//! or directly from a path in tests.
//!
//! ## Usage
//!
//! ```rust
//! use jtbd::db::{issues::Issues, projects::Projects, Outcome};
//! use jtbd::libs::issue::NewIssue;
//! use jtbd::libs::project::NewProject;
//!
//! let dir = tempfile::tempdir()?;
//! let path = dir.path().join("buildit.db");
//!
//! let mut projects = Projects::open(&path)?;
//! let project_id = projects.add(&NewProject::new("Website"))?;
//!
//! let mut issues = Issues::open(&path)?;
//! issues.add(&NewIssue::new(project_id, "Broken footer link"))?;
//!
//! assert_eq!(projects.delete(project_id)?, Outcome::Applied);
//! assert!(issues.list(Some(project_id))?.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Conventions
//!
//! - Mutations addressed by id return [`Outcome`]; a missing row is not an error.
//! - Multi-statement writes (cascade deletes, replace-all imports) run inside
//!   one transaction.
//! - Every ordering ends with `id DESC`, so rows sharing a timestamp come back
//!   newest-insert first.

pub mod comments;
pub mod db;
pub mod issues;
pub mod migrations;
pub mod projects;
pub mod tags;
pub mod todos;
pub mod tracker;

/// Result of a mutation that addresses a single row by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The row existed and the change was written.
    Applied,
    /// No row with that id exists. Nothing was written.
    NotFound,
}

impl Outcome {
    pub fn from_affected(rows: usize) -> Self {
        if rows > 0 {
            Outcome::Applied
        } else {
            Outcome::NotFound
        }
    }

    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}
