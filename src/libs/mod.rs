//! Library modules shared by the three tools.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data directory, errors, messaging
//! - **Models**: Todos, projects, issues and comments, with their input forms
//! - **Derived Data**: Dashboard statistics, record filtering, backup documents
//! - **User Interface**: Navigation state, formatting and table rendering
//!
//! ## Usage
//!
//! ```rust
//! use jtbd::libs::forms::TodoForm;
//!
//! let form = TodoForm {
//!     title: "Water the plants".into(),
//!     due_date: "2024-06-01".into(),
//!     priority: "2".into(),
//!     ..Default::default()
//! };
//! let todo = form.validate()?;
//! assert_eq!(todo.priority, 2);
//! # Ok::<(), jtbd::libs::error::ValidationError>(())
//! ```

pub mod backup;
pub mod comment;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod forms;
pub mod issue;
pub mod messages;
pub mod nav;
pub mod project;
pub mod search;
pub mod stats;
pub mod todo;
pub mod view;
