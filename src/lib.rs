//! # JTBD - Just Track By Doing
//!
//! A small suite of personal tracking tools sharing one data-access layer:
//! a todo list, a lightweight project/issue tracker and a dashboard that
//! combines statistics from both.
//!
//! ## Features
//!
//! - **Todo Store**: Prioritised todos with due dates and completion tracking
//! - **Tracker Store**: Projects owning issues, issues owning comments, plus a tag registry
//! - **Aggregation**: Completion rates, due-today counts and 7-day activity histograms
//! - **Backup**: Replace-all JSON export and import for both stores
//! - **Navigation**: Pure cursor and drill-in state for the interactive list views
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jtbd::db::todos::Todos;
//! use jtbd::libs::config::Config;
//! use jtbd::libs::todo::NewTodo;
//!
//! let config = Config::load()?;
//! let mut todos = Todos::new(&config)?;
//! todos.add(&NewTodo::new("Write the weekly review"))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod commands;
pub mod db;
pub mod libs;
