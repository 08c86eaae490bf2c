//! Aggregate statistics for the dashboard.
//!
//! Everything here is recomputed from the stores on every call. Functions
//! take `today` explicitly; callers pass `Local::now().date_naive()`.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use jtbd::db::todos::Todos;
//! use jtbd::libs::stats::TodoStats;
//! use jtbd::libs::todo::NewTodo;
//!
//! let dir = tempfile::tempdir()?;
//! let mut todos = Todos::open(&dir.path().join("todo.db"))?;
//! let id = todos.add(&NewTodo::new("Renew passport"))?;
//! todos.add(&NewTodo::new("Book dentist"))?;
//! todos.toggle(id)?;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let stats = TodoStats::collect(&todos, today)?;
//! assert_eq!(stats.completion_rate, 50.0);
//! assert_eq!(stats.activity.len(), 7);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::db::issues::Issues;
use crate::db::projects::{ProjectBreakdown, Projects};
use crate::db::todos::Todos;
use crate::libs::error::StoreResult;
use crate::libs::issue::CRITICAL_PRIORITY;
use crate::libs::todo::Todo;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::fmt;

pub const ACTIVITY_DAYS: i64 = 7;
pub const HIGH_PRIORITY_THRESHOLD: i32 = 2;
pub const UPCOMING_LIMIT: usize = 5;
pub const DEFAULT_BREAKDOWN_LIMIT: usize = 5;
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Creation events on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityDay {
    pub date: NaiveDate,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodoStats {
    pub total: i64,
    pub completed: i64,
    /// Percentage in `0.0..=100.0`; `0.0` for an empty store.
    pub completion_rate: f64,
    pub due_today: i64,
    pub high_priority: i64,
    /// Oldest day first, ending with `today`.
    pub activity: Vec<ActivityDay>,
    pub upcoming: Vec<Todo>,
}

impl TodoStats {
    pub fn collect(todos: &Todos, today: NaiveDate) -> StoreResult<Self> {
        let total = todos.count()?;
        let completed = todos.count_completed()?;
        let start = activity_start(today);

        Ok(Self {
            total,
            completed,
            completion_rate: completion_rate(completed, total),
            due_today: todos.count_due_on(today)?,
            high_priority: todos.count_with_min_priority(HIGH_PRIORITY_THRESHOLD)?,
            activity: fill_activity(start, &todos.created_per_day(start, today)?),
            upcoming: todos.upcoming(today, UPCOMING_LIMIT)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerStats {
    pub total_projects: i64,
    pub active_projects: i64,
    pub open_issues: i64,
    pub critical_issues: i64,
    pub activity: Vec<ActivityDay>,
    pub breakdown: Vec<ProjectBreakdown>,
}

impl TrackerStats {
    /// `top_n` limits the per-project breakdown; the dashboard uses
    /// [`DEFAULT_BREAKDOWN_LIMIT`].
    pub fn collect(projects: &Projects, issues: &Issues, today: NaiveDate, top_n: usize) -> StoreResult<Self> {
        let start = activity_start(today);

        Ok(Self {
            total_projects: projects.count()?,
            active_projects: projects.count_active()?,
            open_issues: issues.count_open()?,
            critical_issues: issues.count_critical(CRITICAL_PRIORITY)?,
            activity: fill_activity(start, &issues.created_per_day(start, today)?),
            breakdown: projects.active_breakdown(CRITICAL_PRIORITY, top_n)?,
        })
    }
}

pub fn completion_rate(completed: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    completed as f64 / total as f64 * 100.0
}

fn activity_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(ACTIVITY_DAYS - 1)
}

/// Expands sparse per-day counts into one bucket per day starting at
/// `start`, zero-filling days with no entry.
pub fn fill_activity(start: NaiveDate, counts: &[(NaiveDate, i64)]) -> Vec<ActivityDay> {
    (0..ACTIVITY_DAYS)
        .map(|offset| {
            let date = start + Duration::days(offset);
            let count = counts
                .iter()
                .find(|(day, _)| *day == date)
                .map(|(_, count)| *count)
                .unwrap_or(0);
            ActivityDay { date, count }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivitySource {
    Todo,
    Issue,
}

impl fmt::Display for ActivitySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivitySource::Todo => write!(f, "Todo"),
            ActivitySource::Issue => write!(f, "Issue"),
        }
    }
}

/// One row of the dashboard's recent-activity table.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub time: NaiveDateTime,
    pub source: ActivitySource,
    pub description: String,
    pub status: String,
}

/// The latest `limit` creations across todos and issues, newest first.
pub fn recent_activity(todos: &Todos, issues: &Issues, limit: usize) -> StoreResult<Vec<ActivityEntry>> {
    let mut entries: Vec<ActivityEntry> = todos
        .recent(limit)?
        .into_iter()
        .map(|todo| ActivityEntry {
            time: todo.created_at,
            source: ActivitySource::Todo,
            description: todo.title,
            status: if todo.completed { "Completed" } else { "Pending" }.to_string(),
        })
        .chain(issues.recent(limit)?.into_iter().map(|issue| ActivityEntry {
            time: issue.created_date,
            source: ActivitySource::Issue,
            description: issue.title,
            status: issue.status,
        }))
        .collect();

    // Stable sort keeps each source's own newest-first order on equal times.
    entries.sort_by(|a, b| b.time.cmp(&a.time));
    entries.truncate(limit);
    Ok(entries)
}
