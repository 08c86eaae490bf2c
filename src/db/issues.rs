use super::db::{Db, StoreKind};
use super::Outcome;
use crate::libs::config::Config;
use crate::libs::error::{StoreError, StoreResult};
use crate::libs::formatter::parse_date;
use crate::libs::issue::{decode_tags, encode_tags, Issue, IssueUpdate, NewIssue};
use crate::libs::messages::Message;
use crate::msg_debug;
use chrono::NaiveDate;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, ToSql};
use std::path::Path;

const ISSUE_COLUMNS: &str =
    "id, project_id, type, title, description, priority, status, assigned_to, created_date, due_date, tags";
const ORDER_ISSUES: &str = "ORDER BY priority DESC, created_date DESC, id DESC";
const UNRESOLVED: &str = "LOWER(status) NOT IN ('closed', 'done', 'completed')";

const INSERT_ISSUE: &str = "INSERT INTO issues
    (project_id, type, title, description, priority, status, assigned_to, created_date, due_date, tags)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, datetime(CURRENT_TIMESTAMP, 'localtime'), ?8, ?9)";
const PROJECT_EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1)";
const ISSUE_EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM issues WHERE id = ?1)";
const TOUCH_ISSUE_PROJECT: &str = "UPDATE projects SET last_updated = datetime(CURRENT_TIMESTAMP, 'localtime')
    WHERE id = (SELECT project_id FROM issues WHERE id = ?1)";
const DELETE_ISSUE_COMMENTS: &str = "DELETE FROM comments WHERE issue_id = ?1";
const DELETE_ISSUE: &str = "DELETE FROM issues WHERE id = ?1";
const CREATED_PER_DAY: &str = "SELECT date(created_date) AS day, COUNT(*) FROM issues
    WHERE date(created_date) >= date(?1) AND date(created_date) <= date(?2)
    GROUP BY day ORDER BY day";

pub struct Issues {
    conn: Connection,
}

impl Issues {
    pub fn new(config: &Config) -> StoreResult<Self> {
        Self::open(&config.buildit_db)
    }

    pub fn open(path: &Path) -> StoreResult<Self> {
        let db = Db::open(path, StoreKind::Tracker)?;
        Ok(Self { conn: db.conn })
    }

    /// Inserts an issue under an existing project and returns its id.
    ///
    /// Fails with [`StoreError::MissingParent`] when the project does not
    /// exist. Priority, type and status are stored as given.
    pub fn add(&mut self, issue: &NewIssue) -> StoreResult<i64> {
        let project_exists: bool = self.conn.query_row(PROJECT_EXISTS, params![issue.project_id], |row| row.get(0))?;
        if !project_exists {
            return Err(StoreError::MissingParent {
                entity: "project",
                id: issue.project_id,
            });
        }

        self.conn.execute(
            INSERT_ISSUE,
            params![
                issue.project_id,
                issue.kind,
                issue.title,
                issue.description,
                issue.priority,
                issue.status,
                issue.assigned_to,
                issue.due_date,
                encode_tags(&issue.tags),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get(&self, id: i64) -> StoreResult<Option<Issue>> {
        let sql = format!("SELECT {} FROM issues WHERE id = ?1", ISSUE_COLUMNS);
        self.conn.query_row(&sql, params![id], map_issue).optional().map_err(Into::into)
    }

    pub fn exists(&self, id: i64) -> StoreResult<bool> {
        Ok(self.conn.query_row(ISSUE_EXISTS, params![id], |row| row.get(0))?)
    }

    /// Issues of one project, or of every project when `project_id` is
    /// `None`. Highest priority first, newest first within a priority.
    pub fn list(&self, project_id: Option<i64>) -> StoreResult<Vec<Issue>> {
        let issues = match project_id {
            Some(project_id) => {
                let sql = format!("SELECT {} FROM issues WHERE project_id = ?1 {}", ISSUE_COLUMNS, ORDER_ISSUES);
                let mut stmt = self.conn.prepare(&sql)?;
                let rows = stmt.query_map(params![project_id], map_issue)?.collect::<Result<Vec<_>, _>>()?;
                rows
            }
            None => {
                let sql = format!("SELECT {} FROM issues {}", ISSUE_COLUMNS, ORDER_ISSUES);
                let mut stmt = self.conn.prepare(&sql)?;
                let rows = stmt.query_map([], map_issue)?.collect::<Result<Vec<_>, _>>()?;
                rows
            }
        };
        Ok(issues)
    }

    /// Writes the fields set in `update` and refreshes the owning project's
    /// `last_updated`. An empty update writes nothing.
    pub fn update(&mut self, id: i64, update: &IssueUpdate) -> StoreResult<Outcome> {
        if update.is_empty() {
            return Ok(if self.exists(id)? { Outcome::Applied } else { Outcome::NotFound });
        }

        let tags = update.tags.as_deref().map(encode_tags);
        let mut assignments: Vec<String> = Vec::new();
        let mut values: Vec<&dyn ToSql> = Vec::new();

        if let Some(kind) = &update.kind {
            values.push(kind);
            assignments.push(format!("type = ?{}", values.len()));
        }
        if let Some(title) = &update.title {
            values.push(title);
            assignments.push(format!("title = ?{}", values.len()));
        }
        if let Some(description) = &update.description {
            values.push(description);
            assignments.push(format!("description = ?{}", values.len()));
        }
        if let Some(priority) = &update.priority {
            values.push(priority);
            assignments.push(format!("priority = ?{}", values.len()));
        }
        if let Some(status) = &update.status {
            values.push(status);
            assignments.push(format!("status = ?{}", values.len()));
        }
        if let Some(assigned_to) = &update.assigned_to {
            values.push(assigned_to);
            assignments.push(format!("assigned_to = ?{}", values.len()));
        }
        if let Some(due_date) = &update.due_date {
            values.push(due_date);
            assignments.push(format!("due_date = ?{}", values.len()));
        }
        if let Some(tags) = &tags {
            values.push(tags);
            assignments.push(format!("tags = ?{}", values.len()));
        }
        values.push(&id);

        let sql = format!("UPDATE issues SET {} WHERE id = ?{}", assignments.join(", "), values.len());

        let tx = self.conn.transaction()?;
        let affected = tx.execute(&sql, params_from_iter(values))?;
        tx.execute(TOUCH_ISSUE_PROJECT, params![id])?;
        tx.commit()?;

        Ok(Outcome::from_affected(affected))
    }

    pub fn set_status(&mut self, id: i64, status: &str) -> StoreResult<Outcome> {
        self.update(
            id,
            &IssueUpdate {
                status: Some(status.to_string()),
                ..Default::default()
            },
        )
    }

    /// Deletes an issue and its comments in one transaction.
    pub fn delete(&mut self, id: i64) -> StoreResult<Outcome> {
        let tx = self.conn.transaction()?;
        let comments = tx.execute(DELETE_ISSUE_COMMENTS, params![id])?;
        let affected = tx.execute(DELETE_ISSUE, params![id])?;
        tx.commit()?;

        msg_debug!(Message::IssueCascadeDeleted { id, comments });
        Ok(Outcome::from_affected(affected))
    }

    /// Unresolved issues across all projects.
    pub fn count_open(&self) -> StoreResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM issues WHERE {}", UNRESOLVED);
        Ok(self.conn.query_row(&sql, [], |row| row.get(0))?)
    }

    /// Unresolved issues at or above `priority`.
    pub fn count_critical(&self, priority: i32) -> StoreResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM issues WHERE priority >= ?1 AND {}", UNRESOLVED);
        Ok(self.conn.query_row(&sql, params![priority], |row| row.get(0))?)
    }

    pub fn created_per_day(&self, from: NaiveDate, to: NaiveDate) -> StoreResult<Vec<(NaiveDate, i64)>> {
        let mut stmt = self.conn.prepare(CREATED_PER_DAY)?;
        let days = stmt
            .query_map(params![from, to], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(days)
    }

    /// The most recently created issues, newest first.
    pub fn recent(&self, limit: usize) -> StoreResult<Vec<Issue>> {
        let sql = format!(
            "SELECT {} FROM issues ORDER BY created_date DESC, id DESC LIMIT ?1",
            ISSUE_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let issues = stmt.query_map(params![limit as i64], map_issue)?.collect::<Result<Vec<_>, _>>()?;
        Ok(issues)
    }
}

/// Unparseable due dates read back as none; missing or malformed tags as
/// an empty list.
pub(crate) fn map_issue(row: &Row) -> rusqlite::Result<Issue> {
    Ok(Issue {
        id: row.get(0)?,
        project_id: row.get::<_, Option<i64>>(1)?.unwrap_or_default(),
        kind: row.get(2)?,
        title: row.get(3)?,
        description: row.get(4)?,
        priority: row.get(5)?,
        status: row.get(6)?,
        assigned_to: row.get(7)?,
        created_date: row.get(8)?,
        due_date: row.get::<_, Option<String>>(9)?.as_deref().and_then(parse_date),
        tags: decode_tags(row.get::<_, Option<String>>(10)?.as_deref()),
    })
}

pub(crate) fn select_issues_sql(filter: &str) -> String {
    format!("SELECT {} FROM issues {} {}", ISSUE_COLUMNS, filter, ORDER_ISSUES)
}
