//! Whole-store operations on the tracker file: storage-level search and the
//! replace-all backup round trip.

use super::comments::map_comment;
use super::db::{Db, StoreKind};
use super::issues::{map_issue, select_issues_sql};
use super::projects::{map_project, select_projects_sql};
use super::tags::map_tag;
use crate::libs::backup::TrackerBackup;
use crate::libs::config::Config;
use crate::libs::error::StoreResult;
use crate::libs::formatter::format_timestamp;
use crate::libs::issue::{encode_tags, Issue};
use crate::libs::messages::Message;
use crate::libs::project::Project;
use crate::msg_debug;
use rusqlite::{params, Connection};
use std::path::Path;

const DELETE_ALL: [&str; 4] = [
    "DELETE FROM comments",
    "DELETE FROM issues",
    "DELETE FROM projects",
    "DELETE FROM tags",
];
const IMPORT_PROJECT: &str = "INSERT INTO projects (id, name, description, version, status, created_date, last_updated)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const IMPORT_ISSUE: &str = "INSERT INTO issues
    (id, project_id, type, title, description, priority, status, assigned_to, created_date, due_date, tags)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";
const IMPORT_COMMENT: &str = "INSERT INTO comments (id, issue_id, content, author, created_date)
    VALUES (?1, ?2, ?3, ?4, ?5)";
const IMPORT_TAG: &str = "INSERT INTO tags (id, name, color) VALUES (?1, ?2, ?3)";

/// Matches of a storage-level tracker search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerMatches {
    pub projects: Vec<Project>,
    pub issues: Vec<Issue>,
}

impl TrackerMatches {
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.issues.is_empty()
    }
}

pub struct Tracker {
    conn: Connection,
}

impl Tracker {
    pub fn new(config: &Config) -> StoreResult<Self> {
        Self::open(&config.buildit_db)
    }

    pub fn open(path: &Path) -> StoreResult<Self> {
        let db = Db::open(path, StoreKind::Tracker)?;
        Ok(Self { conn: db.conn })
    }

    /// `LIKE` search over project name and description, and issue title,
    /// description and tags. An empty query matches everything.
    pub fn search(&self, query: &str) -> StoreResult<TrackerMatches> {
        let pattern = format!("%{}%", query);

        let mut stmt = self
            .conn
            .prepare(&select_projects_sql("WHERE name LIKE ?1 OR description LIKE ?1"))?;
        let projects = stmt.query_map(params![pattern], map_project)?.collect::<Result<Vec<_>, _>>()?;

        let mut stmt = self.conn.prepare(&select_issues_sql(
            "WHERE title LIKE ?1 OR description LIKE ?1 OR tags LIKE ?1",
        ))?;
        let issues = stmt.query_map(params![pattern], map_issue)?.collect::<Result<Vec<_>, _>>()?;

        Ok(TrackerMatches { projects, issues })
    }

    /// Snapshot of all four tables, each in id order.
    pub fn export(&self) -> StoreResult<TrackerBackup> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, description, version, status, created_date, last_updated FROM projects ORDER BY id")?;
        let projects = stmt.query_map([], map_project)?.collect::<Result<Vec<_>, _>>()?;

        let mut stmt = self.conn.prepare(
            "SELECT id, project_id, type, title, description, priority, status, assigned_to, created_date, due_date, tags
             FROM issues ORDER BY id",
        )?;
        let issues = stmt.query_map([], map_issue)?.collect::<Result<Vec<_>, _>>()?;

        let mut stmt = self
            .conn
            .prepare("SELECT id, issue_id, content, author, created_date FROM comments ORDER BY id")?;
        let comments = stmt.query_map([], map_comment)?.collect::<Result<Vec<_>, _>>()?;

        let mut stmt = self.conn.prepare("SELECT id, name, color FROM tags ORDER BY id")?;
        let tags = stmt.query_map([], map_tag)?.collect::<Result<Vec<_>, _>>()?;

        Ok(TrackerBackup {
            projects,
            issues,
            comments,
            tags,
        })
    }

    /// Replaces all four tables with the document's rows, keeping their ids.
    ///
    /// Runs in a single transaction: on any failure the store keeps its
    /// previous contents and the error is returned.
    pub fn import(&mut self, backup: &TrackerBackup) -> StoreResult<()> {
        let tx = self.conn.transaction()?;
        for statement in DELETE_ALL {
            tx.execute(statement, [])?;
        }

        {
            let mut stmt = tx.prepare(IMPORT_PROJECT)?;
            for project in &backup.projects {
                stmt.execute(params![
                    project.id,
                    project.name,
                    project.description,
                    project.version,
                    project.status,
                    format_timestamp(&project.created_date),
                    format_timestamp(&project.last_updated),
                ])?;
            }

            let mut stmt = tx.prepare(IMPORT_ISSUE)?;
            for issue in &backup.issues {
                stmt.execute(params![
                    issue.id,
                    issue.project_id,
                    issue.kind,
                    issue.title,
                    issue.description,
                    issue.priority,
                    issue.status,
                    issue.assigned_to,
                    format_timestamp(&issue.created_date),
                    issue.due_date,
                    encode_tags(&issue.tags),
                ])?;
            }

            let mut stmt = tx.prepare(IMPORT_COMMENT)?;
            for comment in &backup.comments {
                stmt.execute(params![
                    comment.id,
                    comment.issue_id,
                    comment.content,
                    comment.author,
                    format_timestamp(&comment.created_date),
                ])?;
            }

            let mut stmt = tx.prepare(IMPORT_TAG)?;
            for tag in &backup.tags {
                stmt.execute(params![tag.id, tag.name, tag.color])?;
            }
        }
        tx.commit()?;

        msg_debug!(Message::TrackerImported {
            projects: backup.projects.len(),
            issues: backup.issues.len(),
            comments: backup.comments.len(),
            tags: backup.tags.len(),
        });
        Ok(())
    }
}
