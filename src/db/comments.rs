use super::db::{Db, StoreKind};
use crate::libs::comment::{Comment, NewComment};
use crate::libs::config::Config;
use crate::libs::error::{StoreError, StoreResult};
use rusqlite::{params, Connection, Row};
use std::path::Path;

const ISSUE_EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM issues WHERE id = ?1)";
const INSERT_COMMENT: &str = "INSERT INTO comments (issue_id, content, author, created_date)
    VALUES (?1, ?2, ?3, datetime(CURRENT_TIMESTAMP, 'localtime'))";
const SELECT_ISSUE_COMMENTS: &str = "SELECT id, issue_id, content, author, created_date FROM comments
    WHERE issue_id = ?1 ORDER BY created_date ASC, id ASC";

pub struct Comments {
    conn: Connection,
}

impl Comments {
    pub fn new(config: &Config) -> StoreResult<Self> {
        Self::open(&config.buildit_db)
    }

    pub fn open(path: &Path) -> StoreResult<Self> {
        let db = Db::open(path, StoreKind::Tracker)?;
        Ok(Self { conn: db.conn })
    }

    /// Adds a comment to an existing issue.
    pub fn add(&mut self, comment: &NewComment) -> StoreResult<i64> {
        let issue_exists: bool = self.conn.query_row(ISSUE_EXISTS, params![comment.issue_id], |row| row.get(0))?;
        if !issue_exists {
            return Err(StoreError::MissingParent {
                entity: "issue",
                id: comment.issue_id,
            });
        }

        self.conn.execute(INSERT_COMMENT, params![comment.issue_id, comment.content, comment.author])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Comments of one issue, oldest first.
    pub fn list(&self, issue_id: i64) -> StoreResult<Vec<Comment>> {
        let mut stmt = self.conn.prepare(SELECT_ISSUE_COMMENTS)?;
        let comments = stmt.query_map(params![issue_id], map_comment)?.collect::<Result<Vec<_>, _>>()?;
        Ok(comments)
    }
}

pub(crate) fn map_comment(row: &Row) -> rusqlite::Result<Comment> {
    Ok(Comment {
        id: row.get(0)?,
        issue_id: row.get(1)?,
        content: row.get(2)?,
        author: row.get(3)?,
        created_date: row.get(4)?,
    })
}
