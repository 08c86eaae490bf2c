use super::db::{Db, StoreKind};
use crate::libs::config::Config;
use crate::libs::error::StoreResult;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TAG_COLOR: &str = "#ffffff";

const INSERT_TAG: &str = "INSERT INTO tags (name, color) VALUES (?1, ?2)";
const SELECT_ALL_TAGS: &str = "SELECT id, name, color FROM tags ORDER BY name";
const SELECT_TAG_BY_NAME: &str = "SELECT id, name, color FROM tags WHERE name = ?1";

/// A named colour hint. Tag names are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_TAG_COLOR.to_string()
}

pub struct Tags {
    conn: Connection,
}

impl Tags {
    pub fn new(config: &Config) -> StoreResult<Self> {
        Self::open(&config.buildit_db)
    }

    pub fn open(path: &Path) -> StoreResult<Self> {
        let db = Db::open(path, StoreKind::Tracker)?;
        Ok(Self { conn: db.conn })
    }

    /// Registers a tag. A duplicate name fails with the SQLite constraint error.
    pub fn add(&mut self, name: &str, color: Option<&str>) -> StoreResult<i64> {
        self.conn
            .execute(INSERT_TAG, params![name, color.unwrap_or(DEFAULT_TAG_COLOR)])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn list(&self) -> StoreResult<Vec<Tag>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_TAGS)?;
        let tags = stmt.query_map([], map_tag)?.collect::<Result<Vec<_>, _>>()?;
        Ok(tags)
    }

    pub fn get_by_name(&self, name: &str) -> StoreResult<Option<Tag>> {
        self.conn
            .query_row(SELECT_TAG_BY_NAME, params![name], map_tag)
            .optional()
            .map_err(Into::into)
    }
}

pub(crate) fn map_tag(row: &Row) -> rusqlite::Result<Tag> {
    Ok(Tag {
        id: row.get(0)?,
        name: row.get(1)?,
        color: row.get(2)?,
    })
}
