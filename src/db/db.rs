use super::migrations::init_with_migrations;
use crate::libs::error::StoreResult;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// The two independently addressable stores, each in its own file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Todos only.
    Todo,
    /// Projects, issues, comments and tags.
    Tracker,
}

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens (creating if missing) the database file at `path` and brings its
    /// schema up to date for the given store kind. Never destructive.
    pub fn open(path: &Path, kind: StoreKind) -> StoreResult<Db> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut conn = Connection::open(path)?;
        init_with_migrations(&mut conn, kind)?;

        Ok(Db { conn })
    }

    pub fn open_in_memory(kind: StoreKind) -> StoreResult<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn, kind)?;

        Ok(Db { conn })
    }
}
