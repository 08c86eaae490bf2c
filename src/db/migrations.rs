//! Versioned, additive schema initialization for both stores.
//!
//! Each store kind has its own ordered list of schema steps. A step only ever
//! creates tables or indices that are missing, so opening an existing file is
//! never destructive and running the steps twice changes nothing. Applied
//! steps are recorded in a `schema_migrations` table inside the store file.
//!
//! ## Usage
//!
//! ```rust
//! use jtbd::db::db::StoreKind;
//! use jtbd::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn, StoreKind::Todo)?;
//! assert!(get_db_version(&conn, StoreKind::Todo)? > 0);
//! # Ok::<(), jtbd::libs::error::StoreError>(())
//! ```

use super::db::StoreKind;
use crate::libs::error::StoreResult;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS schema_migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema step.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> rusqlite::Result<()>,
}

/// Registry of schema steps for one store kind.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new(kind: StoreKind) -> Self {
        let mut manager = Self { migrations: Vec::new() };
        match kind {
            StoreKind::Todo => manager.register_todo_migrations(),
            StoreKind::Tracker => manager.register_tracker_migrations(),
        }
        manager
    }

    fn register_todo_migrations(&mut self) {
        self.add_migration(1, "create_todos", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS todos (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL,
                    description TEXT,
                    due_date TEXT,
                    priority INTEGER DEFAULT 0,
                    completed INTEGER DEFAULT 0,
                    created_at TEXT DEFAULT (datetime(CURRENT_TIMESTAMP, 'localtime'))
                )",
                [],
            )?;
            Ok(())
        });

        // Listing sorts by priority then creation time; the dashboard filters on due dates.
        self.add_migration(2, "add_todo_indices", |tx| {
            tx.execute("CREATE INDEX IF NOT EXISTS idx_todos_order ON todos(priority, created_at)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_todos_due_date ON todos(due_date)", [])?;
            Ok(())
        });
    }

    fn register_tracker_migrations(&mut self) {
        self.add_migration(1, "create_tracker_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS projects (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL,
                    description TEXT,
                    version TEXT,
                    status TEXT NOT NULL,
                    created_date TEXT NOT NULL,
                    last_updated TEXT NOT NULL
                )",
                [],
            )?;

            // Foreign keys are declared for documentation only; cascades are explicit.
            tx.execute(
                "CREATE TABLE IF NOT EXISTS issues (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    project_id INTEGER,
                    type TEXT NOT NULL,
                    title TEXT NOT NULL,
                    description TEXT,
                    priority INTEGER NOT NULL,
                    status TEXT NOT NULL,
                    assigned_to TEXT,
                    created_date TEXT NOT NULL,
                    due_date TEXT,
                    tags TEXT,
                    FOREIGN KEY (project_id) REFERENCES projects (id)
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS comments (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    issue_id INTEGER NOT NULL,
                    content TEXT NOT NULL,
                    author TEXT NOT NULL,
                    created_date TEXT NOT NULL,
                    FOREIGN KEY (issue_id) REFERENCES issues (id)
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS tags (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL UNIQUE,
                    color TEXT NOT NULL
                )",
                [],
            )?;
            Ok(())
        });

        self.add_migration(2, "add_tracker_indices", |tx| {
            tx.execute("CREATE INDEX IF NOT EXISTS idx_issues_project_id ON issues(project_id)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_comments_issue_id ON comments(issue_id)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> rusqlite::Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every step newer than the recorded version in one transaction.
    pub fn run_migrations(&self, conn: &mut Connection) -> StoreResult<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::SchemaUpToDate(current_version));
            return Ok(());
        }

        let tx = conn.transaction()?;

        for migration in pending {
            msg_debug!(Message::SchemaStepRunning(migration.version, migration.name.to_string()));

            if let Err(e) = (migration.up)(&tx) {
                msg_error!(Message::SchemaStepFailed(migration.version, e.to_string()));
                return Err(e.into());
            }
            tx.execute(
                "INSERT INTO schema_migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }

        tx.commit()?;
        msg_debug!(Message::SchemaReady(self.latest_version()));

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> StoreResult<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM schema_migrations", [], |row| row.get(0))?;

        Ok(version.unwrap_or(0))
    }

    fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    /// `(version, name, applied_at)` for every recorded step, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> StoreResult<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM schema_migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }
}

pub fn init_with_migrations(conn: &mut Connection, kind: StoreKind) -> StoreResult<()> {
    MigrationManager::new(kind).run_migrations(conn)
}

pub fn get_db_version(conn: &Connection, kind: StoreKind) -> StoreResult<u32> {
    MigrationManager::new(kind).get_current_version(conn)
}

pub fn needs_migration(conn: &Connection, kind: StoreKind) -> StoreResult<bool> {
    let manager = MigrationManager::new(kind);
    let current = manager.get_current_version(conn)?;
    Ok(current < manager.latest_version())
}
