use super::db::{Db, StoreKind};
use super::Outcome;
use crate::libs::config::Config;
use crate::libs::error::StoreResult;
use crate::libs::messages::Message;
use crate::libs::project::{NewProject, Project, ProjectUpdate};
use crate::msg_debug;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, ToSql};
use std::path::Path;

const PROJECT_COLUMNS: &str = "id, name, description, version, status, created_date, last_updated";
const NOW: &str = "datetime(CURRENT_TIMESTAMP, 'localtime')";

const INSERT_PROJECT: &str = "INSERT INTO projects (name, description, version, status, created_date, last_updated)
    VALUES (?1, ?2, ?3, ?4, datetime(CURRENT_TIMESTAMP, 'localtime'), datetime(CURRENT_TIMESTAMP, 'localtime'))";
const PROJECT_EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1)";
const DELETE_PROJECT_COMMENTS: &str =
    "DELETE FROM comments WHERE issue_id IN (SELECT id FROM issues WHERE project_id = ?1)";
const DELETE_PROJECT_ISSUES: &str = "DELETE FROM issues WHERE project_id = ?1";
const DELETE_PROJECT: &str = "DELETE FROM projects WHERE id = ?1";
const COUNT_PROJECTS: &str = "SELECT COUNT(*) FROM projects";
const COUNT_ACTIVE_PROJECTS: &str = "SELECT COUNT(*) FROM projects WHERE LOWER(status) = 'active'";

/// Open and critical counts for one active project, as shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectBreakdown {
    pub id: i64,
    pub name: String,
    pub version: Option<String>,
    pub open_issues: i64,
    pub critical_issues: i64,
}

pub struct Projects {
    conn: Connection,
}

impl Projects {
    pub fn new(config: &Config) -> StoreResult<Self> {
        Self::open(&config.buildit_db)
    }

    pub fn open(path: &Path) -> StoreResult<Self> {
        let db = Db::open(path, StoreKind::Tracker)?;
        Ok(Self { conn: db.conn })
    }

    pub fn add(&mut self, project: &NewProject) -> StoreResult<i64> {
        self.conn.execute(
            INSERT_PROJECT,
            params![project.name, project.description, project.version, project.status],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get(&self, id: i64) -> StoreResult<Option<Project>> {
        let sql = format!("SELECT {} FROM projects WHERE id = ?1", PROJECT_COLUMNS);
        self.conn.query_row(&sql, params![id], map_project).optional().map_err(Into::into)
    }

    pub fn exists(&self, id: i64) -> StoreResult<bool> {
        Ok(self.conn.query_row(PROJECT_EXISTS, params![id], |row| row.get(0))?)
    }

    /// All projects, most recently touched first.
    pub fn list(&self) -> StoreResult<Vec<Project>> {
        let sql = format!("SELECT {} FROM projects ORDER BY last_updated DESC, id DESC", PROJECT_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let projects = stmt.query_map([], map_project)?.collect::<Result<Vec<_>, _>>()?;
        Ok(projects)
    }

    /// Writes the fields set in `update` and refreshes `last_updated`.
    ///
    /// An update with no fields set writes nothing and only reports whether
    /// the project exists.
    pub fn update(&mut self, id: i64, update: &ProjectUpdate) -> StoreResult<Outcome> {
        if update.is_empty() {
            return Ok(if self.exists(id)? { Outcome::Applied } else { Outcome::NotFound });
        }

        let mut assignments: Vec<String> = Vec::new();
        let mut values: Vec<&dyn ToSql> = Vec::new();

        if let Some(name) = &update.name {
            values.push(name);
            assignments.push(format!("name = ?{}", values.len()));
        }
        if let Some(description) = &update.description {
            values.push(description);
            assignments.push(format!("description = ?{}", values.len()));
        }
        if let Some(version) = &update.version {
            values.push(version);
            assignments.push(format!("version = ?{}", values.len()));
        }
        if let Some(status) = &update.status {
            values.push(status);
            assignments.push(format!("status = ?{}", values.len()));
        }
        assignments.push(format!("last_updated = {}", NOW));
        values.push(&id);

        let sql = format!(
            "UPDATE projects SET {} WHERE id = ?{}",
            assignments.join(", "),
            values.len()
        );
        let affected = self.conn.execute(&sql, params_from_iter(values))?;
        Ok(Outcome::from_affected(affected))
    }

    pub fn set_status(&mut self, id: i64, status: &str) -> StoreResult<Outcome> {
        self.update(
            id,
            &ProjectUpdate {
                status: Some(status.to_string()),
                ..Default::default()
            },
        )
    }

    /// Deletes a project together with its issues and their comments, in one
    /// transaction.
    pub fn delete(&mut self, id: i64) -> StoreResult<Outcome> {
        let tx = self.conn.transaction()?;
        let comments = tx.execute(DELETE_PROJECT_COMMENTS, params![id])?;
        let issues = tx.execute(DELETE_PROJECT_ISSUES, params![id])?;
        let affected = tx.execute(DELETE_PROJECT, params![id])?;
        tx.commit()?;

        msg_debug!(Message::ProjectCascadeDeleted {
            id,
            issues,
            comments
        });
        Ok(Outcome::from_affected(affected))
    }

    pub fn count(&self) -> StoreResult<i64> {
        Ok(self.conn.query_row(COUNT_PROJECTS, [], |row| row.get(0))?)
    }

    pub fn count_active(&self) -> StoreResult<i64> {
        Ok(self.conn.query_row(COUNT_ACTIVE_PROJECTS, [], |row| row.get(0))?)
    }

    /// Per active project: unresolved and critical issue counts.
    ///
    /// Ranked by the creation time of the project's newest issue (projects
    /// without issues last), then by critical count, then by open count.
    pub fn active_breakdown(&self, critical_priority: i32, limit: usize) -> StoreResult<Vec<ProjectBreakdown>> {
        let sql = "
            SELECT p.id, p.name, p.version,
                   COUNT(CASE WHEN LOWER(i.status) NOT IN ('closed', 'done', 'completed') THEN 1 END) AS open_issues,
                   COUNT(CASE WHEN i.priority >= ?1
                              AND LOWER(i.status) NOT IN ('closed', 'done', 'completed') THEN 1 END) AS critical,
                   MAX(i.created_date) AS latest_issue
            FROM projects p
            LEFT JOIN issues i ON i.project_id = p.id
            WHERE LOWER(p.status) = 'active'
            GROUP BY p.id
            ORDER BY latest_issue IS NULL, latest_issue DESC, critical DESC, open_issues DESC, p.id DESC
            LIMIT ?2";
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map(params![critical_priority, limit as i64], |row| {
                Ok(ProjectBreakdown {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    version: row.get(2)?,
                    open_issues: row.get(3)?,
                    critical_issues: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

pub(crate) fn map_project(row: &Row) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        version: row.get(3)?,
        status: row.get(4)?,
        created_date: row.get(5)?,
        last_updated: row.get(6)?,
    })
}

pub(crate) fn select_projects_sql(filter: &str) -> String {
    format!(
        "SELECT {} FROM projects {} ORDER BY last_updated DESC, id DESC",
        PROJECT_COLUMNS, filter
    )
}
