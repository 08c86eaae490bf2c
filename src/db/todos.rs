use super::db::{Db, StoreKind};
use super::Outcome;
use crate::libs::config::Config;
use crate::libs::error::StoreResult;
use crate::libs::formatter::{format_timestamp, parse_date};
use crate::libs::messages::Message;
use crate::libs::todo::{NewTodo, Todo, TodoRecord};
use crate::msg_debug;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

const TODO_COLUMNS: &str = "id, title, description, due_date, priority, completed, created_at";
const ORDER_TODOS: &str = "ORDER BY priority DESC, created_at DESC, id DESC";

const INSERT_TODO: &str = "INSERT INTO todos (title, description, due_date, priority) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_TODO: &str = "UPDATE todos SET title = ?2, description = ?3, due_date = ?4, priority = ?5 WHERE id = ?1";
const TOGGLE_TODO: &str = "UPDATE todos SET completed = NOT completed WHERE id = ?1";
const DELETE_TODO: &str = "DELETE FROM todos WHERE id = ?1";
const DELETE_ALL_TODOS: &str = "DELETE FROM todos";
const IMPORT_TODO: &str = "INSERT INTO todos (id, title, description, due_date, priority, completed, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, COALESCE(?7, datetime(CURRENT_TIMESTAMP, 'localtime')))";

const COUNT_TODOS: &str = "SELECT COUNT(*) FROM todos";
const COUNT_COMPLETED: &str = "SELECT COUNT(*) FROM todos WHERE completed = 1";
const COUNT_DUE_ON: &str = "SELECT COUNT(*) FROM todos WHERE date(due_date) = date(?1)";
const COUNT_MIN_PRIORITY: &str = "SELECT COUNT(*) FROM todos WHERE priority >= ?1";
const CREATED_PER_DAY: &str = "SELECT date(created_at) AS day, COUNT(*) FROM todos
    WHERE date(created_at) >= date(?1) AND date(created_at) <= date(?2)
    GROUP BY day ORDER BY day";

/// Handle on the todo store.
pub struct Todos {
    conn: Connection,
}

impl Todos {
    pub fn new(config: &Config) -> StoreResult<Self> {
        Self::open(&config.todo_db)
    }

    pub fn open(path: &Path) -> StoreResult<Self> {
        let db = Db::open(path, StoreKind::Todo)?;
        Ok(Self { conn: db.conn })
    }

    /// Inserts a todo and returns its id.
    ///
    /// Storage is permissive: an empty title is accepted here. Titles and
    /// priority ranges are checked by [`TodoForm`](crate::libs::forms::TodoForm).
    pub fn add(&mut self, todo: &NewTodo) -> StoreResult<i64> {
        self.conn.execute(
            INSERT_TODO,
            params![todo.title, todo.description, todo.due_date, todo.priority],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get(&self, id: i64) -> StoreResult<Option<Todo>> {
        let sql = format!("SELECT {} FROM todos WHERE id = ?1", TODO_COLUMNS);
        self.conn.query_row(&sql, params![id], map_todo).optional().map_err(Into::into)
    }

    /// All todos, highest priority first, newest first within a priority.
    pub fn list(&self) -> StoreResult<Vec<Todo>> {
        let sql = format!("SELECT {} FROM todos {}", TODO_COLUMNS, ORDER_TODOS);
        let mut stmt = self.conn.prepare(&sql)?;
        let todos = stmt.query_map([], map_todo)?.collect::<Result<Vec<_>, _>>()?;
        Ok(todos)
    }

    pub fn toggle(&mut self, id: i64) -> StoreResult<Outcome> {
        let affected = self.conn.execute(TOGGLE_TODO, params![id])?;
        Ok(Outcome::from_affected(affected))
    }

    /// Replaces title, description, due date and priority. Completion state
    /// and creation time are left alone.
    pub fn update(&mut self, id: i64, todo: &NewTodo) -> StoreResult<Outcome> {
        let affected = self.conn.execute(
            UPDATE_TODO,
            params![id, todo.title, todo.description, todo.due_date, todo.priority],
        )?;
        Ok(Outcome::from_affected(affected))
    }

    pub fn delete(&mut self, id: i64) -> StoreResult<Outcome> {
        let affected = self.conn.execute(DELETE_TODO, params![id])?;
        Ok(Outcome::from_affected(affected))
    }

    /// Substring search over title and description with SQLite `LIKE`
    /// semantics: ASCII letters match case-insensitively, and an empty query
    /// matches every todo. Results use the same order as [`Todos::list`].
    pub fn search(&self, query: &str) -> StoreResult<Vec<Todo>> {
        let sql = format!(
            "SELECT {} FROM todos WHERE title LIKE ?1 OR description LIKE ?1 {}",
            TODO_COLUMNS, ORDER_TODOS
        );
        let pattern = format!("%{}%", query);
        let mut stmt = self.conn.prepare(&sql)?;
        let todos = stmt.query_map(params![pattern], map_todo)?.collect::<Result<Vec<_>, _>>()?;
        Ok(todos)
    }

    pub fn count(&self) -> StoreResult<i64> {
        Ok(self.conn.query_row(COUNT_TODOS, [], |row| row.get(0))?)
    }

    pub fn count_completed(&self) -> StoreResult<i64> {
        Ok(self.conn.query_row(COUNT_COMPLETED, [], |row| row.get(0))?)
    }

    pub fn count_due_on(&self, day: NaiveDate) -> StoreResult<i64> {
        Ok(self.conn.query_row(COUNT_DUE_ON, params![day], |row| row.get(0))?)
    }

    /// Todos at or above the given priority, completed or not.
    pub fn count_with_min_priority(&self, priority: i32) -> StoreResult<i64> {
        Ok(self.conn.query_row(COUNT_MIN_PRIORITY, params![priority], |row| row.get(0))?)
    }

    /// Number of todos created on each day of `from..=to` that saw any. Days
    /// without creations are absent.
    pub fn created_per_day(&self, from: NaiveDate, to: NaiveDate) -> StoreResult<Vec<(NaiveDate, i64)>> {
        let mut stmt = self.conn.prepare(CREATED_PER_DAY)?;
        let days = stmt
            .query_map(params![from, to], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(days)
    }

    /// Incomplete todos due on or after `today`, soonest first.
    pub fn upcoming(&self, today: NaiveDate, limit: usize) -> StoreResult<Vec<Todo>> {
        let sql = format!(
            "SELECT {} FROM todos
             WHERE due_date IS NOT NULL AND date(due_date) >= date(?1) AND completed = 0
             ORDER BY due_date ASC, priority DESC, id ASC LIMIT ?2",
            TODO_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let todos = stmt
            .query_map(params![today, limit as i64], map_todo)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(todos)
    }

    /// The most recently created todos, newest first.
    pub fn recent(&self, limit: usize) -> StoreResult<Vec<Todo>> {
        let sql = format!("SELECT {} FROM todos ORDER BY created_at DESC, id DESC LIMIT ?1", TODO_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let todos = stmt.query_map(params![limit as i64], map_todo)?.collect::<Result<Vec<_>, _>>()?;
        Ok(todos)
    }

    /// Every todo in id order, ready to be written as a backup document.
    pub fn export(&self) -> StoreResult<Vec<TodoRecord>> {
        let sql = format!("SELECT {} FROM todos ORDER BY id", TODO_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let todos = stmt
            .query_map([], map_todo)?
            .map(|todo| todo.map(TodoRecord::from))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(todos)
    }

    /// Replaces the whole store with `records`.
    ///
    /// Supplied ids and creation times are kept. Records without an id get a
    /// fresh one; records without a creation time are stamped now. Either
    /// every record lands or the store is left as it was.
    pub fn import(&mut self, records: &[TodoRecord]) -> StoreResult<usize> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_ALL_TODOS, [])?;
        {
            let mut stmt = tx.prepare(IMPORT_TODO)?;
            for record in records {
                stmt.execute(params![
                    record.id,
                    record.title,
                    record.description,
                    record.due_date,
                    record.priority,
                    record.completed,
                    record.created_at.as_ref().map(format_timestamp),
                ])?;
            }
        }
        tx.commit()?;

        msg_debug!(Message::TodosImported(records.len()));
        Ok(records.len())
    }
}

/// Unparseable due dates read back as none.
fn map_todo(row: &Row) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        due_date: row.get::<_, Option<String>>(3)?.as_deref().and_then(parse_date),
        priority: row.get(4)?,
        completed: row.get(5)?,
        created_at: row.get(6)?,
    })
}
