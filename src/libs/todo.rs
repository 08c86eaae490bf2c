use crate::libs::formatter::{option_timestamp, timestamp};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A stored todo, as listed and as written to the backup document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: i32,
    pub completed: bool,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
}

impl Todo {
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < today)
    }
}

/// The caller-controlled fields of a todo. Used both to add a todo and to
/// replace the mutable fields of an existing one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: i32,
}

impl NewTodo {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl From<&Todo> for NewTodo {
    fn from(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            description: todo.description.clone(),
            due_date: todo.due_date,
            priority: todo.priority,
        }
    }
}

/// A todo as read from a backup document. Hand-written documents may leave
/// out the id, the creation time and the flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, with = "option_timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

impl From<Todo> for TodoRecord {
    fn from(todo: Todo) -> Self {
        Self {
            id: Some(todo.id),
            title: todo.title,
            description: todo.description,
            due_date: todo.due_date,
            priority: todo.priority,
            completed: todo.completed,
            created_at: Some(todo.created_at),
        }
    }
}
