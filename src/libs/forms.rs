//! Input validation boundary.
//!
//! The shells collect raw text into these form types and call `validate`.
//! Only a form that validates reaches a store; otherwise the
//! [`ValidationError`] is shown and nothing is written.
//!
//! ```rust
//! use jtbd::libs::error::ValidationError;
//! use jtbd::libs::forms::TodoForm;
//!
//! let form = TodoForm {
//!     title: "Pay rent".into(),
//!     priority: "7".into(),
//!     ..Default::default()
//! };
//! assert_eq!(form.validate(), Err(ValidationError::PriorityOutOfRange(7)));
//! ```

use crate::libs::comment::NewComment;
use crate::libs::error::ValidationError;
use crate::libs::formatter::parse_date;
use crate::libs::issue::{IssueKind, NewIssue, PriorityLabel, STATUS_OPEN};
use crate::libs::project::{NewProject, ProjectStatus, DEFAULT_PROJECT_VERSION};
use crate::libs::todo::NewTodo;
use chrono::NaiveDate;

pub const MIN_TODO_PRIORITY: i32 = 0;
pub const MAX_TODO_PRIORITY: i32 = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoForm {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: String,
}

impl TodoForm {
    pub fn validate(&self) -> Result<NewTodo, ValidationError> {
        Ok(NewTodo {
            title: required("Title", &self.title)?,
            description: optional(&self.description),
            due_date: parse_due_date(&self.due_date)?,
            priority: parse_todo_priority(&self.priority)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
    pub version: String,
    pub status: String,
}

impl ProjectForm {
    pub fn validate(&self) -> Result<NewProject, ValidationError> {
        let version = optional(&self.version).unwrap_or_else(|| DEFAULT_PROJECT_VERSION.to_string());
        let status = if self.status.trim().is_empty() {
            ProjectStatus::default()
        } else {
            ProjectStatus::parse(&self.status).ok_or_else(|| ValidationError::UnknownChoice {
                field: "Status",
                value: self.status.trim().to_string(),
            })?
        };

        Ok(NewProject {
            name: required("Name", &self.name)?,
            description: optional(&self.description),
            version,
            status: status.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueForm {
    pub project_id: i64,
    pub kind: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub assigned_to: String,
    pub due_date: String,
    pub tags: String,
}

impl IssueForm {
    /// New issues always start `Open`.
    pub fn validate(&self) -> Result<NewIssue, ValidationError> {
        let kind = if self.kind.trim().is_empty() {
            IssueKind::default()
        } else {
            IssueKind::parse(&self.kind).ok_or_else(|| ValidationError::UnknownChoice {
                field: "Type",
                value: self.kind.trim().to_string(),
            })?
        };
        let priority = if self.priority.trim().is_empty() {
            PriorityLabel::default()
        } else {
            PriorityLabel::parse(&self.priority)
                .ok_or_else(|| ValidationError::UnknownPriorityLabel(self.priority.trim().to_string()))?
        };

        Ok(NewIssue {
            project_id: self.project_id,
            kind: kind.to_string(),
            title: required("Title", &self.title)?,
            description: optional(&self.description),
            priority: priority.value(),
            status: STATUS_OPEN.to_string(),
            assigned_to: optional(&self.assigned_to),
            due_date: parse_due_date(&self.due_date)?,
            tags: parse_tags(&self.tags),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentForm {
    pub issue_id: i64,
    pub author: String,
    pub content: String,
}

impl CommentForm {
    pub fn validate(&self) -> Result<NewComment, ValidationError> {
        Ok(NewComment {
            issue_id: self.issue_id,
            author: required("Author", &self.author)?,
            content: required("Comment", &self.content)?,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(value.to_string())
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Empty text means no due date.
pub fn parse_due_date(text: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    parse_date(text)
        .map(Some)
        .ok_or_else(|| ValidationError::InvalidDate(text.to_string()))
}

/// Empty text means priority 0.
pub fn parse_todo_priority(text: &str) -> Result<i32, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(MIN_TODO_PRIORITY);
    }
    let priority: i32 = text
        .parse()
        .map_err(|_| ValidationError::InvalidPriority(text.to_string()))?;
    if !(MIN_TODO_PRIORITY..=MAX_TODO_PRIORITY).contains(&priority) {
        return Err(ValidationError::PriorityOutOfRange(priority));
    }
    Ok(priority)
}

/// Splits comma-separated tags, trimming each and dropping empties.
pub fn parse_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
