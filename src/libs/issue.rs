//! Issue model and the vocabularies the tracker forms offer for it.
//!
//! Storage keeps `type`, `status` and `priority` as free values; the enums
//! here only describe what the forms present. Aggregation treats a status of
//! `closed`, `done` or `completed` (any case) as resolved.

use crate::libs::formatter::timestamp;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const RESOLVED_STATUSES: [&str; 3] = ["closed", "done", "completed"];
pub const STATUS_OPEN: &str = "Open";
pub const STATUS_DONE: &str = "Done";

/// Issues at or above this priority count as critical while unresolved.
pub const CRITICAL_PRIORITY: i32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: i64,
    pub project_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: i32,
    pub status: String,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(with = "timestamp")]
    pub created_date: NaiveDateTime,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Issue {
    pub fn is_resolved(&self) -> bool {
        is_resolved_status(&self.status)
    }

    pub fn is_critical(&self) -> bool {
        !self.is_resolved() && self.priority >= CRITICAL_PRIORITY
    }

    /// `Done` goes back to `Open`; any other status becomes `Done`.
    pub fn toggled_status(&self) -> &'static str {
        if self.status.eq_ignore_ascii_case(STATUS_DONE) {
            STATUS_OPEN
        } else {
            STATUS_DONE
        }
    }
}

pub fn is_resolved_status(status: &str) -> bool {
    let status = status.trim();
    RESOLVED_STATUSES.iter().any(|resolved| resolved.eq_ignore_ascii_case(status))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssueKind {
    Feature,
    Bug,
    #[default]
    Task,
}

impl IssueKind {
    pub const ALL: [IssueKind; 3] = [IssueKind::Feature, IssueKind::Bug, IssueKind::Task];

    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::Feature => "Feature",
            IssueKind::Bug => "Bug",
            IssueKind::Task => "Task",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::ALL.into_iter().find(|kind| kind.as_str().eq_ignore_ascii_case(text))
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The priority labels of the issue form. Raw integers are also accepted by
/// the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityLabel {
    Low,
    #[default]
    Medium,
    High,
}

impl PriorityLabel {
    pub const ALL: [PriorityLabel; 3] = [PriorityLabel::Low, PriorityLabel::Medium, PriorityLabel::High];

    pub fn value(self) -> i32 {
        match self {
            PriorityLabel::Low => 1,
            PriorityLabel::Medium => 3,
            PriorityLabel::High => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PriorityLabel::Low => "Low",
            PriorityLabel::Medium => "Medium",
            PriorityLabel::High => "High",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::ALL.into_iter().find(|label| label.as_str().eq_ignore_ascii_case(text))
    }
}

impl fmt::Display for PriorityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewIssue {
    pub project_id: i64,
    pub kind: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: i32,
    pub status: String,
    pub assigned_to: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub tags: Vec<String>,
}

impl NewIssue {
    pub fn new(project_id: i64, title: &str) -> Self {
        Self {
            project_id,
            kind: IssueKind::default().to_string(),
            title: title.to_string(),
            description: None,
            priority: PriorityLabel::default().value(),
            status: STATUS_OPEN.to_string(),
            assigned_to: None,
            due_date: None,
            tags: Vec::new(),
        }
    }

    pub fn with_kind(mut self, kind: &str) -> Self {
        self.kind = kind.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn with_assignee(mut self, assigned_to: &str) -> Self {
        self.assigned_to = Some(assigned_to.to_string());
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|tag| tag.to_string()).collect();
        self
    }
}

/// Partial update of an issue. Only the fields set to `Some` are written;
/// for the optional columns `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueUpdate {
    pub kind: Option<String>,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub priority: Option<i32>,
    pub status: Option<String>,
    pub assigned_to: Option<Option<String>>,
    pub due_date: Option<Option<NaiveDate>>,
    pub tags: Option<Vec<String>>,
}

impl IssueUpdate {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.assigned_to.is_none()
            && self.due_date.is_none()
            && self.tags.is_none()
    }
}

/// Encodes tags for the `tags` text column.
pub fn encode_tags(tags: &[String]) -> String {
    serde_json::to_string(tags).unwrap_or_else(|_| "[]".to_string())
}

/// Decodes the `tags` column. Missing or malformed values read as no tags.
pub fn decode_tags(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|text| serde_json::from_str(text).ok()).unwrap_or_default()
}
