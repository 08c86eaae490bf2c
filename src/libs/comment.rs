use crate::libs::formatter::timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A comment on an issue. Comments are never edited after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub issue_id: i64,
    pub content: String,
    pub author: String,
    #[serde(with = "timestamp")]
    pub created_date: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub issue_id: i64,
    pub content: String,
    pub author: String,
}

impl NewComment {
    pub fn new(issue_id: i64, author: &str, content: &str) -> Self {
        Self {
            issue_id,
            content: content.to_string(),
            author: author.to_string(),
        }
    }
}
