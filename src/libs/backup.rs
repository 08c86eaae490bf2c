//! JSON backup documents for both stores.
//!
//! The todo document is a bare array of todo records. The tracker document is
//! an object with one array per table:
//!
//! ```json
//! {
//!   "projects": [{ "id": 1, "name": "Website", "status": "Active", ... }],
//!   "issues": [{ "id": 4, "project_id": 1, "type": "Bug", "tags": ["ui"], ... }],
//!   "comments": [],
//!   "tags": []
//! }
//! ```
//!
//! Arrays missing from a tracker document read as empty. Reading never
//! touches a store: a missing file or malformed JSON fails before any import
//! starts.

use crate::db::tags::Tag;
use crate::libs::comment::Comment;
use crate::libs::error::{StoreError, StoreResult};
use crate::libs::issue::Issue;
use crate::libs::project::Project;
use crate::libs::todo::TodoRecord;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

pub type TodoBackup = Vec<TodoRecord>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerBackup {
    pub projects: Vec<Project>,
    pub issues: Vec<Issue>,
    pub comments: Vec<Comment>,
    pub tags: Vec<Tag>,
}

/// Writes `document` to `path` as pretty-printed JSON, replacing any
/// existing file.
pub fn write_document<T: Serialize>(path: &Path, document: &T) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, document)?;
    Ok(())
}

pub fn read_document<T: DeserializeOwned>(path: &Path) -> StoreResult<T> {
    if !path.exists() {
        return Err(StoreError::BackupNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
