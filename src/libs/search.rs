//! Case-insensitive filtering of already-loaded records.
//!
//! Used by the dashboard and the shells' find dialogs. Unlike the stores'
//! own `search` queries, a blank query here yields no results.

use crate::libs::issue::Issue;
use crate::libs::project::Project;
use crate::libs::todo::Todo;

/// Results of a search across both stores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub todos: Vec<Todo>,
    pub projects: Vec<Project>,
    pub issues: Vec<Issue>,
}

impl SearchResults {
    pub fn len(&self) -> usize {
        self.todos.len() + self.projects.len() + self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lowercased query, or `None` when it is blank.
fn needle(query: &str) -> Option<String> {
    let query = query.trim();
    (!query.is_empty()).then(|| query.to_lowercase())
}

fn contains(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}

fn contains_opt(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|field| contains(field, needle))
}

/// Matches on title or description.
pub fn filter_todos(todos: &[Todo], query: &str) -> Vec<Todo> {
    let Some(needle) = needle(query) else {
        return Vec::new();
    };
    todos
        .iter()
        .filter(|todo| contains(&todo.title, &needle) || contains_opt(todo.description.as_deref(), &needle))
        .cloned()
        .collect()
}

/// Matches on name or description.
pub fn filter_projects(projects: &[Project], query: &str) -> Vec<Project> {
    let Some(needle) = needle(query) else {
        return Vec::new();
    };
    projects
        .iter()
        .filter(|project| contains(&project.name, &needle) || contains_opt(project.description.as_deref(), &needle))
        .cloned()
        .collect()
}

/// Matches on title, description, assignee or type.
pub fn filter_issues(issues: &[Issue], query: &str) -> Vec<Issue> {
    let Some(needle) = needle(query) else {
        return Vec::new();
    };
    issues
        .iter()
        .filter(|issue| {
            contains(&issue.title, &needle)
                || contains_opt(issue.description.as_deref(), &needle)
                || contains_opt(issue.assigned_to.as_deref(), &needle)
                || contains(&issue.kind, &needle)
        })
        .cloned()
        .collect()
}

pub fn combined(todos: &[Todo], projects: &[Project], issues: &[Issue], query: &str) -> SearchResults {
    SearchResults {
        todos: filter_todos(todos, query),
        projects: filter_projects(projects, query),
        issues: filter_issues(issues, query),
    }
}
