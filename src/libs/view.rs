use super::comment::Comment;
use super::formatter::{
    due_date_style, format_optional_date, format_rate, format_timestamp, priority_stars, priority_style, status_mark,
};
use super::issue::Issue;
use super::project::Project;
use super::search::SearchResults;
use super::stats::{ActivityDay, ActivityEntry, TodoStats, TrackerStats};
use super::todo::Todo;
use crate::db::tags::Tag;
use anyhow::Result;
use chrono::NaiveDate;
use prettytable::{row, Cell, Row, Table};

const SELECTED_MARK: &str = "▶";
const BAR_WIDTH: i64 = 20;

pub struct View {}

impl View {
    pub fn todos(todos: &[Todo], selected: Option<usize>, today: NaiveDate) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", "", "ID", "TITLE", "PRIORITY", "DUE", "DESCRIPTION"]);
        for (index, todo) in todos.iter().enumerate() {
            let due = match todo.due_date {
                Some(due) if !todo.completed => {
                    Cell::new(&format_optional_date(Some(due))).style_spec(due_date_style(due, today))
                }
                other => Cell::new(&format_optional_date(other)),
            };
            table.add_row(Row::new(vec![
                Cell::new(selection_mark(index, selected)),
                Cell::new(status_mark(todo.completed)),
                Cell::new(&todo.id.to_string()),
                Cell::new(&todo.title),
                Cell::new(&priority_stars(todo.priority)).style_spec(priority_style(todo.priority)),
                due,
                Cell::new(todo.description.as_deref().unwrap_or_default()),
            ]));
        }
        table.printstd();

        Ok(())
    }

    pub fn projects(projects: &[Project], selected: Option<usize>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", "ID", "NAME", "VERSION", "STATUS", "LAST UPDATED"]);
        for (index, project) in projects.iter().enumerate() {
            table.add_row(row![
                selection_mark(index, selected),
                project.id,
                project.name,
                project.version.as_deref().unwrap_or_default(),
                project.status,
                format_timestamp(&project.last_updated)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn issues(issues: &[Issue], selected: Option<usize>, today: NaiveDate) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", "ID", "TYPE", "TITLE", "PRIORITY", "STATUS", "ASSIGNED", "DUE", "TAGS"]);
        for (index, issue) in issues.iter().enumerate() {
            let due = match issue.due_date {
                Some(due) if !issue.is_resolved() => {
                    Cell::new(&format_optional_date(Some(due))).style_spec(due_date_style(due, today))
                }
                other => Cell::new(&format_optional_date(other)),
            };
            table.add_row(Row::new(vec![
                Cell::new(selection_mark(index, selected)),
                Cell::new(&issue.id.to_string()),
                Cell::new(&issue.kind),
                Cell::new(&issue.title),
                Cell::new(&issue.priority.to_string()).style_spec(priority_style(issue.priority)),
                Cell::new(&issue.status),
                Cell::new(issue.assigned_to.as_deref().unwrap_or_default()),
                due,
                Cell::new(&issue.tags.join(", ")),
            ]));
        }
        table.printstd();

        Ok(())
    }

    pub fn issue_detail(issue: &Issue, comments: &[Comment]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", issue.id]);
        table.add_row(row!["TYPE", issue.kind]);
        table.add_row(row!["TITLE", issue.title]);
        table.add_row(row!["STATUS", issue.status]);
        table.add_row(row!["PRIORITY", issue.priority]);
        table.add_row(row!["ASSIGNED", issue.assigned_to.as_deref().unwrap_or_default()]);
        table.add_row(row!["CREATED", format_timestamp(&issue.created_date)]);
        table.add_row(row!["DUE", format_optional_date(issue.due_date)]);
        table.add_row(row!["TAGS", issue.tags.join(", ")]);
        table.add_row(row!["DESCRIPTION", issue.description.as_deref().unwrap_or_default()]);
        table.printstd();

        if !comments.is_empty() {
            let mut table = Table::new();
            table.add_row(row!["DATE", "AUTHOR", "COMMENT"]);
            for comment in comments {
                table.add_row(row![format_timestamp(&comment.created_date), comment.author, comment.content]);
            }
            table.printstd();
        }

        Ok(())
    }

    pub fn todo_stats(stats: &TodoStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TOTAL", "COMPLETED", "RATE", "DUE TODAY", "HIGH PRIORITY"]);
        table.add_row(row![
            stats.total,
            stats.completed,
            format_rate(stats.completion_rate),
            stats.due_today,
            stats.high_priority
        ]);
        table.printstd();

        if !stats.upcoming.is_empty() {
            let mut table = Table::new();
            table.add_row(row!["", "DUE", "TITLE"]);
            for todo in &stats.upcoming {
                let marker = if todo.priority >= 2 { "🔥" } else { "" };
                table.add_row(row![marker, format_optional_date(todo.due_date), todo.title]);
            }
            table.printstd();
        }

        Ok(())
    }

    pub fn tracker_stats(stats: &TrackerStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["PROJECTS", "ACTIVE", "OPEN ISSUES", "CRITICAL"]);
        table.add_row(row![
            stats.total_projects,
            stats.active_projects,
            stats.open_issues,
            stats.critical_issues
        ]);
        table.printstd();

        if !stats.breakdown.is_empty() {
            let mut table = Table::new();
            table.add_row(row!["", "PROJECT", "VERSION", "OPEN", "CRITICAL"]);
            for project in &stats.breakdown {
                let marker = if project.critical_issues > 0 { "🔥" } else { "" };
                table.add_row(row![
                    marker,
                    project.name,
                    project.version.as_deref().unwrap_or_default(),
                    project.open_issues,
                    project.critical_issues
                ]);
            }
            table.printstd();
        }

        Ok(())
    }

    /// One bar per day, scaled to the busiest day.
    pub fn activity(days: &[ActivityDay]) -> Result<()> {
        let max = days.iter().map(|day| day.count).max().unwrap_or(0).max(1);
        let mut table = Table::new();

        for day in days {
            let width = (day.count * BAR_WIDTH + max - 1) / max;
            table.add_row(row![day.date.format("%a %d").to_string(), "█".repeat(width as usize), day.count]);
        }
        table.printstd();

        Ok(())
    }

    pub fn recent_activity(entries: &[ActivityEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TIME", "TYPE", "DESCRIPTION", "STATUS"]);
        for entry in entries {
            table.add_row(row![format_timestamp(&entry.time), entry.source, entry.description, entry.status]);
        }
        table.printstd();

        Ok(())
    }

    pub fn search_results(results: &SearchResults) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TYPE", "ID", "TITLE", "DETAILS"]);
        for todo in &results.todos {
            table.add_row(row!["Todo", todo.id, todo.title, status_mark(todo.completed)]);
        }
        for project in &results.projects {
            table.add_row(row!["Project", project.id, project.name, project.status]);
        }
        for issue in &results.issues {
            table.add_row(row![format!("Issue ({})", issue.kind), issue.id, issue.title, issue.status]);
        }
        table.printstd();

        Ok(())
    }

    pub fn tags(tags: &[Tag]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "COLOR"]);
        for tag in tags {
            table.add_row(row![tag.id, tag.name, tag.color]);
        }
        table.printstd();

        Ok(())
    }
}

fn selection_mark(index: usize, selected: Option<usize>) -> &'static str {
    if selected == Some(index) {
        SELECTED_MARK
    } else {
        ""
    }
}
