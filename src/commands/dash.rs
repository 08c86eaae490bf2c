use super::{choose, prompt_text, today};
use crate::db::issues::Issues;
use crate::db::projects::Projects;
use crate::db::todos::Todos;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::search;
use crate::libs::stats::{recent_activity, TodoStats, TrackerStats, DEFAULT_BREAKDOWN_LIMIT, RECENT_ACTIVITY_LIMIT};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::{Context, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Refresh,
    Search,
    Settings,
    Quit,
}

const ACTIONS: [Action; 4] = [Action::Refresh, Action::Search, Action::Settings, Action::Quit];

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Refresh => "Refresh",
            Action::Search => "Search todos, projects and issues",
            Action::Settings => "Settings",
            Action::Quit => "Quit",
        };
        f.write_str(label)
    }
}

struct Stores {
    todos: Todos,
    projects: Projects,
    issues: Issues,
}

impl Stores {
    fn open(config: &Config) -> Result<Self> {
        let todo_failed = || Message::StoreOpenFailed(config.todo_db.display().to_string());
        let tracker_failed = || Message::StoreOpenFailed(config.buildit_db.display().to_string());
        Ok(Self {
            todos: Todos::new(config).with_context(todo_failed)?,
            projects: Projects::new(config).with_context(tracker_failed)?,
            issues: Issues::new(config).with_context(tracker_failed)?,
        })
    }
}

/// Runs the dashboard until the user quits.
pub fn run(config: &Config) -> Result<()> {
    let mut config = config.clone();
    let mut stores = Stores::open(&config)?;

    loop {
        if let Err(error) = render(&stores) {
            msg_warning!(Message::DashboardRefreshFailed(error.to_string()));
        }

        let Some(index) = choose(Message::SelectAction, &ACTIONS, 0)? else {
            break;
        };
        match ACTIONS[index] {
            Action::Refresh => {}
            Action::Search => search(&stores)?,
            Action::Settings => {
                let update = config.init()?;
                if let Err(error) = config.update(update) {
                    msg_error!(Message::ConfigSaveFailed(format!("{:#}", error)));
                    continue;
                }
                msg_success!(Message::ConfigSaved);
                match Stores::open(&config) {
                    Ok(reopened) => stores = reopened,
                    Err(error) => msg_error!(Message::StoreReopenFailed(format!("{:#}", error))),
                }
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

fn render(stores: &Stores) -> Result<()> {
    let today = today();

    let todo_stats = TodoStats::collect(&stores.todos, today)?;
    msg_print!(Message::TodoOverviewHeader, true);
    View::todo_stats(&todo_stats)?;
    if todo_stats.upcoming.is_empty() {
        msg_info!(Message::NoUpcomingTodos);
    }
    msg_print!(Message::TodoActivityHeader);
    View::activity(&todo_stats.activity)?;

    let tracker_stats = TrackerStats::collect(&stores.projects, &stores.issues, today, DEFAULT_BREAKDOWN_LIMIT)?;
    msg_print!(Message::ProjectOverviewHeader, true);
    View::tracker_stats(&tracker_stats)?;
    if tracker_stats.breakdown.is_empty() {
        msg_info!(Message::NoActiveProjects);
    }
    msg_print!(Message::IssueActivityHeader);
    View::activity(&tracker_stats.activity)?;

    let recent = recent_activity(&stores.todos, &stores.issues, RECENT_ACTIVITY_LIMIT)?;
    msg_print!(Message::RecentActivityHeader, true);
    if recent.is_empty() {
        msg_info!(Message::NoRecentActivity);
    } else {
        View::recent_activity(&recent)?;
    }

    Ok(())
}

fn search(stores: &Stores) -> Result<()> {
    let query = prompt_text(Message::PromptSearch, None)?;
    let lists = stores
        .todos
        .list()
        .and_then(|todos| Ok((todos, stores.projects.list()?, stores.issues.list(None)?)));
    let (todos, projects, issues) = match lists {
        Ok(lists) => lists,
        Err(error) => {
            msg_error!(Message::SearchFailed(error.to_string()));
            return Ok(());
        }
    };
    let results = search::combined(&todos, &projects, &issues, &query);

    if results.is_empty() {
        msg_info!(Message::NoMatches(query.trim().to_string()));
        return Ok(());
    }
    msg_print!(Message::SearchResultsHeader(results.len()), true);
    View::search_results(&results)
}
