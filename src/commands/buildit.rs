use super::{choose, confirm, prompt_text, report_invalid, today};
use crate::db::comments::Comments;
use crate::db::issues::Issues;
use crate::db::projects::Projects;
use crate::db::tags::Tags;
use crate::db::tracker::Tracker;
use crate::db::Outcome;
use crate::libs::backup::{read_document, write_document, TrackerBackup};
use crate::libs::config::Config;
use crate::libs::error::{StoreResult, ValidationError};
use crate::libs::forms::{CommentForm, IssueForm, ProjectForm};
use crate::libs::issue::{Issue, IssueKind, PriorityLabel};
use crate::libs::messages::Message;
use crate::libs::nav::{Collection, Navigator};
use crate::libs::project::{Project, ProjectStatus};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::{Context, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Down,
    Up,
    OpenIssues,
    AddProject,
    ViewIssue,
    AddIssue,
    AddComment,
    ToggleStatus,
    Delete,
    BackToProjects,
    Find,
    Tags,
    Export,
    Import,
    Help,
    Quit,
}

const PROJECT_ACTIONS: [Action; 12] = [
    Action::Down,
    Action::Up,
    Action::OpenIssues,
    Action::AddProject,
    Action::ToggleStatus,
    Action::Delete,
    Action::Find,
    Action::Tags,
    Action::Export,
    Action::Import,
    Action::Help,
    Action::Quit,
];

const ISSUE_ACTIONS: [Action; 11] = [
    Action::Down,
    Action::Up,
    Action::ViewIssue,
    Action::AddIssue,
    Action::AddComment,
    Action::ToggleStatus,
    Action::Delete,
    Action::BackToProjects,
    Action::Find,
    Action::Help,
    Action::Quit,
];

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Down => "Move down",
            Action::Up => "Move up",
            Action::OpenIssues => "Open project issues",
            Action::AddProject => "Add project",
            Action::ViewIssue => "View issue and comments",
            Action::AddIssue => "Add issue",
            Action::AddComment => "Add comment",
            Action::ToggleStatus => "Toggle status",
            Action::Delete => "Delete selected",
            Action::BackToProjects => "Back to projects",
            Action::Find => "Find",
            Action::Tags => "Tags",
            Action::Export => "Export to backup file",
            Action::Import => "Import from backup file",
            Action::Help => "Help",
            Action::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Store handles shared by the tracker actions.
struct Stores {
    projects: Projects,
    issues: Issues,
    comments: Comments,
    tags: Tags,
    tracker: Tracker,
}

impl Stores {
    fn open(config: &Config) -> Result<Self> {
        let open_failed = || Message::StoreOpenFailed(config.buildit_db.display().to_string());
        Ok(Self {
            projects: Projects::new(config).with_context(open_failed)?,
            issues: Issues::new(config).with_context(open_failed)?,
            comments: Comments::new(config).with_context(open_failed)?,
            tags: Tags::new(config).with_context(open_failed)?,
            tracker: Tracker::new(config).with_context(open_failed)?,
        })
    }
}

/// Runs the project tracker shell until the user quits.
pub fn run(config: &Config) -> Result<()> {
    let mut stores = Stores::open(config)?;
    let mut nav = Navigator::new(Collection::Projects);

    loop {
        let quit = match nav.active() {
            Collection::Issues => {
                let Some(project_id) = nav.drilled_project() else {
                    nav.drill_out();
                    continue;
                };
                let project = match stores.projects.get(project_id) {
                    Ok(Some(project)) => project,
                    Ok(None) => {
                        msg_info!(Message::ProjectGone(project_id));
                        nav.drill_out();
                        continue;
                    }
                    Err(error) => {
                        msg_error!(Message::StoreReadFailed(error.to_string()));
                        nav.drill_out();
                        continue;
                    }
                };
                let issues = stores.issues.list(Some(project_id)).unwrap_or_else(|error| {
                    msg_error!(Message::StoreReadFailed(error.to_string()));
                    Vec::new()
                });
                nav.cursor_mut().set_len(issues.len());

                msg_print!(Message::IssueListHeader(project.name.clone()), true);
                if issues.is_empty() {
                    msg_info!(Message::NoIssues);
                } else {
                    View::issues(&issues, nav.cursor().selected(), today())?;
                }

                let Some(index) = choose(Message::SelectAction, &ISSUE_ACTIONS, 0)? else {
                    break;
                };
                let action = ISSUE_ACTIONS[index];
                let selected = nav.cursor().selected_in(&issues).cloned();
                handle_issue_action(&mut stores, &mut nav, action, &project, selected, &issues)?
            }
            _ => {
                let projects = stores.projects.list().unwrap_or_else(|error| {
                    msg_error!(Message::StoreReadFailed(error.to_string()));
                    Vec::new()
                });
                nav.cursor_mut().set_len(projects.len());

                msg_print!(Message::ProjectListHeader, true);
                if projects.is_empty() {
                    msg_info!(Message::NoProjects);
                } else {
                    View::projects(&projects, nav.cursor().selected())?;
                }

                let Some(index) = choose(Message::SelectAction, &PROJECT_ACTIONS, 0)? else {
                    break;
                };
                let action = PROJECT_ACTIONS[index];
                handle_project_action(&mut stores, &mut nav, action, &projects, config)?
            }
        };

        if quit {
            break;
        }
    }

    Ok(())
}

/// Returns `true` when the shell should end.
fn handle_project_action(
    stores: &mut Stores,
    nav: &mut Navigator,
    action: Action,
    projects: &[Project],
    config: &Config,
) -> Result<bool> {
    let selected = nav.cursor().selected_in(projects).cloned();

    match action {
        Action::Down => nav.cursor_mut().next(),
        Action::Up => nav.cursor_mut().previous(),
        Action::OpenIssues => {
            let ids: Vec<i64> = projects.iter().map(|project| project.id).collect();
            if nav.drill_in(&ids).is_none() {
                msg_info!(Message::NothingSelected);
            }
        }
        Action::AddProject => add_project(stores)?,
        Action::ToggleStatus => match selected {
            Some(project) => {
                let status = project.toggled_status();
                report_outcome(
                    stores.projects.set_status(project.id, status.as_str()),
                    Message::ProjectStatusChanged(project.name.clone(), status.to_string()),
                    Message::ProjectGone(project.id),
                );
            }
            None => msg_info!(Message::NothingSelected),
        },
        Action::Delete => match selected {
            Some(project) => {
                if confirm(Message::ConfirmDeleteProject(project.name.clone()))? {
                    report_outcome(
                        stores.projects.delete(project.id),
                        Message::ProjectDeleted(project.name.clone()),
                        Message::ProjectGone(project.id),
                    );
                }
            }
            None => msg_info!(Message::NothingSelected),
        },
        Action::Find => find(stores)?,
        Action::Tags => tags(stores)?,
        Action::Export => export(stores, config),
        Action::Import => import(stores, config)?,
        Action::Help => msg_print!(Message::BuilditHelp, true),
        Action::Quit => return Ok(true),
        _ => {}
    }
    Ok(false)
}

/// Returns `true` when the shell should end.
fn handle_issue_action(
    stores: &mut Stores,
    nav: &mut Navigator,
    action: Action,
    project: &Project,
    selected: Option<Issue>,
    issues: &[Issue],
) -> Result<bool> {
    match action {
        Action::Down => nav.cursor_mut().next(),
        Action::Up => nav.cursor_mut().previous(),
        Action::ViewIssue => {
            let ids: Vec<i64> = issues.iter().map(|issue| issue.id).collect();
            match nav.open_detail(&ids) {
                Some(issue_id) => {
                    show_issue(stores, issue_id)?;
                    nav.close_detail();
                }
                None => msg_info!(Message::NothingSelected),
            }
        }
        Action::AddIssue => add_issue(stores, project.id)?,
        Action::AddComment => match selected {
            Some(issue) => add_comment(stores, issue.id)?,
            None => msg_info!(Message::NothingSelected),
        },
        Action::ToggleStatus => match selected {
            Some(issue) => {
                let status = issue.toggled_status();
                report_outcome(
                    stores.issues.set_status(issue.id, status),
                    Message::IssueStatusChanged(issue.title.clone(), status.to_string()),
                    Message::IssueGone(issue.id),
                );
            }
            None => msg_info!(Message::NothingSelected),
        },
        Action::Delete => match selected {
            Some(issue) => {
                if confirm(Message::ConfirmDeleteIssue(issue.title.clone()))? {
                    report_outcome(
                        stores.issues.delete(issue.id),
                        Message::IssueDeleted(issue.title.clone()),
                        Message::IssueGone(issue.id),
                    );
                }
            }
            None => msg_info!(Message::NothingSelected),
        },
        Action::BackToProjects => nav.drill_out(),
        Action::Find => find(stores)?,
        Action::Help => msg_print!(Message::BuilditHelp, true),
        Action::Quit => return Ok(true),
        _ => {}
    }
    Ok(false)
}

fn report_outcome(result: StoreResult<Outcome>, applied: Message, not_found: Message) {
    match result {
        Ok(outcome) if outcome.is_applied() => msg_success!(applied),
        Ok(_) => msg_info!(not_found),
        Err(error) => msg_error!(Message::TrackerSaveFailed(error.to_string())),
    }
}

fn add_project(stores: &mut Stores) -> Result<()> {
    let status_index = choose(Message::PromptProjectStatus, &ProjectStatus::ALL, 0)?.unwrap_or(0);
    let form = ProjectForm {
        name: prompt_text(Message::PromptProjectName, None)?,
        description: prompt_text(Message::PromptProjectDescription, None)?,
        version: prompt_text(Message::PromptProjectVersion, None)?,
        status: ProjectStatus::ALL[status_index].to_string(),
    };

    let project = match form.validate() {
        Ok(project) => project,
        Err(error) => {
            report_invalid(&error);
            return Ok(());
        }
    };

    match stores.projects.add(&project) {
        Ok(_) => msg_success!(Message::ProjectAdded(project.name)),
        Err(error) => msg_error!(Message::TrackerSaveFailed(error.to_string())),
    }
    Ok(())
}

fn add_issue(stores: &mut Stores, project_id: i64) -> Result<()> {
    let kind_index = choose(Message::PromptIssueType, &IssueKind::ALL, 2)?.unwrap_or(2);
    let priority_index = choose(Message::PromptIssuePriority, &PriorityLabel::ALL, 1)?.unwrap_or(1);
    let form = IssueForm {
        project_id,
        kind: IssueKind::ALL[kind_index].to_string(),
        title: prompt_text(Message::PromptIssueTitle, None)?,
        description: prompt_text(Message::PromptIssueDescription, None)?,
        priority: PriorityLabel::ALL[priority_index].to_string(),
        assigned_to: prompt_text(Message::PromptIssueAssignee, None)?,
        due_date: prompt_text(Message::PromptDueDate, None)?,
        tags: prompt_text(Message::PromptIssueTags, None)?,
    };

    let issue = match form.validate() {
        Ok(issue) => issue,
        Err(error) => {
            report_invalid(&error);
            return Ok(());
        }
    };

    match stores.issues.add(&issue) {
        Ok(_) => msg_success!(Message::IssueAdded(issue.title)),
        Err(error) => msg_error!(Message::TrackerSaveFailed(error.to_string())),
    }
    Ok(())
}

fn add_comment(stores: &mut Stores, issue_id: i64) -> Result<()> {
    let form = CommentForm {
        issue_id,
        author: prompt_text(Message::PromptCommentAuthor, None)?,
        content: prompt_text(Message::PromptCommentContent, None)?,
    };

    let comment = match form.validate() {
        Ok(comment) => comment,
        Err(error) => {
            report_invalid(&error);
            return Ok(());
        }
    };

    match stores.comments.add(&comment) {
        Ok(_) => msg_success!(Message::CommentAdded),
        Err(error) => msg_error!(Message::TrackerSaveFailed(error.to_string())),
    }
    Ok(())
}

fn show_issue(stores: &mut Stores, issue_id: i64) -> Result<()> {
    let (issue, comments) = match stores.issues.get(issue_id).and_then(|issue| {
        let comments = stores.comments.list(issue_id)?;
        Ok(issue.map(|issue| (issue, comments)))
    }) {
        Ok(Some(found)) => found,
        Ok(None) => {
            msg_info!(Message::IssueGone(issue_id));
            return Ok(());
        }
        Err(error) => {
            msg_error!(Message::StoreReadFailed(error.to_string()));
            return Ok(());
        }
    };

    msg_print!(Message::IssueDetailHeader(issue.id), true);
    View::issue_detail(&issue, &comments)?;
    if comments.is_empty() {
        msg_info!(Message::NoComments);
    }

    if confirm(Message::ConfirmAddComment)? {
        add_comment(stores, issue_id)?;
    }
    Ok(())
}

fn find(stores: &Stores) -> Result<()> {
    let query = prompt_text(Message::PromptSearch, None)?;
    let matches = match stores.tracker.search(query.trim()) {
        Ok(matches) => matches,
        Err(error) => {
            msg_error!(Message::SearchFailed(error.to_string()));
            return Ok(());
        }
    };

    if matches.is_empty() {
        msg_info!(Message::NoMatches(query.trim().to_string()));
        return Ok(());
    }
    if !matches.projects.is_empty() {
        msg_print!(Message::SearchResultsHeader(matches.projects.len()), true);
        View::projects(&matches.projects, None)?;
    }
    if !matches.issues.is_empty() {
        msg_print!(Message::SearchResultsHeader(matches.issues.len()), true);
        View::issues(&matches.issues, None, today())?;
    }
    Ok(())
}

fn tags(stores: &mut Stores) -> Result<()> {
    let tags = match stores.tags.list() {
        Ok(tags) => tags,
        Err(error) => {
            msg_error!(Message::StoreReadFailed(error.to_string()));
            return Ok(());
        }
    };
    msg_print!(Message::TagListHeader, true);
    if tags.is_empty() {
        msg_info!(Message::NoTags);
    } else {
        View::tags(&tags)?;
    }

    if !confirm(Message::ConfirmAddTag)? {
        return Ok(());
    }
    let name = prompt_text(Message::PromptTagName, None)?;
    let name = name.trim();
    if name.is_empty() {
        report_invalid(&ValidationError::EmptyField("Name"));
        return Ok(());
    }
    match stores.tags.get_by_name(name) {
        Ok(None) => {}
        Ok(Some(_)) => {
            msg_error!(Message::TagExists(name.to_string()));
            return Ok(());
        }
        Err(error) => {
            msg_error!(Message::StoreReadFailed(error.to_string()));
            return Ok(());
        }
    }
    let color = prompt_text(Message::PromptTagColor, None)?;
    let color = color.trim();

    match stores.tags.add(name, (!color.is_empty()).then_some(color)) {
        Ok(_) => msg_success!(Message::TagAdded(name.to_string())),
        Err(error) => msg_error!(Message::TrackerSaveFailed(error.to_string())),
    }
    Ok(())
}

fn export(stores: &Stores, config: &Config) {
    let path = config.buildit_backup_path();
    match stores.tracker.export().and_then(|backup| write_document(&path, &backup)) {
        Ok(()) => msg_success!(Message::DataExported(path.display().to_string())),
        Err(error) => msg_error!(Message::ExportFailed(error.to_string())),
    }
}

fn import(stores: &mut Stores, config: &Config) -> Result<()> {
    let path = config.buildit_backup_path();
    if !confirm(Message::ConfirmImport(path.display().to_string()))? {
        return Ok(());
    }
    match read_document::<TrackerBackup>(&path).and_then(|backup| stores.tracker.import(&backup)) {
        Ok(()) => msg_success!(Message::DataImported(path.display().to_string())),
        Err(error) => msg_error!(Message::ImportFailed(error.to_string())),
    }
    Ok(())
}
