//! Wording of every user-facing message.
//!
//! All text lives here so the shells, the stores and the debug traces stay
//! consistent:
//!
//! ```rust
//! use jtbd::libs::messages::Message;
//!
//! assert_eq!(Message::TodoGone(7).to_string(), "Todo 7 no longer exists");
//! ```

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            // === STARTUP AND CONFIGURATION ===
            Message::ConfigCreated(path) => format!("Created default configuration at {}", path),
            Message::ConfigLoaded(path) => format!("Loaded configuration from {}", path),
            Message::ConfigLoadFailed(error) => format!("Failed to load configuration: {}", error),
            Message::ConfigSaved => "Settings saved".to_string(),
            Message::ConfigSaveFailed(error) => format!("Settings not saved: {}", error),
            Message::ConfigSettingsHeader => "Store locations".to_string(),
            Message::PromptTodoDbPath => "Todo database file".to_string(),
            Message::PromptBuilditDbPath => "Project tracker database file".to_string(),
            Message::StoreOpenFailed(path) => format!("Failed to open store at {}", path),
            Message::StoreReopenFailed(error) => format!("Could not open the new store locations: {}", error),
            Message::Fatal(error) => format!("Aborting: {}", error),

            // === SCHEMA ===
            Message::SchemaUpToDate(version) => format!("Schema is up to date (version {})", version),
            Message::SchemaStepRunning(version, name) => format!("Applying schema step {}: {}", version, name),
            Message::SchemaStepFailed(version, error) => format!("Schema step {} failed: {}", version, error),
            Message::SchemaReady(version) => format!("Schema ready at version {}", version),

            // === GENERAL UI ===
            Message::SelectAction => "What next?".to_string(),
            Message::NothingSelected => "Nothing selected".to_string(),
            Message::InvalidInput(error) => format!("Not saved: {}", error),
            Message::PromptSearch => "Search for".to_string(),
            Message::PromptDueDate => "Due date (YYYY-MM-DD, empty for none)".to_string(),
            Message::NoMatches(query) => format!("Nothing matches '{}'", query),
            Message::SearchResultsHeader(count) => format!("Found {} match(es):", count),
            Message::SearchFailed(error) => format!("Search failed: {}", error),
            Message::StoreReadFailed(error) => format!("Could not read the store: {}", error),

            // === TODO MESSAGES ===
            Message::TodoListHeader => "Todos:".to_string(),
            Message::TodoHelp => "Move the selection with up/down, then edit, toggle or delete the selected \
                                  todo. Find searches titles and descriptions. Export and import use \
                                  ~/todos_backup.json; importing replaces every todo."
                .to_string(),
            Message::NoTodos => "No todos yet".to_string(),
            Message::TodoAdded => "Todo added successfully!".to_string(),
            Message::TodoUpdated => "Todo updated".to_string(),
            Message::TodoDeleted => "Todo deleted".to_string(),
            Message::TodoGone(id) => format!("Todo {} no longer exists", id),
            Message::TodoSaveFailed(error) => format!("Failed to save todo: {}", error),
            Message::ConfirmDeleteTodo(title) => format!("Delete todo '{}'?", title),
            Message::PromptTodoTitle => "Title".to_string(),
            Message::PromptTodoDescription => "Description".to_string(),
            Message::PromptTodoPriority => "Priority (0-5)".to_string(),

            // === TRACKER MESSAGES ===
            Message::ProjectListHeader => "Projects:".to_string(),
            Message::BuilditHelp => "Open a project to work on its issues; go back to return to the project \
                                     list. Toggling completes or reopens the selected item. Deleting a project \
                                     removes its issues and comments. Export and import use \
                                     ~/buildit_backup.json; importing replaces everything."
                .to_string(),
            Message::NoProjects => "No projects yet".to_string(),
            Message::ProjectAdded(name) => format!("Project '{}' added", name),
            Message::ProjectDeleted(name) => format!("Project '{}' deleted with its issues", name),
            Message::ProjectGone(id) => format!("Project {} no longer exists", id),
            Message::ProjectStatusChanged(name, status) => format!("Project '{}' is now {}", name, status),
            Message::ProjectCascadeDeleted { id, issues, comments } => {
                format!("Deleted project {} with {} issue(s) and {} comment(s)", id, issues, comments)
            }
            Message::ConfirmDeleteProject(name) => {
                format!("Delete project '{}' and all of its issues and comments?", name)
            }
            Message::PromptProjectName => "Name".to_string(),
            Message::PromptProjectDescription => "Description".to_string(),
            Message::PromptProjectVersion => "Version (empty for 0.1.0)".to_string(),
            Message::PromptProjectStatus => "Status".to_string(),
            Message::IssueListHeader(project) => format!("Issues of {}:", project),
            Message::IssueDetailHeader(id) => format!("Issue #{}", id),
            Message::NoIssues => "No issues in this project".to_string(),
            Message::IssueAdded(title) => format!("Issue '{}' added", title),
            Message::IssueDeleted(title) => format!("Issue '{}' deleted", title),
            Message::IssueGone(id) => format!("Issue {} no longer exists", id),
            Message::IssueStatusChanged(title, status) => format!("Issue '{}' is now {}", title, status),
            Message::IssueCascadeDeleted { id, comments } => {
                format!("Deleted issue {} with {} comment(s)", id, comments)
            }
            Message::ConfirmDeleteIssue(title) => format!("Delete issue '{}' and its comments?", title),
            Message::PromptIssueType => "Type".to_string(),
            Message::PromptIssueTitle => "Title".to_string(),
            Message::PromptIssueDescription => "Description".to_string(),
            Message::PromptIssuePriority => "Priority".to_string(),
            Message::PromptIssueAssignee => "Assigned to".to_string(),
            Message::PromptIssueTags => "Tags (comma separated)".to_string(),
            Message::NoComments => "No comments yet".to_string(),
            Message::CommentAdded => "Comment added".to_string(),
            Message::ConfirmAddComment => "Add a comment?".to_string(),
            Message::PromptCommentAuthor => "Author".to_string(),
            Message::PromptCommentContent => "Comment".to_string(),
            Message::TagListHeader => "Tags:".to_string(),
            Message::NoTags => "No tags defined".to_string(),
            Message::TagAdded(name) => format!("Tag '{}' added", name),
            Message::TagExists(name) => format!("Tag '{}' already exists", name),
            Message::ConfirmAddTag => "Add a tag?".to_string(),
            Message::PromptTagName => "Tag name".to_string(),
            Message::PromptTagColor => "Color (empty for #ffffff)".to_string(),
            Message::TrackerSaveFailed(error) => format!("Failed to save: {}", error),

            // === BACKUP MESSAGES ===
            Message::DataExported(path) => format!("Data exported to {}", path),
            Message::DataImported(path) => format!("Data imported from {}", path),
            Message::ExportFailed(error) => format!("Export failed: {}", error),
            Message::ImportFailed(error) => format!("Import failed, nothing was changed: {}", error),
            Message::ConfirmImport(path) => format!("Replace all current data with the contents of {}?", path),
            Message::TodosImported(count) => format!("Imported {} todo(s)", count),
            Message::TodosImportedFrom(count, path) => format!("Imported {} todo(s) from {}", count, path),
            Message::TrackerImported {
                projects,
                issues,
                comments,
                tags,
            } => format!(
                "Imported {} project(s), {} issue(s), {} comment(s) and {} tag(s)",
                projects, issues, comments, tags
            ),

            // === DASHBOARD MESSAGES ===
            Message::TodoOverviewHeader => "Todo overview".to_string(),
            Message::TodoActivityHeader => "Todos created, last 7 days:".to_string(),
            Message::NoUpcomingTodos => "No upcoming tasks".to_string(),
            Message::ProjectOverviewHeader => "Project overview".to_string(),
            Message::IssueActivityHeader => "Issues created, last 7 days:".to_string(),
            Message::NoActiveProjects => "No active projects".to_string(),
            Message::RecentActivityHeader => "Recent activity".to_string(),
            Message::NoRecentActivity => "Nothing has happened yet".to_string(),
            Message::DashboardRefreshFailed(error) => format!("Failed to refresh the dashboard: {}", error),
        };
        write!(f, "{}", s)
    }
}
