#[derive(Debug, Clone)]
pub enum Message {
    // === STARTUP AND CONFIGURATION ===
    ConfigCreated(String),
    ConfigLoaded(String),
    ConfigLoadFailed(String),
    ConfigSaved,
    ConfigSaveFailed(String),
    ConfigSettingsHeader,
    PromptTodoDbPath,
    PromptBuilditDbPath,
    StoreOpenFailed(String),   // path
    StoreReopenFailed(String), // error
    Fatal(String),

    // === SCHEMA ===
    SchemaUpToDate(u32),
    SchemaStepRunning(u32, String), // version, name
    SchemaStepFailed(u32, String),  // version, error
    SchemaReady(u32),

    // === GENERAL UI ===
    SelectAction,
    NothingSelected,
    InvalidInput(String),
    PromptSearch,
    PromptDueDate,
    NoMatches(String),
    SearchResultsHeader(usize),
    SearchFailed(String),
    StoreReadFailed(String),

    // === TODO MESSAGES ===
    TodoListHeader,
    TodoHelp,
    NoTodos,
    TodoAdded,
    TodoUpdated,
    TodoDeleted,
    TodoGone(i64),
    TodoSaveFailed(String),
    ConfirmDeleteTodo(String),
    PromptTodoTitle,
    PromptTodoDescription,
    PromptTodoPriority,

    // === TRACKER MESSAGES ===
    ProjectListHeader,
    BuilditHelp,
    NoProjects,
    ProjectAdded(String),
    ProjectDeleted(String),
    ProjectGone(i64),
    ProjectStatusChanged(String, String), // name, status
    ProjectCascadeDeleted {
        id: i64,
        issues: usize,
        comments: usize,
    },
    ConfirmDeleteProject(String),
    PromptProjectName,
    PromptProjectDescription,
    PromptProjectVersion,
    PromptProjectStatus,
    IssueListHeader(String), // project name
    IssueDetailHeader(i64),
    NoIssues,
    IssueAdded(String),
    IssueDeleted(String),
    IssueGone(i64),
    IssueStatusChanged(String, String), // title, status
    IssueCascadeDeleted {
        id: i64,
        comments: usize,
    },
    ConfirmDeleteIssue(String),
    PromptIssueType,
    PromptIssueTitle,
    PromptIssueDescription,
    PromptIssuePriority,
    PromptIssueAssignee,
    PromptIssueTags,
    NoComments,
    CommentAdded,
    ConfirmAddComment,
    PromptCommentAuthor,
    PromptCommentContent,
    TagListHeader,
    NoTags,
    TagAdded(String),
    TagExists(String),
    ConfirmAddTag,
    PromptTagName,
    PromptTagColor,
    TrackerSaveFailed(String),

    // === BACKUP MESSAGES ===
    DataExported(String),
    DataImported(String),
    ExportFailed(String),
    ImportFailed(String),
    ConfirmImport(String),
    TodosImported(usize),
    TodosImportedFrom(usize, String), // count, path
    TrackerImported {
        projects: usize,
        issues: usize,
        comments: usize,
        tags: usize,
    },

    // === DASHBOARD MESSAGES ===
    TodoOverviewHeader,
    TodoActivityHeader,
    NoUpcomingTodos,
    ProjectOverviewHeader,
    IssueActivityHeader,
    NoActiveProjects,
    RecentActivityHeader,
    NoRecentActivity,
    DashboardRefreshFailed(String),
}
