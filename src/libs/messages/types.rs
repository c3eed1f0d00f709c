#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(i64),
    TasksDeletedCount(usize),
    TaskNotFound(i64),
    TaskStarted(String),
    TaskCompleted(String),
    TaskCancelled(String),
    TaskAlreadyCompleted(i64),
    NoTasksFound,
    TaskListHeader,
    ConfirmDeleteTask(String),
    SubtasksCreated(usize),

    // === RECURRENCE MESSAGES ===
    RecurrenceScheduled(String, String), // title, next due date
    RecurrenceSeriesEnded(String),       // title

    // === ORDERING MESSAGES ===
    TaskReordered(i64, i64), // id, new order value
    ReorderTargetNotFound(i64),

    // === COMPLETED-TASK CLEANUP ===
    ConfirmClearCompleted(usize),
    CompletedTasksCleared(usize),
    NothingToClear,

    // === TAG MESSAGES ===
    NoTagsFound,
    TagListHeader,
    TasksWithTagHeader(String),
    NoTasksWithTag(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    CoachNotConfigured,

    // === AI COACH MESSAGES ===
    CoachUnavailable(String), // underlying error text
    CoachSuggestionsHeader(usize),
    NoSuggestions,
    ConfirmCreateSuggested(usize),
    BreakdownCreated(usize),

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // output path
    NoTasksToExport,

    // === MIGRATION MESSAGES ===
    MigrationApplied(u32, String),
    MigrationsComplete(u32), // current schema version

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptSelectModules,

    // === GENERIC ===
    OperationCancelled,
}
