use crate::libs::outcome::Rejection;

#[derive(Debug, Clone)]
pub enum Message {
    // === WINDOW MESSAGES ===
    WindowTitle(String),
    SelectAction,
    Goodbye,

    // === LIST MESSAGES ===
    ListCreated(String),
    ListSelected(String),
    ListDeleted(String, usize), // name, tasks removed
    ListsHeader,
    NoListsFound,
    ListNotFound(String),
    ConfirmDeleteList(String),

    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskCompleted(String),
    TaskReopened(String),
    TaskDeleted(String),
    TasksDeletedCount(usize),
    TasksHeader(String), // list name
    NoListSelectedHint,
    NoTasksInList(String),
    EmptyTaskPanel,
    TaskNotFoundWithId(i64),
    ConfirmDeleteAllTasks(String, usize), // list name, count

    // === VALIDATION MESSAGES ===
    Rejected(Rejection),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError(String),
    UsingDatabase(String),

    // === PROMPTS ===
    PromptListName,
    PromptTaskTitle,
    PromptSelectList,
    PromptToggleTasks,
    PromptDatabasePath,
    PromptWindowTitle,

    // === GENERAL MESSAGES ===
    OperationCancelled,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    NoMigrationsApplied,
}
