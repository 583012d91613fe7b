#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskMarkedDone(String),
    TaskMarkedUndone(String),
    TasksHeader(String), // list name
    AllTasksHeader,
    TasksNotFound,
    EmptyTaskSkipped,
    InvalidDueDate(String),

    // === CHECK LIST MESSAGES ===
    CheckListCreated(String),
    CheckListNotFound(String),
    CheckListsHeader,
    NoCheckLists,
    DefaultCheckListCreated(String),

    // === STORE MESSAGES ===
    StoreCallFailed(i32, String), // status, message
    StoreClosed,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleStore,
    ConfigModuleWindow,
    ConfigParseError(String),

    // === PROMPTS ===
    PromptDatabaseFile,
    PromptDefaultListName,
    PromptPlaceholder,

    // === WINDOW ===
    WindowTitle,
    ListsTitle,
    TasksTitle(String), // selected list name
    NewListButton,
    NewListTitle,
    NewListPlaceholder,
    TaskPlaceholder,
    NoTasksInList,
    ErrorTitle,
    DismissHint,
    WindowHelp,
    WindowOpened(String), // database path
    WindowClosed,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseUpToDate,
}
