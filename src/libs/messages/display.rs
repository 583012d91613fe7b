//! User-facing text for every [`Message`].

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(description) => format!("Task '{}' added", description),
            Message::TaskMarkedDone(description) => format!("Task '{}' checked off", description),
            Message::TaskMarkedUndone(description) => format!("Task '{}' reopened", description),
            Message::TasksHeader(name) => format!("Tasks in '{}':", name),
            Message::AllTasksHeader => "All tasks:".to_string(),
            Message::TasksNotFound => "No tasks yet".to_string(),
            Message::EmptyTaskSkipped => "Empty task skipped".to_string(),
            Message::InvalidDueDate(value) => format!("Invalid due date '{}': use YYYY-MM-DD", value),

            // === CHECK LIST MESSAGES ===
            Message::CheckListCreated(name) => format!("Check list '{}' created", name),
            Message::CheckListNotFound(key) => format!("Check list '{}' not found", key),
            Message::CheckListsHeader => "Check lists:".to_string(),
            Message::NoCheckLists => "No check lists yet".to_string(),
            Message::DefaultCheckListCreated(name) => format!("Created default check list '{}'", name),

            // === STORE MESSAGES ===
            Message::StoreCallFailed(status, message) => format!("[{}] {}", status, message),
            Message::StoreClosed => "Database connection closed".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleStore => "Store".to_string(),
            Message::ConfigModuleWindow => "Window".to_string(),
            Message::ConfigParseError(e) => format!("Failed to parse configuration: {}", e),

            // === PROMPTS ===
            Message::PromptDatabaseFile => "Database file (empty for default)".to_string(),
            Message::PromptDefaultListName => "Name of the list created on first start".to_string(),
            Message::PromptPlaceholder => "Placeholder of the task entry".to_string(),

            // === WINDOW ===
            Message::WindowTitle => "Tasks".to_string(),
            Message::ListsTitle => "Lists".to_string(),
            Message::TasksTitle(name) => name.clone(),
            Message::NewListButton => "\u{FF0B} New List".to_string(),
            Message::NewListTitle => "New List".to_string(),
            Message::NewListPlaceholder => "Name of the new list".to_string(),
            Message::TaskPlaceholder => "Add a task".to_string(),
            Message::NoTasksInList => "Nothing here yet".to_string(),
            Message::ErrorTitle => "Error".to_string(),
            Message::DismissHint => "Press any key".to_string(),
            Message::WindowHelp => "Tab focus · ↑↓ move · Space check · Enter add · n new list · q quit".to_string(),
            Message::WindowOpened(path) => format!("Window opened on {}", path),
            Message::WindowClosed => "Window closed".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, e) => format!("Migration v{} failed: {}", version, e),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
        };
        write!(f, "{}", s)
    }
}
