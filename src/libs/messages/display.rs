//! Display implementation for checkmate application messages.
//!
//! Every line of user-facing text lives here, so the interactive session,
//! the read-only commands and the controller's confirmation prompts all
//! speak with the same voice.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === WINDOW MESSAGES ===
            Message::WindowTitle(title) => format!("♞ {}", title),
            Message::SelectAction => "What would you like to do?".to_string(),
            Message::Goodbye => "Bye!".to_string(),

            // === LIST MESSAGES ===
            Message::ListCreated(name) => format!("List '{}' created", name),
            Message::ListSelected(name) => format!("Switched to list '{}'", name),
            Message::ListDeleted(name, count) => format!("List '{}' deleted together with {} task(s)", name, count),
            Message::ListsHeader => "Lists:".to_string(),
            Message::NoListsFound => "No lists yet. Create one to get started.".to_string(),
            Message::ListNotFound(name) => format!("List '{}' not found", name),
            Message::ConfirmDeleteList(name) => format!("Are you sure you want to delete \"{}\"?", name),

            // === TASK MESSAGES ===
            Message::TaskAdded(title) => format!("Task '{}' added", title),
            Message::TaskCompleted(title) => format!("Task '{}' checked", title),
            Message::TaskReopened(title) => format!("Task '{}' unchecked", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted", title),
            Message::TasksDeletedCount(count) => format!("Deleted {} task(s) successfully.", count),
            Message::TasksHeader(name) => format!("Tasks in '{}':", name),
            Message::NoListSelectedHint => "No list selected".to_string(),
            Message::NoTasksInList(name) => format!("No tasks in '{}'", name),
            Message::EmptyTaskPanel => "No tasks yet".to_string(),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::ConfirmDeleteAllTasks(name, count) => format!("Are you sure? All {} task(s) in '{}' will be deleted.", count, name),

            // === VALIDATION MESSAGES ===
            Message::Rejected(rejection) => rejection.to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError(error) => format!("Failed to parse configuration: {}", error),
            Message::UsingDatabase(path) => format!("Using database {}", path),

            // === PROMPTS ===
            Message::PromptListName => "Enter list name".to_string(),
            Message::PromptTaskTitle => "Enter task".to_string(),
            Message::PromptSelectList => "Select list".to_string(),
            Message::PromptToggleTasks => "Check or uncheck tasks (space to toggle, enter to confirm)".to_string(),
            Message::PromptDatabasePath => "Database file (leave empty for the default location)".to_string(),
            Message::PromptWindowTitle => "Window title".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::NoMigrationsApplied => "No migrations have been applied to this database".to_string(),
        };

        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::outcome::Rejection;

    #[test]
    fn rejection_text_passes_through() {
        let text = Message::Rejected(Rejection::EmptyListName).to_string();
        assert_eq!(text, Rejection::EmptyListName.to_string());
    }

    #[test]
    fn confirm_delete_list_quotes_name() {
        let text = Message::ConfirmDeleteList("Groceries".to_string()).to_string();
        assert_eq!(text, "Are you sure you want to delete \"Groceries\"?");
    }
}
