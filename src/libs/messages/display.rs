//! Display implementation for mindmesh application messages.
//!
//! Converts structured [`Message`] variants into the human-readable text
//! shown in the terminal. Keeping every user-facing string in one place
//! keeps wording consistent and makes future localization straightforward.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TasksDeletedCount(count) => format!("{} task(s) deleted", count),
            Message::TaskNotFound(id) => format!("Task with id {} not found", id),
            Message::TaskStarted(title) => format!("Task '{}' is now in progress", title),
            Message::TaskCompleted(title) => format!("Task '{}' completed", title),
            Message::TaskCancelled(title) => format!("Task '{}' cancelled", title),
            Message::TaskAlreadyCompleted(id) => format!("Task {} is already completed", id),
            Message::NoTasksFound => "No tasks yet. Create your first task or try the breakdown command!".to_string(),
            Message::TaskListHeader => "Your tasks".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::SubtasksCreated(count) => format!("{} subtask(s) created", count),

            // === RECURRENCE MESSAGES ===
            Message::RecurrenceScheduled(title, date) => format!("Next occurrence of '{}' scheduled for {}", title, date),
            Message::RecurrenceSeriesEnded(title) => format!("Recurring series for '{}' has ended", title),

            // === ORDERING MESSAGES ===
            Message::TaskReordered(id, order) => format!("Task {} moved (order {})", id, order),
            Message::ReorderTargetNotFound(id) => format!("Cannot move: task {} not found", id),

            // === COMPLETED-TASK CLEANUP ===
            Message::ConfirmClearCompleted(count) => format!("Remove {} completed task(s)?", count),
            Message::CompletedTasksCleared(count) => format!("{} completed task(s) removed", count),
            Message::NothingToClear => "No completed tasks to remove".to_string(),

            // === TAG MESSAGES ===
            Message::NoTagsFound => "No tags in use".to_string(),
            Message::TagListHeader => "Tags in use".to_string(),
            Message::TasksWithTagHeader(tag) => format!("Tasks tagged '{}'", tag),
            Message::NoTasksWithTag(tag) => format!("No tasks tagged '{}'", tag),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::CoachNotConfigured => "AI coach is not configured. Run 'mindmesh init' to set it up".to_string(),

            // === AI COACH MESSAGES ===
            Message::CoachUnavailable(err) => format!("AI coach unavailable ({}), continuing without suggestions", err),
            Message::CoachSuggestionsHeader(count) => format!("The coach suggests {} task(s)", count),
            Message::NoSuggestions => "The coach had no suggestions for this input".to_string(),
            Message::ConfirmCreateSuggested(count) => format!("Create {} suggested task(s)?", count),
            Message::BreakdownCreated(count) => format!("{} task(s) created from breakdown", count),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Tasks exported to {}", path),
            Message::NoTasksToExport => "No tasks to export".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationApplied(version, name) => format!("Applied migration v{}: {}", version, name),
            Message::MigrationsComplete(version) => format!("Database schema is up to date (v{})", version),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),

            // === GENERIC ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}
