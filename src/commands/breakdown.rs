//! AI-assisted workload breakdown.
//!
//! Sends a free-text brain dump to the coaching endpoint, previews the
//! suggested tasks, and creates the accepted ones together with their
//! subtasks. The coach is strictly advisory: when the endpoint is missing
//! or unreachable, the command reports it and changes nothing.

use crate::{
    api::coach::{Coach, CoachRequest, CoachRequestKind, TaskSuggestion},
    db::tasks::Tasks,
    libs::{config::Config, messages::Message, task::{Priority, Task, TaskFilter}, view::View},
    msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct BreakdownArgs {
    /// Free-text description of everything on your mind
    #[arg(required = true)]
    input: Vec<String>,

    /// Create the suggested tasks without a confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: BreakdownArgs) -> Result<()> {
    let config = Config::read()?;
    let Some(coach_config) = config.coach else {
        msg_info!(Message::CoachNotConfigured);
        return Ok(());
    };

    let mut tasks_db = Tasks::new()?;
    let existing = tasks_db.fetch(TaskFilter::All)?;
    let request = CoachRequest::new(args.input.join(" "), CoachRequestKind::BrainDump, &existing, &coach_config);

    let response = match Coach::new(&coach_config)?.get_coaching_response(&request).await {
        Ok(response) => response,
        Err(e) => {
            msg_warning!(Message::CoachUnavailable(e.to_string()));
            return Ok(());
        }
    };

    if response.tasks.is_empty() {
        msg_info!(Message::NoSuggestions);
        return Ok(());
    }

    if let Some(message) = &response.message {
        msg_print!(message, true);
    }
    msg_print!(Message::CoachSuggestionsHeader(response.tasks.len()));
    View::suggestions(&response.tasks).map_err(|e| msg_error_anyhow!(e.to_string()))?;

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmCreateSuggested(response.tasks.len()).to_string())
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let mut created_count = 0;
    for suggestion in &response.tasks {
        created_count += create_with_subtasks(&mut tasks_db, suggestion)?;
    }

    msg_success!(Message::BreakdownCreated(created_count));
    Ok(())
}

/// Creates one suggested task and its subtasks, returning how many tasks
/// were persisted.
fn create_with_subtasks(tasks_db: &mut Tasks, suggestion: &TaskSuggestion) -> Result<usize> {
    let mut task = Task::new(&suggestion.title, &suggestion.description, suggestion.priority);
    task.tags = suggestion.tags.clone();
    task.complexity = suggestion.complexity;
    let parent = tasks_db.create(&task)?;

    let mut count = 1;
    for subtask_title in &suggestion.subtasks {
        let mut subtask = Task::new(subtask_title, &format!("Subtask of: {}", suggestion.title), Priority::Medium);
        subtask.parent_task_id = parent.id;
        subtask.tags = vec!["subtask".to_string()];
        subtask.complexity = Task::clamp_complexity(suggestion.complexity - 1);
        tasks_db.create(&subtask)?;
        count += 1;
    }
    if count > 1 {
        msg_info!(Message::SubtasksCreated(count - 1));
    }
    Ok(count)
}
