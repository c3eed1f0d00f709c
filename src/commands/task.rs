//! Task lifecycle commands.
//!
//! Covers creation (optionally consulting the AI coach for a priority
//! suggestion), listing as an indented hierarchy, editing, status
//! transitions, drag-style reordering, and cleanup of completed tasks.
//! Completing a recurring task materializes its next occurrence through the
//! recurrence engine.

use crate::{
    api::coach::{Coach, CoachRequest, CoachRequestKind},
    db::tasks::Tasks,
    libs::{
        config::Config,
        messages::Message,
        recurrence,
        reorder::{self, ReorderError},
        task::{Priority, RecurrencePattern, Status, Task, TaskFilter},
        tree::TaskTree,
        view::View,
    },
    msg_error, msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: Option<TaskCommand>,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a new task
    New {
        /// Task title; prompted interactively when omitted
        title: Option<String>,
        /// Longer description
        #[arg(short, long)]
        description: Option<String>,
        /// Task priority
        #[arg(short, long, value_enum)]
        priority: Option<Priority>,
        /// Due date, as YYYY-MM-DD or "YYYY-MM-DD HH:MM"
        #[arg(long)]
        due: Option<String>,
        /// Recurrence pattern for regenerating the task after completion
        #[arg(long, value_enum)]
        recur: Option<RecurrencePattern>,
        /// Last date on which an occurrence may fall (YYYY-MM-DD)
        #[arg(long)]
        until: Option<NaiveDate>,
        /// Parent task id, making this a subtask
        #[arg(long)]
        parent: Option<i64>,
        /// Tags; repeat the flag for multiple
        #[arg(short, long = "tag")]
        tags: Vec<String>,
        /// Advisory complexity estimate (1-5)
        #[arg(long)]
        complexity: Option<i64>,
        /// Ask the AI coach for a priority suggestion
        #[arg(long)]
        ai: bool,
    },
    /// List tasks as a hierarchy
    List,
    /// Edit a task interactively
    Edit {
        /// Task id to edit
        id: i64,
    },
    /// Mark a task as in progress
    Start {
        /// Task id
        id: i64,
    },
    /// Complete a task, scheduling the next occurrence if it recurs
    Done {
        /// Task id
        id: i64,
    },
    /// Cancel a task
    Cancel {
        /// Task id
        id: i64,
    },
    /// Delete one or more tasks
    Delete {
        /// Task ids to delete
        ids: Vec<i64>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Move a task directly after another task
    Move {
        /// Task id to move
        id: i64,
        /// Task id to place it after
        target: i64,
    },
    /// Remove all completed tasks
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn cmd(args: TaskArgs) -> Result<()> {
    match args.command {
        Some(TaskCommand::New {
            title,
            description,
            priority,
            due,
            recur,
            until,
            parent,
            tags,
            complexity,
            ai,
        }) => handle_new(title, description, priority, due, recur, until, parent, tags, complexity, ai).await,
        Some(TaskCommand::List) | None => handle_list(),
        Some(TaskCommand::Edit { id }) => handle_edit(id),
        Some(TaskCommand::Start { id }) => handle_start(id),
        Some(TaskCommand::Done { id }) => handle_done(id),
        Some(TaskCommand::Cancel { id }) => handle_cancel(id),
        Some(TaskCommand::Delete { ids, yes }) => handle_delete(ids, yes),
        Some(TaskCommand::Move { id, target }) => handle_move(id, target),
        Some(TaskCommand::Clear { yes }) => handle_clear(yes),
    }
}

#[allow(clippy::too_many_arguments)]
async fn handle_new(
    title: Option<String>,
    description: Option<String>,
    priority: Option<Priority>,
    due: Option<String>,
    recur: Option<RecurrencePattern>,
    until: Option<NaiveDate>,
    parent: Option<i64>,
    tags: Vec<String>,
    complexity: Option<i64>,
    ai: bool,
) -> Result<()> {
    let theme = ColorfulTheme::default();
    let title = match title {
        Some(t) => t,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptTaskTitle.to_string())
            .interact_text()?,
    };
    let description = match description {
        Some(d) => d,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptTaskDescription.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    let mut tasks_db = Tasks::new()?;

    let mut task = Task::new(&title, &description, priority.unwrap_or_default());
    task.due_date = due.as_deref().map(parse_due).transpose()?;
    task.recurrence_pattern = recur;
    task.recurrence_end_date = until;
    task.parent_task_id = parent;
    task.tags = tags;
    if let Some(c) = complexity {
        task.complexity = Task::clamp_complexity(c);
    }

    // The coach is advisory: any failure degrades to the user's own priority
    if ai && priority.is_none() {
        if let Some(suggested) = suggest_priority(&mut tasks_db, &title, &description).await? {
            task.priority = suggested;
        }
    }

    let created = tasks_db.create(&task)?;
    msg_success!(Message::TaskCreated(created.title));
    Ok(())
}

async fn suggest_priority(tasks_db: &mut Tasks, title: &str, description: &str) -> Result<Option<Priority>> {
    let config = Config::read()?;
    let Some(coach_config) = config.coach else {
        msg_info!(Message::CoachNotConfigured);
        return Ok(None);
    };

    let existing = tasks_db.fetch(TaskFilter::All)?;
    let request = CoachRequest::new(format!("{}. {}", title, description), CoachRequestKind::Task, &existing, &coach_config);
    match Coach::new(&coach_config)?.get_coaching_response(&request).await {
        Ok(response) => Ok(response.priority_suggestion),
        Err(e) => {
            msg_warning!(Message::CoachUnavailable(e.to_string()));
            Ok(None)
        }
    }
}

fn handle_list() -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let mut tasks = tasks_db.fetch(TaskFilter::All)?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    reorder::sort_for_display(&mut tasks);
    let tree = TaskTree::build(tasks);
    msg_print!(Message::TaskListHeader, true);
    View::tasks(&tree).map_err(|e| msg_error_anyhow!(e.to_string()))?;
    Ok(())
}

fn handle_edit(id: i64) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let Some(mut task) = tasks_db.get_by_id(id)? else {
        msg_error!(Message::TaskNotFound(id));
        return Ok(());
    };

    let theme = ColorfulTheme::default();
    task.title = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .with_initial_text(task.title.clone())
        .interact_text()?;
    task.description = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .with_initial_text(task.description.clone())
        .allow_empty(true)
        .interact_text()?;

    tasks_db.update(&task)?;
    msg_success!(Message::TaskUpdated(task.title));
    Ok(())
}

fn handle_start(id: i64) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    if tasks_db.get_by_id(id)?.is_none() {
        msg_error!(Message::TaskNotFound(id));
        return Ok(());
    }
    let task = tasks_db.set_status(id, Status::InProgress, Local::now().naive_local())?;
    msg_success!(Message::TaskStarted(task.title));
    Ok(())
}

/// Completes a task and, when it recurs, materializes the next occurrence.
///
/// The new occurrence only exists once the store's create call succeeds; a
/// persistence failure surfaces to the user and nothing is retried.
fn handle_done(id: i64) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let Some(task) = tasks_db.get_by_id(id)? else {
        msg_error!(Message::TaskNotFound(id));
        return Ok(());
    };
    if task.is_completed() {
        msg_info!(Message::TaskAlreadyCompleted(id));
        return Ok(());
    }

    let now = Local::now().naive_local();
    let completed = tasks_db.set_status(id, Status::Completed, now)?;
    msg_success!(Message::TaskCompleted(completed.title.clone()));

    if completed.recurrence_pattern.is_some() {
        match recurrence::maybe_regenerate(&completed, now) {
            Some(next) => {
                let created = tasks_db.create(&next)?;
                let due = created.due_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
                msg_info!(Message::RecurrenceScheduled(created.title, due));
            }
            None => msg_info!(Message::RecurrenceSeriesEnded(completed.title)),
        }
    }
    Ok(())
}

fn handle_cancel(id: i64) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    if tasks_db.get_by_id(id)?.is_none() {
        msg_error!(Message::TaskNotFound(id));
        return Ok(());
    }
    let task = tasks_db.set_status(id, Status::Cancelled, Local::now().naive_local())?;
    msg_success!(Message::TaskCancelled(task.title));
    Ok(())
}

fn handle_delete(ids: Vec<i64>, yes: bool) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let found = tasks_db.fetch(TaskFilter::ByIds(ids.clone()))?;
    if found.is_empty() {
        for id in &ids {
            msg_error!(Message::TaskNotFound(*id));
        }
        return Ok(());
    }

    if !yes {
        let titles: Vec<String> = found.iter().map(|t| t.title.clone()).collect();
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(titles.join(", ")).to_string())
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let found_ids: Vec<i64> = found.iter().filter_map(|t| t.id).collect();
    if let [id] = found_ids[..] {
        tasks_db.delete(id)?;
        msg_success!(Message::TaskDeleted(id));
    } else {
        let deleted = tasks_db.delete_many(&found_ids)?;
        msg_success!(Message::TasksDeletedCount(deleted));
    }
    Ok(())
}

/// Applies the reorder calculator and writes the result through the store.
fn handle_move(id: i64, target: i64) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let tasks = tasks_db.fetch(TaskFilter::All)?;

    match reorder::compute_reorder(id, target, &tasks) {
        Ok(new_order) => {
            tasks_db.set_order(id, new_order)?;
            msg_success!(Message::TaskReordered(id, new_order));
        }
        Err(ReorderError::TargetNotFound(missing)) => {
            msg_error!(Message::ReorderTargetNotFound(missing));
        }
    }
    Ok(())
}

fn handle_clear(yes: bool) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let completed = tasks_db.fetch(TaskFilter::Completed)?;
    if completed.is_empty() {
        msg_info!(Message::NothingToClear);
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmClearCompleted(completed.len()).to_string())
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let removed = tasks_db.delete_completed()?;
    msg_success!(Message::CompletedTasksCleared(removed));
    Ok(())
}

/// Parses a due date given as `YYYY-MM-DD` or `YYYY-MM-DD HH:MM`.
fn parse_due(input: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M") {
        return Ok(dt);
    }
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")?;
    Ok(date.and_time(chrono::NaiveTime::MIN))
}
