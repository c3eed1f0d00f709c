use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, reorder, task::TaskFilter, view::View},
    msg_error_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TagArgs {
    #[command(subcommand)]
    command: Option<TagCommand>,
}

#[derive(Debug, Subcommand)]
enum TagCommand {
    /// List all tags in use with task counts
    List,
    /// Show tasks with a specific tag
    Tasks {
        /// Tag name
        tag: String,
    },
}

pub fn cmd(args: TagArgs) -> Result<()> {
    match args.command {
        Some(TagCommand::List) | None => handle_list(),
        Some(TagCommand::Tasks { tag }) => handle_show_tasks(tag),
    }
}

fn handle_list() -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let tags = tasks_db.tag_counts()?;

    if tags.is_empty() {
        msg_info!(Message::NoTagsFound);
        return Ok(());
    }

    msg_print!(Message::TagListHeader, true);
    View::tags(&tags).map_err(|e| msg_error_anyhow!(e.to_string()))?;
    Ok(())
}

fn handle_show_tasks(tag: String) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let mut tasks = tasks_db.fetch(TaskFilter::ByTag(tag.clone()))?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasksWithTag(tag));
        return Ok(());
    }

    reorder::sort_for_display(&mut tasks);
    msg_print!(Message::TasksWithTagHeader(tag), true);
    View::task_list(&tasks).map_err(|e| msg_error_anyhow!(e.to_string()))?;
    Ok(())
}
