use super::task::Task;
use super::tree::TaskTree;
use crate::api::coach::TaskSuggestion;
use prettytable::{row, Table};
use std::error::Error;

pub struct View {}

impl View {
    /// Renders the task hierarchy as a table, indenting subtasks under
    /// their parents.
    pub fn tasks(tree: &TaskTree) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "PRIORITY", "STATUS", "DUE", "RECUR", "TAGS"]);
        for (task, depth) in tree.walk() {
            let indent = "  ".repeat(depth);
            table.add_row(row![
                task.id.unwrap_or(0),
                format!("{}{}", indent, task.title),
                task.priority,
                task.status,
                task.due_date.map(|d| d.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_default(),
                task.recurrence_pattern.map(|p| p.to_string()).unwrap_or_default(),
                task.tags.join(", ")
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders a flat task list without hierarchy, used for tag filters.
    pub fn task_list(tasks: &[Task]) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "PRIORITY", "STATUS", "DUE"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.title,
                task.priority,
                task.status,
                task.due_date.map(|d| d.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn tags(tags: &[(String, usize)]) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["TAG", "TASKS"]);
        for (name, count) in tags {
            table.add_row(row![name, count]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders AI coach task suggestions for review before creation.
    pub fn suggestions(suggestions: &[TaskSuggestion]) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["#", "TITLE", "PRIORITY", "COMPLEXITY", "SUBTASKS", "TAGS"]);
        for (idx, s) in suggestions.iter().enumerate() {
            table.add_row(row![
                idx + 1,
                s.title,
                s.priority,
                s.complexity,
                s.subtasks.len(),
                s.tags.join(", ")
            ]);
        }
        table.printstd();

        Ok(())
    }
}
