//! Task store: CRUD operations over the tasks table.
//!
//! This is the persistence collaborator of the recurrence and ordering
//! engine. It owns identity assignment (row id and initial `task_order`) and
//! the status transition bookkeeping (`completed_at` stamping); the engine
//! itself never touches the database. Persistence failures propagate
//! unchanged to the caller, which performs no implicit retry.

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::task::{Priority, RecurrencePattern, Status, Task, TaskFilter};
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::collections::BTreeMap;

const TASK_COLUMNS: &str = "id, title, description, priority, status, due_date, recurrence_pattern, recurrence_end_date, task_order, parent_task_id, tags, complexity, created_at, completed_at";

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, priority, status, due_date, recurrence_pattern, recurrence_end_date, task_order, parent_task_id, tags, complexity)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, (SELECT COALESCE(MAX(task_order), -1) + 1 FROM tasks), ?8, ?9, ?10)";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, priority = ?4, due_date = ?5, recurrence_pattern = ?6, recurrence_end_date = ?7, tags = ?8, complexity = ?9 WHERE id = ?1";
const UPDATE_STATUS: &str = "UPDATE tasks SET status = ?2, completed_at = ?3 WHERE id = ?1";
const UPDATE_ORDER: &str = "UPDATE tasks SET task_order = ?2 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const DELETE_COMPLETED: &str = "DELETE FROM tasks WHERE status = 'completed'";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        let db = Db::new()?;
        Ok(Tasks { conn: db.conn })
    }

    /// Inserts a task and returns it with its store-assigned identity.
    ///
    /// `task_order` is assigned as max + 1 so new tasks append at the end of
    /// the visible list regardless of what the caller put in the field.
    pub fn create(&mut self, task: &Task) -> Result<Task> {
        self.conn.execute(
            INSERT_TASK,
            params![
                task.title,
                task.description,
                task.priority.as_str(),
                task.status.as_str(),
                task.due_date,
                task.recurrence_pattern.map(|p| p.as_str()),
                task.recurrence_end_date,
                task.parent_task_id,
                serde_json::to_string(&task.tags)?,
                Task::clamp_complexity(task.complexity),
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        self.get_by_id(id)?.ok_or_else(|| msg_error_anyhow!(Message::TaskNotFound(id)))
    }

    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>> {
        let select = format!("SELECT {} FROM tasks", TASK_COLUMNS);
        let (sql, string_params): (String, Vec<String>) = match filter {
            TaskFilter::All => (select, vec![]),
            TaskFilter::Open => (format!("{} WHERE status IN ('pending', 'in_progress')", select), vec![]),
            TaskFilter::Completed => (format!("{} WHERE status = 'completed'", select), vec![]),
            TaskFilter::ByIds(ids) => (
                format!("{} WHERE id IN ({})", select, vec!["?"; ids.len()].join(", ")),
                ids.iter().map(|id| id.to_string()).collect(),
            ),
            // Tags are stored as a JSON array; a quoted-substring match finds
            // exact tag membership without a join table.
            TaskFilter::ByTag(tag) => (format!("{} WHERE tags LIKE ?", select), vec![format!("%\"{}\"%", tag)]),
            TaskFilter::ChildrenOf(parent_id) => (format!("{} WHERE parent_task_id = ?", select), vec![parent_id.to_string()]),
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(params_from_iter(string_params.iter()), Self::map_row)?;
        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        let sql = format!("SELECT {} FROM tasks WHERE id = ?1", TASK_COLUMNS);
        Ok(self.conn.query_row(&sql, params![id], Self::map_row).optional()?)
    }

    /// Updates a task's editable fields. Status transitions go through
    /// [`Tasks::set_status`] so `completed_at` stamping stays in one place.
    pub fn update(&mut self, task: &Task) -> Result<()> {
        let Some(id) = task.id else {
            anyhow::bail!("Cannot update a task that has not been persisted yet");
        };
        let affected = self.conn.execute(
            UPDATE_TASK,
            params![
                id,
                task.title,
                task.description,
                task.priority.as_str(),
                task.due_date,
                task.recurrence_pattern.map(|p| p.as_str()),
                task.recurrence_end_date,
                serde_json::to_string(&task.tags)?,
                Task::clamp_complexity(task.complexity),
            ],
        )?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFound(id)));
        }
        Ok(())
    }

    /// Applies a status transition, stamping `completed_at` exactly when the
    /// task transitions to completed and clearing it otherwise.
    pub fn set_status(&mut self, id: i64, status: Status, now: NaiveDateTime) -> Result<Task> {
        let completed_at = if status == Status::Completed { Some(now) } else { None };
        let affected = self.conn.execute(UPDATE_STATUS, params![id, status.as_str(), completed_at])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFound(id)));
        }
        self.get_by_id(id)?.ok_or_else(|| msg_error_anyhow!(Message::TaskNotFound(id)))
    }

    /// Writes a new order value computed by the reorder calculator.
    pub fn set_order(&mut self, id: i64, task_order: i64) -> Result<()> {
        let affected = self.conn.execute(UPDATE_ORDER, params![id, task_order])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFound(id)));
        }
        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> Result<usize> {
        Ok(self.conn.execute(DELETE_TASK, params![id])?)
    }

    pub fn delete_many(&mut self, ids: &[i64]) -> Result<usize> {
        let sql = format!("DELETE FROM tasks WHERE id IN ({})", vec!["?"; ids.len()].join(", "));
        Ok(self.conn.execute(&sql, params_from_iter(ids.iter()))?)
    }

    pub fn delete_completed(&mut self) -> Result<usize> {
        Ok(self.conn.execute(DELETE_COMPLETED, [])?)
    }

    /// Returns each tag in use with the number of tasks carrying it,
    /// sorted by name.
    pub fn tag_counts(&mut self) -> Result<Vec<(String, usize)>> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for task in self.fetch(TaskFilter::All)? {
            for tag in task.tags {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }
        Ok(counts.into_iter().collect())
    }

    fn map_row(row: &Row) -> rusqlite::Result<Task> {
        let priority: String = row.get(3)?;
        let status: String = row.get(4)?;
        let recurrence: Option<String> = row.get(6)?;
        let tags_json: String = row.get(10)?;

        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            priority: Priority::parse(&priority),
            status: Status::parse(&status),
            due_date: row.get::<_, Option<NaiveDateTime>>(5)?,
            // Unknown pattern text parses to None: no recurrence
            recurrence_pattern: recurrence.as_deref().and_then(RecurrencePattern::parse),
            recurrence_end_date: row.get::<_, Option<NaiveDate>>(7)?,
            task_order: row.get(8)?,
            parent_task_id: row.get(9)?,
            tags: serde_json::from_str(&tags_json).unwrap_or_default(),
            complexity: row.get(11)?,
            created_at: row.get::<_, Option<NaiveDateTime>>(12)?,
            completed_at: row.get::<_, Option<NaiveDateTime>>(13)?,
        })
    }
}
