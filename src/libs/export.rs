//! Task export for backup and external analysis.
//!
//! Supports CSV for spreadsheet tools and JSON for programmatic processing.
//! All fields are flattened to strings so both formats stay readable and
//! diff-friendly.

use crate::db::tasks::Tasks;
use crate::libs::{messages::Message, task::{Task, TaskFilter}};
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;

/// Enumeration of supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for universal compatibility.
    Csv,
    /// Pretty-printed JSON for structured processing.
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flattened task representation used in export files.
#[derive(Debug, Serialize)]
pub struct ExportTask {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub due_date: String,
    pub recurrence_pattern: String,
    pub recurrence_end_date: String,
    pub tags: String,
    pub complexity: i64,
    pub created_at: String,
    pub completed_at: String,
}

impl From<&Task> for ExportTask {
    fn from(task: &Task) -> Self {
        ExportTask {
            id: task.id.unwrap_or(0),
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority.to_string(),
            status: task.status.to_string(),
            due_date: task.due_date.map(|d| d.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_default(),
            recurrence_pattern: task.recurrence_pattern.map(|p| p.to_string()).unwrap_or_default(),
            recurrence_end_date: task.recurrence_end_date.map(|d| d.to_string()).unwrap_or_default(),
            tags: task.tags.join(";"),
            complexity: task.complexity,
            created_at: task.created_at.map(|d| d.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_default(),
            completed_at: task.completed_at.map(|d| d.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_default(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Self { format, output }
    }

    /// Exports all tasks to the selected format and reports the output path.
    pub fn export(&self) -> Result<()> {
        let tasks = Tasks::new()?.fetch(TaskFilter::All)?;
        if tasks.is_empty() {
            msg_info!(Message::NoTasksToExport);
            return Ok(());
        }

        let rows: Vec<ExportTask> = tasks.iter().map(ExportTask::from).collect();
        let path = self.output.clone().unwrap_or_else(|| self.default_filename());

        match self.format {
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_path(&path)?;
                for row in &rows {
                    writer.serialize(row)?;
                }
                writer.flush()?;
            }
            ExportFormat::Json => {
                let file = File::create(&path)?;
                serde_json::to_writer_pretty(file, &rows)?;
            }
        }

        msg_success!(Message::ExportCompleted(path.display().to_string()));
        Ok(())
    }

    fn default_filename(&self) -> PathBuf {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        PathBuf::from(format!("mindmesh_tasks_{}.{}", timestamp, self.format.extension()))
    }
}
