//! # MindMesh - personal task management for easily distracted minds
//!
//! A command-line utility for managing tasks with recurring schedules,
//! subtask hierarchies, tags, and AI-assisted workload breakdown.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, reorder, and track task completion
//! - **Recurring Tasks**: Daily, weekly, monthly, and yearly schedules that
//!   regenerate when a task is completed
//! - **Subtask Trees**: Nest tasks under parents and view them as a hierarchy
//! - **Tag System**: Organize tasks with free-text labels
//! - **AI Breakdown**: Turn an overwhelming brain dump into concrete tasks
//!   via an external coaching endpoint
//! - **Data Export**: Export tasks to CSV and JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mindmesh::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
