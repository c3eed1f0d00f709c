//! Database layer for the mindmesh application.
//!
//! SQLite-backed persistence for tasks, with a versioned migration system
//! applied on every database open. The task store owns identity assignment
//! and status bookkeeping; everything above it works with plain [`Task`]
//! values.
//!
//! [`Task`]: crate::libs::task::Task

pub mod db;
pub mod migrations;
pub mod tasks;
