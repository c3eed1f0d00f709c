//! Database schema migration management and versioning.
//!
//! Schema changes are expressed as ordered, versioned migrations that run
//! inside transactions and are recorded in a tracking table. Opening the
//! database applies anything pending, so every command sees the current
//! schema without a separate upgrade step.

use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// SQL schema for the migrations tracking table.
///
/// Each applied migration is recorded with its version, name, and timestamp,
/// providing an audit trail of schema changes.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema migration: version, descriptive name, and the
/// transformation applied within a transaction.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// Registers the complete schema evolution history.
    ///
    /// Migrations must stay in sequential version order; each builds on the
    /// schema produced by its predecessors.
    fn register_migrations(&mut self) {
        // Version 1: base tasks table
        self.add_migration(1, "create_tasks_table", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER NOT NULL PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        priority TEXT NOT NULL DEFAULT 'medium',
        status TEXT NOT NULL DEFAULT 'pending',
        due_date TIMESTAMP,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        completed_at TIMESTAMP
    )",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks(status)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_due_date ON tasks(due_date)", [])?;
            Ok(())
        });

        // Version 2: recurring-task support
        self.add_migration(2, "add_recurrence_fields", |tx| {
            tx.execute("ALTER TABLE tasks ADD COLUMN recurrence_pattern TEXT", [])?;
            tx.execute("ALTER TABLE tasks ADD COLUMN recurrence_end_date DATE", [])?;
            Ok(())
        });

        // Version 3: ordering, hierarchy, tags, and complexity
        self.add_migration(3, "add_ordering_hierarchy_and_tags", |tx| {
            tx.execute("ALTER TABLE tasks ADD COLUMN task_order INTEGER NOT NULL DEFAULT 0", [])?;
            tx.execute("ALTER TABLE tasks ADD COLUMN parent_task_id INTEGER", [])?;
            tx.execute("ALTER TABLE tasks ADD COLUMN tags TEXT NOT NULL DEFAULT '[]'", [])?;
            tx.execute("ALTER TABLE tasks ADD COLUMN complexity INTEGER NOT NULL DEFAULT 3", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_task_order ON tasks(task_order)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_parent ON tasks(parent_task_id)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies all pending migrations, each in its own transaction.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;
        let current = get_db_version(conn)?;

        for migration in &self.migrations {
            if migration.version <= current {
                continue;
            }
            let tx = conn.transaction()?;
            (migration.up)(&tx)?;
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
            tx.commit()?;
            msg_debug!(Message::MigrationApplied(migration.version, migration.name.to_string()));
        }

        msg_debug!(Message::MigrationsComplete(get_db_version(conn)?));
        Ok(())
    }

    /// Returns whether a specific migration version has been applied.
    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        let count: u32 = conn.query_row("SELECT COUNT(*) FROM migrations WHERE version = ?1", params![version], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Returns the applied migrations as `(version, name)` pairs in order.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String)>> {
        let mut stmt = conn.prepare("SELECT version, name FROM migrations ORDER BY version")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        let mut history = Vec::new();
        for row in rows {
            history.push(row?);
        }
        Ok(history)
    }

    fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Ensures the migration infrastructure exists and applies pending changes.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

/// Returns the current schema version (0 for an empty database).
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    conn.execute(MIGRATIONS_TABLE, [])?;
    let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
    Ok(version.unwrap_or(0))
}

/// Returns whether any migrations are still pending.
pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(get_db_version(conn)? < manager.latest_version())
}
