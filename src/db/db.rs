use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "mindmesh.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the application database, applying any pending migrations.
    pub fn new() -> Result<Db> {
        let mut conn = Self::open()?;
        migrations::init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }

    /// Opens a raw connection without running migrations. Used by migration
    /// tests and tooling that manages schema versions explicitly.
    pub fn new_without_migrations() -> Result<Connection> {
        Self::open()
    }

    fn open() -> Result<Connection> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        Ok(Connection::open(db_file_path)?)
    }
}
