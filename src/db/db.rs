use super::migrations::migrate;
use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DB_FILE_NAME: &str = "tasks.db";

pub struct Db {
    pub conn: Connection,
    path: PathBuf,
}

impl Db {
    /// Opens (or creates) the database file at `path` and brings the schema up to date.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        let path = path.as_ref().to_path_buf();
        let mut conn = Self::connect(&path)?;
        migrate(&mut conn)?;
        debug!(path = %path.display(), "database opened");

        Ok(Db { conn, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Closes the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> Result<()> {
        let path = self.path;
        self.conn.close().map_err(|(_, e)| e)?;
        debug!(path = %path.display(), "database closed");
        Ok(())
    }

    fn connect(path: &Path) -> Result<Connection> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(conn)
    }
}
