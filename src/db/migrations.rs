//! Versioned schema migrations.
//!
//! Pending steps run inside one transaction when a file is opened and each is
//! recorded in the `migrations` table, so opening an up-to-date file changes
//! nothing.
//!
//! ```rust,no_run
//! use ticklist::db::migrations::{migrate, Migrator};
//!
//! let mut conn = rusqlite::Connection::open("tasks.db")?;
//! migrate(&mut conn)?;
//! assert_eq!(Migrator::new().current_version(&conn)?, 2);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use anyhow::{Context, Result};
use rusqlite::{named_params, Connection, OptionalExtension};

const CREATE_MIGRATIONS_TABLE: &str = "CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";
const RECORD_MIGRATION: &str = "INSERT INTO migrations (version, name) VALUES (:version, :name)";
const SELECT_VERSION: &str = "SELECT MAX(version) FROM migrations";

/// One schema step: statements executed in order.
#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    name: &'static str,
    statements: &'static [&'static str],
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_check_lists_and_tasks",
        statements: &[
            "CREATE TABLE IF NOT EXISTS CheckLists (
                ID INTEGER NOT NULL PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT ''
            )",
            "CREATE TABLE IF NOT EXISTS Tasks (
                ID INTEGER NOT NULL PRIMARY KEY,
                dueDate TEXT NOT NULL DEFAULT '',
                description TEXT NOT NULL,
                done BOOLEAN NOT NULL DEFAULT FALSE,
                checkListID INTEGER,
                FOREIGN KEY (checkListID) REFERENCES CheckLists(ID) ON DELETE CASCADE ON UPDATE CASCADE
            )",
        ],
    },
    // Tasks are always read one list at a time
    Migration {
        version: 2,
        name: "index_tasks_by_check_list",
        statements: &["CREATE INDEX IF NOT EXISTS idx_tasks_check_list ON Tasks(checkListID)"],
    },
];

/// Applies the registered migrations.
#[derive(Debug, Clone, Copy)]
pub struct Migrator {
    migrations: &'static [Migration],
}

impl Migrator {
    pub fn new() -> Self {
        Migrator { migrations: MIGRATIONS }
    }

    /// Runs every migration newer than the recorded version. Returns how many ran.
    pub fn apply(&self, conn: &mut Connection) -> Result<usize> {
        conn.execute(CREATE_MIGRATIONS_TABLE, [])?;

        let current = self.current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current).collect();
        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(0);
        }
        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in &pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            let outcome = migration
                .statements
                .iter()
                .try_for_each(|sql| tx.execute(sql, []).map(|_| ()))
                .with_context(|| format!("migration {} ({})", migration.version, migration.name));
            if let Err(e) = outcome {
                msg_error!(Message::MigrationFailed(migration.version, format!("{:#}", e)));
                return Err(e);
            }

            tx.execute(
                RECORD_MIGRATION,
                named_params! {":version": migration.version, ":name": migration.name},
            )?;
        }
        tx.commit()?;

        msg_debug!(Message::AllMigrationsCompleted);
        Ok(pending.len())
    }

    /// Highest applied version; `0` for a file that was never migrated.
    pub fn current_version(&self, conn: &Connection) -> Result<u32> {
        if !has_migrations_table(conn)? {
            return Ok(0);
        }
        let version: Option<u32> = conn.query_row(SELECT_VERSION, [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }
}

impl Default for Migrator {
    fn default() -> Self {
        Self::new()
    }
}

fn has_migrations_table(conn: &Connection) -> Result<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'migrations'",
            [],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Brings the schema of `conn` up to date.
pub fn migrate(conn: &mut Connection) -> Result<usize> {
    Migrator::new().apply(conn)
}
