//! SQLite persistence.
//!
//! - [`db`]: connection management; opening a file applies pending migrations
//!   and turns on foreign keys
//! - [`migrations`]: versioned schema changes
//! - [`check_lists`] and [`tasks`]: one accessor per table, borrowing the
//!   connection
//!
//! All user data reaches SQL as bound parameters; table and column names are
//! constants.
//!
//! ```rust,no_run
//! use ticklist::db::{check_lists::CheckLists, db::Db, tasks::Tasks};
//! use ticklist::libs::{check_list::CheckList, task::Task};
//!
//! let db = Db::open("tasks.db")?;
//! let list_id = CheckLists::new(&db.conn).insert(&CheckList::new("Home", ""))?;
//! Tasks::new(&db.conn).insert(&Task::new("Buy milk", "", Some(list_id)))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod check_lists;
pub mod db;
pub mod migrations;
pub mod tasks;

use rusqlite::{Connection, Error, Result};

/// Id of the row just inserted on `conn`; ids outside `i32` are an error, not a wrap.
fn inserted_id(conn: &Connection) -> Result<i32> {
    let rowid = conn.last_insert_rowid();
    i32::try_from(rowid).map_err(|_| Error::IntegralValueOutOfRange(0, rowid))
}
