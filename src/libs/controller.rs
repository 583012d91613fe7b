//! The store operations the rest of the application is allowed to call.
//!
//! [`TaskController`] owns the (optional) database connection and implements
//! [`TaskService`], the narrow interface handed to every window pane and
//! command. Failures never escape as panics or raw driver errors: each one is
//! a [`StoreError`] whose [`Status`] is `1` and whose `Display` text is the
//! message shown to the user.

use crate::db::check_lists::CheckLists;
use crate::db::db::Db;
use crate::db::tasks::{TaskFilter, Tasks};
use crate::libs::check_list::{CheckList, NAME_PATTERN};
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_debug;
use std::fmt;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No database connection")]
    NoConnection,
    #[error("Database statement failed: {0}")]
    Statement(#[from] rusqlite::Error),
    #[error("Invalid check list name '{0}': use 1-20 letters, digits or spaces")]
    Validation(String),
    #[error("Task with ID {0} not found")]
    NotFound(i32),
    #[error("Task has not been saved yet")]
    Unsaved,
}

impl StoreError {
    pub fn status(&self) -> Status {
        Status::Error
    }
}

/// Numeric outcome of a store call: `0` ok, `1` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok = 0,
    Error = 1,
}

impl Status {
    pub fn of<T>(result: &Result<T, StoreError>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => e.status(),
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Create/read/update access to tasks and check lists.
pub trait TaskService {
    /// Stores a new task and returns its assigned id.
    fn add_task(&mut self, task: &Task) -> StoreResult<i32>;

    /// Tasks of one check list in insertion order.
    fn get_tasks(&mut self, list_id: i32) -> StoreResult<Vec<Task>>;

    /// Rewrites the stored row of `task`, keyed by its id.
    fn update_task(&mut self, task: &Task) -> StoreResult<()>;

    /// Validates the name, then stores the list and returns its assigned id.
    fn add_check_list(&mut self, check_list: &CheckList) -> StoreResult<i32>;

    fn get_check_lists(&mut self) -> StoreResult<Vec<CheckList>>;
}

pub struct TaskController {
    db: Option<Db>,
}

impl TaskController {
    pub fn new(db: Db) -> Self {
        TaskController { db: Some(db) }
    }

    /// A controller with no connection; every call fails with [`StoreError::NoConnection`].
    pub fn disconnected() -> Self {
        TaskController { db: None }
    }

    /// Closes the connection. Later calls report [`StoreError::NoConnection`].
    pub fn close(&mut self) -> anyhow::Result<()> {
        if let Some(db) = self.db.take() {
            db.close()?;
            msg_debug!(Message::StoreClosed);
        }
        Ok(())
    }

    pub fn database_path(&self) -> Option<&Path> {
        self.db.as_ref().map(|db| db.path())
    }

    /// Every task in the store regardless of list.
    pub fn get_all_tasks(&mut self) -> StoreResult<Vec<Task>> {
        Ok(Tasks::new(self.conn()?).fetch(TaskFilter::All)?)
    }

    pub fn get_task(&mut self, id: i32) -> StoreResult<Task> {
        Tasks::new(self.conn()?).get_by_id(id)?.ok_or(StoreError::NotFound(id))
    }

    /// Looks a list up by numeric id first, then by exact name.
    pub fn find_check_list(&mut self, key: &str) -> StoreResult<Option<CheckList>> {
        let check_lists = CheckLists::new(self.conn()?);
        if let Ok(id) = key.parse::<i32>() {
            if let Some(check_list) = check_lists.get_by_id(id)? {
                return Ok(Some(check_list));
            }
        }
        Ok(check_lists.get_by_name(key)?)
    }

    /// Creates `name` when the store has no lists yet. Returns the new list's id, if any.
    pub fn ensure_default_check_list(&mut self, name: &str) -> StoreResult<Option<i32>> {
        if CheckLists::new(self.conn()?).count()? > 0 {
            return Ok(None);
        }
        self.add_check_list(&CheckList::new(name, "")).map(Some)
    }

    fn conn(&self) -> StoreResult<&rusqlite::Connection> {
        self.db.as_ref().map(|db| &db.conn).ok_or(StoreError::NoConnection)
    }
}

impl TaskService for TaskController {
    fn add_task(&mut self, task: &Task) -> StoreResult<i32> {
        let id = Tasks::new(self.conn()?).insert(task)?;
        debug!(id, list_id = ?task.list_id, "task added");
        Ok(id)
    }

    fn get_tasks(&mut self, list_id: i32) -> StoreResult<Vec<Task>> {
        Ok(Tasks::new(self.conn()?).fetch(TaskFilter::ByList(list_id))?)
    }

    fn update_task(&mut self, task: &Task) -> StoreResult<()> {
        let id = task.id.ok_or(StoreError::Unsaved)?;
        if Tasks::new(self.conn()?).update(id, task)? == 0 {
            return Err(StoreError::NotFound(id));
        }
        debug!(id, done = task.done, "task updated");
        Ok(())
    }

    fn add_check_list(&mut self, check_list: &CheckList) -> StoreResult<i32> {
        if !check_list.has_valid_name() {
            warn!(name = %check_list.name, pattern = NAME_PATTERN, "check list name rejected");
            return Err(StoreError::Validation(check_list.name.clone()));
        }
        let id = CheckLists::new(self.conn()?).insert(check_list)?;
        debug!(id, name = %check_list.name, "check list added");
        Ok(id)
    }

    fn get_check_lists(&mut self) -> StoreResult<Vec<CheckList>> {
        Ok(CheckLists::new(self.conn()?).list()?)
    }
}
