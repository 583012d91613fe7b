use crate::libs::task::Task;
use rusqlite::{named_params, params, Connection, OptionalExtension, Result, Row};
use super::inserted_id;

const INSERT_TASK: &str = "INSERT INTO Tasks (dueDate, description, done, checkListID) VALUES (:due_date, :description, :done, :list_id)";
const UPDATE_TASK: &str = "UPDATE Tasks SET dueDate = :due_date, description = :description, done = :done, checkListID = :list_id WHERE ID = :id";
const SELECT_TASKS: &str = "SELECT ID, dueDate, description, done, checkListID FROM Tasks";
const WHERE_LIST: &str = "WHERE checkListID = ?1";
const WHERE_ID: &str = "WHERE ID = ?1";
const ORDER_BY_ID: &str = "ORDER BY ID";

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    ByList(i32),
}

/// Task rows of an open connection.
pub struct Tasks<'a> {
    conn: &'a Connection,
}

impl<'a> Tasks<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Tasks { conn }
    }

    /// Inserts the task and returns the id the store assigned.
    pub fn insert(&self, task: &Task) -> Result<i32> {
        self.conn.execute(
            INSERT_TASK,
            named_params! {
                ":due_date": task.due_date,
                ":description": task.description,
                ":done": task.done,
                ":list_id": task.list_id,
            },
        )?;

        inserted_id(self.conn)
    }

    /// Rewrites every column of the row keyed by `id`, returning the number of rows touched.
    pub fn update(&self, id: i32, task: &Task) -> Result<usize> {
        self.conn.execute(
            UPDATE_TASK,
            named_params! {
                ":id": id,
                ":due_date": task.due_date,
                ":description": task.description,
                ":done": task.done,
                ":list_id": task.list_id,
            },
        )
    }

    pub fn fetch(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        let tasks = match filter {
            TaskFilter::All => {
                let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TASKS, ORDER_BY_ID))?;
                let rows = stmt.query_map([], Self::from_row)?;
                rows.collect::<Result<Vec<_>>>()?
            }
            TaskFilter::ByList(list_id) => {
                let mut stmt = self.conn.prepare(&format!("{} {} {}", SELECT_TASKS, WHERE_LIST, ORDER_BY_ID))?;
                let rows = stmt.query_map(params![list_id], Self::from_row)?;
                rows.collect::<Result<Vec<_>>>()?
            }
        };

        Ok(tasks)
    }

    pub fn get_by_id(&self, id: i32) -> Result<Option<Task>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], Self::from_row)
            .optional()
    }

    fn from_row(row: &Row) -> Result<Task> {
        Ok(Task {
            id: row.get("ID")?,
            due_date: row.get("dueDate")?,
            description: row.get("description")?,
            done: row.get("done")?,
            list_id: row.get("checkListID")?,
        })
    }
}
