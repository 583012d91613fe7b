use crate::libs::check_list::CheckList;
use rusqlite::{named_params, params, Connection, OptionalExtension, Result, Row};
use super::inserted_id;

const INSERT_CHECK_LIST: &str = "INSERT INTO CheckLists (name, description) VALUES (:name, :description)";
const SELECT_CHECK_LISTS: &str = "SELECT ID, name, description FROM CheckLists";
const WHERE_ID: &str = "WHERE ID = ?1";
const WHERE_NAME: &str = "WHERE name = ?1";
const ORDER_BY_ID: &str = "ORDER BY ID";

/// Check list rows of an open connection.
///
/// Name validation is the controller's job; this layer stores whatever it is given.
pub struct CheckLists<'a> {
    conn: &'a Connection,
}

impl<'a> CheckLists<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        CheckLists { conn }
    }

    pub fn insert(&self, check_list: &CheckList) -> Result<i32> {
        self.conn.execute(
            INSERT_CHECK_LIST,
            named_params! {
                ":name": check_list.name,
                ":description": check_list.description,
            },
        )?;

        inserted_id(self.conn)
    }

    pub fn list(&self) -> Result<Vec<CheckList>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_CHECK_LISTS, ORDER_BY_ID))?;
        let rows = stmt.query_map([], Self::from_row)?;
        rows.collect()
    }

    pub fn get_by_id(&self, id: i32) -> Result<Option<CheckList>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_CHECK_LISTS, WHERE_ID), params![id], Self::from_row)
            .optional()
    }

    /// First list with this exact name, oldest first.
    pub fn get_by_name(&self, name: &str) -> Result<Option<CheckList>> {
        self.conn
            .query_row(
                &format!("{} {} {} LIMIT 1", SELECT_CHECK_LISTS, WHERE_NAME, ORDER_BY_ID),
                params![name],
                Self::from_row,
            )
            .optional()
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM CheckLists", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn from_row(row: &Row) -> Result<CheckList> {
        Ok(CheckList {
            id: row.get("ID")?,
            name: row.get("name")?,
            description: row.get("description")?,
        })
    }
}
