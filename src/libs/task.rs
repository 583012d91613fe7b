use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format accepted for due dates.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i32>,
    pub description: String,
    pub due_date: String,
    pub done: bool,
    pub list_id: Option<i32>,
}

impl Task {
    pub fn new(description: &str, due_date: &str, list_id: Option<i32>) -> Self {
        Task {
            id: None,
            description: description.to_string(),
            due_date: due_date.to_string(),
            done: false,
            list_id,
        }
    }

    /// Builds a task from entry bar text.
    ///
    /// A trailing ` @YYYY-MM-DD` token becomes the due date. Returns `None`
    /// when nothing but whitespace (or only a due date) was typed.
    pub fn from_entry(text: &str, list_id: Option<i32>) -> Option<Self> {
        let text = text.trim();
        let (description, due_date) = match text.rsplit_once(" @") {
            Some((head, tail)) if parse_due_date(tail).is_some() => (head.trim(), tail.trim()),
            _ => (text, ""),
        };

        if description.is_empty() {
            return None;
        }
        Some(Task::new(description, due_date, list_id))
    }

    pub fn has_due_date(&self) -> bool {
        !self.due_date.is_empty()
    }
}

/// Parses a due date, returning `None` for anything that is not `YYYY-MM-DD`.
pub fn parse_due_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DUE_DATE_FORMAT).ok()
}
