//! Row view-model of the task pane.
//!
//! The pane keeps the rows it shows and reconciles them against freshly
//! fetched tasks, keyed by task id, instead of throwing every row away.

use crate::libs::task::Task;

/// Ids touched by one reconcile pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowDiff {
    pub inserted: Vec<i32>,
    pub removed: Vec<i32>,
    pub changed: Vec<i32>,
}

impl RowDiff {
    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskRows {
    rows: Vec<Task>,
}

impl TaskRows {
    pub fn new() -> Self {
        TaskRows { rows: Vec::new() }
    }

    /// Replaces the rows with `fresh`, in its order, and reports what differs.
    ///
    /// Tasks without an id have no stored identity and are ignored.
    pub fn reconcile(&mut self, fresh: &[Task]) -> RowDiff {
        let mut diff = RowDiff::default();
        let fresh: Vec<&Task> = fresh.iter().filter(|task| task.id.is_some()).collect();

        for row in &self.rows {
            if !fresh.iter().any(|task| task.id == row.id) {
                diff.removed.extend(row.id);
            }
        }

        for task in &fresh {
            match self.rows.iter().find(|row| row.id == task.id) {
                None => diff.inserted.extend(task.id),
                Some(row) if row != *task => diff.changed.extend(task.id),
                Some(_) => {}
            }
        }

        self.rows = fresh.into_iter().cloned().collect();
        diff
    }

    pub fn clear(&mut self) -> RowDiff {
        let removed = self.rows.drain(..).filter_map(|row| row.id).collect();
        RowDiff {
            removed,
            ..RowDiff::default()
        }
    }

    pub fn rows(&self) -> &[Task] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.rows.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Task> {
        self.rows.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
