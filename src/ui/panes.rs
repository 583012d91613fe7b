//! Window regions. Each pane receives the store interface it needs on every
//! call rather than holding a reference to its parent.

use super::entry::EntryField;
use super::rows::{RowDiff, TaskRows};
use crate::libs::check_list::CheckList;
use crate::libs::controller::{StoreResult, TaskService};
use crate::libs::task::Task;
use tracing::debug;

/// Sidebar with the check list names.
#[derive(Debug, Default)]
pub struct CheckListsPane {
    lists: Vec<CheckList>,
    selected: usize,
}

impl CheckListsPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-reads the lists, keeping the selected list selected when it still exists.
    pub fn refresh(&mut self, service: &mut dyn TaskService) -> StoreResult<()> {
        let selected_id = self.selected_id();
        self.lists = service.get_check_lists()?;
        self.selected = selected_id
            .and_then(|id| self.lists.iter().position(|list| list.id == Some(id)))
            .unwrap_or(0);
        Ok(())
    }

    /// Moves the selection by `delta` rows, clamped. Returns whether it changed.
    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.lists.is_empty() {
            return false;
        }
        let last = self.lists.len() - 1;
        let next = self.selected.saturating_add_signed(delta).min(last);
        let changed = next != self.selected;
        self.selected = next;
        changed
    }

    pub fn select_id(&mut self, id: i32) -> bool {
        match self.lists.iter().position(|list| list.id == Some(id)) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    pub fn selected(&self) -> Option<&CheckList> {
        self.lists.get(self.selected)
    }

    pub fn selected_id(&self) -> Option<i32> {
        self.selected().and_then(|list| list.id)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn lists(&self) -> &[CheckList] {
        &self.lists
    }
}

/// Scrollable rows of the selected list.
#[derive(Debug, Default)]
pub struct TaskPane {
    rows: TaskRows,
    cursor: usize,
}

impl TaskPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the tasks of `list_id` and reconciles the rows against them.
    pub fn refresh(&mut self, service: &mut dyn TaskService, list_id: Option<i32>) -> StoreResult<RowDiff> {
        let diff = match list_id {
            Some(list_id) => {
                let tasks = service.get_tasks(list_id)?;
                self.rows.reconcile(&tasks)
            }
            None => self.rows.clear(),
        };
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
        debug!(?list_id, inserted = diff.inserted.len(), removed = diff.removed.len(), changed = diff.changed.len(), "task rows reconciled");
        Ok(diff)
    }

    /// Flips `done` of the row under the cursor and stores it.
    ///
    /// Only that row changes; on failure it is put back the way it was.
    pub fn toggle(&mut self, service: &mut dyn TaskService) -> StoreResult<Option<Task>> {
        let Some(row) = self.rows.get_mut(self.cursor) else {
            return Ok(None);
        };
        row.done = !row.done;
        let task = row.clone();

        if let Err(e) = service.update_task(&task) {
            if let Some(row) = self.rows.get_mut(self.cursor) {
                row.done = !row.done;
            }
            return Err(e);
        }
        Ok(Some(task))
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(self.rows.len() - 1);
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn rows(&self) -> &[Task] {
        self.rows.rows()
    }
}

/// The "add a task" entry under the task pane.
#[derive(Debug)]
pub struct EntryBar {
    field: EntryField,
}

impl EntryBar {
    pub fn new(placeholder: &str) -> Self {
        EntryBar {
            field: EntryField::new(placeholder),
        }
    }

    /// Turns the typed text into a task of `list_id` and stores it.
    ///
    /// Returns `Ok(None)` without calling the store when the field is empty.
    pub fn submit(&mut self, service: &mut dyn TaskService, list_id: Option<i32>) -> StoreResult<Option<i32>> {
        let Some(text) = self.field.submit() else {
            return Ok(None);
        };
        let Some(task) = Task::from_entry(&text, list_id) else {
            return Ok(None);
        };
        service.add_task(&task).map(Some)
    }

    pub fn field(&self) -> &EntryField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut EntryField {
        &mut self.field
    }
}
