use super::check_list::CheckList;
use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "DESCRIPTION", "DUE", "LIST ID"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                if task.done { "[x]" } else { "[ ]" },
                task.description,
                task.due_date,
                task.list_id.map(|id| id.to_string()).unwrap_or_default()
            ]);
        }
        table.printstd();
    }

    pub fn check_lists(check_lists: &[CheckList]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DESCRIPTION"]);
        for check_list in check_lists {
            table.add_row(row![check_list.id.unwrap_or(0), check_list.name, check_list.description]);
        }
        table.printstd();
    }
}
