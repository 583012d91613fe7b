use super::report_store_error;
use crate::libs::controller::{StoreResult, TaskController, TaskService};
use crate::libs::messages::Message;
use crate::libs::task::{parse_due_date, Task};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TasksArgs {
    /// List id or name; every task when omitted
    pub list: Option<String>,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// List id or name
    #[arg(required = true)]
    pub list: String,

    #[arg(required = true)]
    pub description: String,

    /// Due date as YYYY-MM-DD
    #[arg(long)]
    pub due: Option<String>,
}

#[derive(Debug, Args)]
pub struct DoneArgs {
    #[arg(required = true)]
    pub id: i32,

    /// Mark the task as not done instead
    #[arg(long)]
    pub undo: bool,
}

pub fn list_cmd(mut controller: TaskController, args: TasksArgs) -> Result<()> {
    if let Err(e) = show_tasks(&mut controller, args.list.as_deref()) {
        report_store_error(&e);
    }
    controller.close()
}

fn show_tasks(controller: &mut TaskController, list: Option<&str>) -> StoreResult<()> {
    let tasks = match list {
        Some(key) => {
            let Some(check_list) = controller.find_check_list(key)? else {
                msg_error!(Message::CheckListNotFound(key.to_string()));
                return Ok(());
            };
            msg_print!(Message::TasksHeader(check_list.name), true);
            controller.get_tasks(check_list.id.unwrap_or_default())?
        }
        None => {
            msg_print!(Message::AllTasksHeader, true);
            controller.get_all_tasks()?
        }
    };

    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
    } else {
        View::tasks(&tasks);
    }
    Ok(())
}

pub fn add_cmd(mut controller: TaskController, args: AddArgs) -> Result<()> {
    if let Err(e) = add_task(&mut controller, &args) {
        report_store_error(&e);
    }
    controller.close()
}

fn add_task(controller: &mut TaskController, args: &AddArgs) -> StoreResult<()> {
    let due_date = match args.due.as_deref() {
        Some(due) if parse_due_date(due).is_none() => {
            msg_error!(Message::InvalidDueDate(due.to_string()));
            return Ok(());
        }
        Some(due) => due.trim(),
        None => "",
    };
    let description = args.description.trim();
    if description.is_empty() {
        msg_warning!(Message::EmptyTaskSkipped);
        return Ok(());
    }

    let Some(check_list) = controller.find_check_list(&args.list)? else {
        msg_error!(Message::CheckListNotFound(args.list.clone()));
        return Ok(());
    };

    controller.add_task(&Task::new(description, due_date, check_list.id))?;
    msg_success!(Message::TaskCreated(description.to_string()));
    Ok(())
}

pub fn done_cmd(mut controller: TaskController, args: DoneArgs) -> Result<()> {
    if let Err(e) = set_done(&mut controller, args.id, !args.undo) {
        report_store_error(&e);
    }
    controller.close()
}

fn set_done(controller: &mut TaskController, id: i32, done: bool) -> StoreResult<()> {
    let mut task = controller.get_task(id)?;
    task.done = done;
    controller.update_task(&task)?;

    if done {
        msg_success!(Message::TaskMarkedDone(task.description));
    } else {
        msg_success!(Message::TaskMarkedUndone(task.description));
    }
    Ok(())
}
