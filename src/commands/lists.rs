use super::report_store_error;
use crate::libs::check_list::CheckList;
use crate::libs::controller::{TaskController, TaskService};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddListArgs {
    /// Name of the list: 1-20 letters, digits or spaces
    #[arg(required = true)]
    pub name: String,

    #[arg(short, long, default_value = "")]
    pub description: String,
}

pub fn list_cmd(mut controller: TaskController) -> Result<()> {
    match controller.get_check_lists() {
        Ok(lists) if lists.is_empty() => msg_info!(Message::NoCheckLists),
        Ok(lists) => {
            msg_print!(Message::CheckListsHeader, true);
            View::check_lists(&lists);
        }
        Err(e) => report_store_error(&e),
    }
    controller.close()
}

pub fn add_cmd(mut controller: TaskController, args: AddListArgs) -> Result<()> {
    let check_list = CheckList::new(&args.name, &args.description);
    match controller.add_check_list(&check_list) {
        Ok(_) => msg_success!(Message::CheckListCreated(args.name)),
        Err(e) => report_store_error(&e),
    }
    controller.close()
}
