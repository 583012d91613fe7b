use super::report_store_error;
use crate::libs::config::Config;
use crate::libs::controller::TaskController;
use crate::libs::messages::Message;
use crate::ui::app::{run, TasksApp};
use crate::msg_debug;
use anyhow::Result;

/// Opens the window on `controller` and closes the connection once it is gone.
pub fn cmd(config: &Config, mut controller: TaskController) -> Result<()> {
    match controller.ensure_default_check_list(&config.default_list_name) {
        Ok(Some(_)) => msg_debug!(Message::DefaultCheckListCreated(config.default_list_name.clone())),
        Ok(None) => {}
        Err(e) => report_store_error(&e),
    }

    if let Some(path) = controller.database_path() {
        msg_debug!(Message::WindowOpened(path.display().to_string()));
    }

    let mut window = TasksApp::new(controller, &config.placeholder);
    let result = run(&mut window);

    let mut controller = window.into_service();
    controller.close()?;
    msg_debug!(Message::WindowClosed);

    result
}
