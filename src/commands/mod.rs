pub mod init;
pub mod lists;
pub mod tasks;
pub mod window;

use crate::db::db::Db;
use crate::libs::config::Config;
use crate::libs::controller::{StoreError, TaskController};
use crate::libs::messages::Message;
use crate::msg_error;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Show all check lists")]
    Lists,
    #[command(about = "Show the tasks of a check list, or of every list")]
    Tasks(tasks::TasksArgs),
    #[command(about = "Create a check list", arg_required_else_help = true)]
    AddList(lists::AddListArgs),
    #[command(about = "Add a task to a check list", arg_required_else_help = true)]
    Add(tasks::AddArgs),
    #[command(about = "Check off a task", arg_required_else_help = true)]
    Done(tasks::DoneArgs),
    #[command(about = "Configuration initialization")]
    Init,
}

/// Opens the to-do window when no subcommand is given.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database file to open instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<()> {
        if let Some(Commands::Init) = self.command {
            return init::cmd();
        }

        let config = Config::read()?;
        let controller = open_controller(&config, self.db)?;

        match self.command {
            None => window::cmd(&config, controller),
            Some(Commands::Lists) => lists::list_cmd(controller),
            Some(Commands::AddList(args)) => lists::add_cmd(controller, args),
            Some(Commands::Tasks(args)) => tasks::list_cmd(controller, args),
            Some(Commands::Add(args)) => tasks::add_cmd(controller, args),
            Some(Commands::Done(args)) => tasks::done_cmd(controller, args),
            Some(Commands::Init) => Ok(()),
        }
    }
}

/// Connects to the database named by `db_override` or the configuration.
pub fn open_controller(config: &Config, db_override: Option<PathBuf>) -> Result<TaskController> {
    let path = config.database_path(db_override)?;
    let db = Db::open(path)?;
    Ok(TaskController::new(db))
}

/// Prints a failed store call the way every command reports it.
pub fn report_store_error(e: &StoreError) {
    msg_error!(Message::StoreCallFailed(e.status().code(), e.to_string()));
}
