use anyhow::Result;
use std::fs::OpenOptions;
use std::sync::Mutex;
use ticklist::commands::Cli;
use ticklist::libs::data_storage::DataStorage;
use ticklist::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "ticklist.log";

fn main() -> Result<()> {
    init_tracing()?;
    Cli::menu()
}

/// In debug mode, sends tracing events to the log file; the window owns the terminal.
fn init_tracing() -> Result<()> {
    if !is_debug_mode() {
        return Ok(());
    }

    let log_path = DataStorage::new().get_path(LOG_FILE_NAME)?;
    let file = OpenOptions::new().create(true).append(true).open(log_path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ticklist=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
