//! # Ticklist
//!
//! A small to-do application: named check lists of tasks, kept in a local
//! SQLite file and shown in a terminal window.
//!
//! - [`db`]: schema, migrations and per-table access
//! - [`libs`]: records, the [`libs::controller::TaskService`] store interface,
//!   configuration and user-facing messages
//! - [`ui`]: the window
//! - [`commands`]: command line entry points
//!
//! ```rust,no_run
//! use ticklist::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
pub mod ui;
