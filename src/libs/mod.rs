//! Core library modules.
//!
//! - Records: [`task`], [`check_list`]
//! - Store access behind a narrow interface: [`controller`]
//! - Ambient: [`config`], [`data_storage`], [`messages`], [`view`]

pub mod check_list;
pub mod config;
pub mod controller;
pub mod data_storage;
pub mod messages;
pub mod task;
pub mod view;
