//! Environment module

mod api;
mod commands;
mod models;

pub use commands::run_environment_command;
pub use models::Environment;
