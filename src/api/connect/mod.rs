//! Managed connectors: lifecycle, offsets and logs

mod api;
mod commands;
mod models;

pub use commands::run_connect_command;
