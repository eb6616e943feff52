//! SSO group mapping module

mod api;
mod commands;
mod models;

pub use commands::run_group_mapping_command;
