//! Roles and cloud role bindings

mod api;
mod commands;
mod models;

pub use commands::run_rbac_command;
