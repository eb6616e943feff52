//! User module

mod api;
mod commands;
mod models;

pub use commands::run_user_command;
pub use models::User;
