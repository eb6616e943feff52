//! Service account module

mod api;
mod commands;
mod models;

pub use commands::run_service_account_command;
pub use models::ServiceAccount;
