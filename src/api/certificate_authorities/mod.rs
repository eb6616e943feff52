//! Certificate authority module

mod api;
mod commands;
mod models;

pub use commands::run_certificate_authority_command;
