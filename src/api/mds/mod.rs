//! Confluent Platform Metadata Service (MDS): roles, role bindings, ACLs

mod api;
mod commands;
mod models;

pub use commands::{run_acl_command, run_platform_role_binding_command, run_platform_role_command};
