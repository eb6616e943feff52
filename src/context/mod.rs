//! Context management module
//!
//! Named contexts bundle the connection parameters of a Confluent Cloud
//! organization or a Confluent Platform MDS, plus the resources selected
//! with `use` commands.

mod commands;
mod models;
mod resolve;
mod store;

pub use commands::{run_context_command, ConnectionFlags};
pub use models::{Context, ContextConfig, ContextKind, LogsCursor, LogsQuery};
pub use resolve::resolve_active_context;
pub use store::ContextStore;
