//! Identity provider and identity pool module

mod api;
mod commands;
mod models;

pub use commands::{run_pool_command, run_provider_command};
pub use models::{IdentityPool, IdentityProvider};
