//! confluent - Main entry point

use clap::Parser;
use log::{debug, info};

use confluent::{run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting confluent v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "Global flags: context={:?}, url={:?}, batch={}",
        cli.context, cli.url, cli.batch
    );

    if let Err(err) = run(&cli).await {
        eprintln!("Error: {}", err);
        if let Some(suggestion) = err.suggestion() {
            eprintln!("Suggestion: {}", suggestion);
        }
        std::process::exit(1);
    }
}
