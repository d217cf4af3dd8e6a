//! # labdeck — container admin CLI
//!
//! Creates, lists, and deletes backend containers through the same
//! dispatcher the admin page uses, printing its banners to the terminal.

mod commands;
mod output;

use clap::Parser;

use crate::commands::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::execute(cli).await
}
