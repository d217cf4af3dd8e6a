//! CLI command definitions and dispatch.

pub mod create;
pub mod ls;
pub mod render;
pub mod rm;

#[cfg(test)]
#[allow(clippy::unwrap_used, missing_docs)]
mod testing;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use labdeck_client::http::HttpApi;
use labdeck_common::config::{AdminConfig, Locale};
use labdeck_ui::dispatcher::Dispatcher;
use labdeck_ui::messages::Messages;
use labdeck_ui::page::Page;
use labdeck_ui::view::ViewContext;

/// labdeck — manage lab containers on a remote backend.
#[derive(Parser, Debug)]
#[command(name = "labdeck", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the container backend.
    #[arg(long, global = true, env = "LABDECK_BASE_URL")]
    pub base_url: Option<String>,

    /// Host used in links derived from port bindings.
    #[arg(long, global = true, env = "LABDECK_PUBLIC_HOST")]
    pub public_host: Option<String>,

    /// Language of messages (`en` or `it`).
    #[arg(long, global = true, env = "LABDECK_LOCALE")]
    pub locale: Option<Locale>,

    /// JSON configuration file; flags override its values.
    #[arg(long, global = true, env = "LABDECK_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List containers.
    Ls(ls::LsArgs),
    /// Create containers.
    Create(create::CreateArgs),
    /// Delete containers.
    Rm(rm::RmArgs),
    /// Print the rendered list markup or the whole page.
    Render(render::RenderArgs),
}

/// Layers flags over the configuration file over defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the result is invalid.
fn resolve_config(cli: &Cli) -> anyhow::Result<AdminConfig> {
    let mut config = match &cli.config {
        Some(path) => AdminConfig::load(path)?,
        None => AdminConfig::default(),
    };
    if let Some(base_url) = &cli.base_url {
        config.base_url.clone_from(base_url);
    }
    if let Some(public_host) = &cli.public_host {
        config.public_host.clone_from(public_host);
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    config.validate()?;
    Ok(config)
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the action ends
/// with a failure banner.
pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;
    tracing::debug!(base_url = %config.base_url, locale = %config.locale, "configuration resolved");

    let api = HttpApi::new(&config.base_url)?;
    let view = ViewContext::new(Messages::new(config.locale), config.public_host.clone());
    let dispatcher = Dispatcher::new(api, Page::new(view));

    match cli.command {
        Command::Ls(args) => ls::execute(&dispatcher, &args).await,
        Command::Create(args) => create::execute(&dispatcher, &args, config.default_count).await,
        Command::Rm(args) => rm::execute(&dispatcher, &args).await,
        Command::Render(args) => render::execute(&dispatcher, &args, config.default_count).await,
    }
}
