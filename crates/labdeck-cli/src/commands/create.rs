//! `labdeck create` — Create containers.

use clap::Args;
use labdeck_client::api::ContainerApi;
use labdeck_ui::dispatcher::Dispatcher;

use crate::output;

/// Arguments for the `create` command.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Number of containers to create (defaults to the configured count).
    #[arg(short, long)]
    pub count: Option<u32>,
}

/// Executes the `create` command.
///
/// # Errors
///
/// Returns an error if the backend refuses the request or cannot be reached.
pub async fn execute<A: ContainerApi>(
    dispatcher: &Dispatcher<A>,
    args: &CreateArgs,
    default_count: u32,
) -> anyhow::Result<()> {
    let count = args.count.unwrap_or(default_count);
    tracing::info!(count, "creating containers");
    let banner = dispatcher.create(count).await;
    output::report(Some(&banner))
}
