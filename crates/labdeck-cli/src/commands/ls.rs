//! `labdeck ls` — List containers.

use clap::Args;
use labdeck_client::api::ContainerApi;
use labdeck_ui::dispatcher::Dispatcher;

use crate::output;

/// Arguments for the `ls` command.
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Only print container ids.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Executes the `ls` command.
///
/// Loads the list the way the page does on startup and prints it as a
/// table.
///
/// # Errors
///
/// Returns an error if the list cannot be loaded.
#[allow(clippy::print_stdout)]
pub async fn execute<A: ContainerApi>(
    dispatcher: &Dispatcher<A>,
    args: &LsArgs,
) -> anyhow::Result<()> {
    dispatcher.refresh().await;
    let page = dispatcher.page().await;
    output::report(page.banner())?;

    if args.quiet {
        for record in page.records() {
            println!("{}", record.id);
        }
        return Ok(());
    }

    if page.records().is_empty() {
        println!("{}", output::plain_text(page.messages().no_containers()));
        return Ok(());
    }
    print!("{}", output::format_table(page.records(), &page.view().public_host));
    Ok(())
}
