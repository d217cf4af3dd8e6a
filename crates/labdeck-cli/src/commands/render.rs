//! `labdeck render` — Print the rendered list or the whole page.

use clap::Args;
use labdeck_client::api::ContainerApi;
use labdeck_ui::dispatcher::Dispatcher;
use labdeck_ui::view::shell::render_shell;

use crate::output;

/// Arguments for the `render` command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Print a full HTML document instead of the list fragment.
    #[arg(long)]
    pub shell: bool,
}

/// Executes the `render` command.
///
/// # Errors
///
/// Returns an error if the list cannot be loaded.
#[allow(clippy::print_stdout)]
pub async fn execute<A: ContainerApi>(
    dispatcher: &Dispatcher<A>,
    args: &RenderArgs,
    default_count: u32,
) -> anyhow::Result<()> {
    dispatcher.refresh().await;
    let page = dispatcher.page().await;
    if let Some(banner) = page.banner() {
        tracing::warn!(level = %banner.level, "list rendered with a banner");
        output::report(Some(banner))?;
    }

    if args.shell {
        print!("{}", render_shell(page.view(), default_count, page.list_html()));
    } else {
        println!("{}", page.list_html());
    }
    Ok(())
}
