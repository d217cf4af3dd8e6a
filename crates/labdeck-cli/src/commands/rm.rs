//! `labdeck rm` — Delete containers.

use clap::Args;
use labdeck_client::api::ContainerApi;
use labdeck_common::types::ContainerId;
use labdeck_ui::dispatcher::Dispatcher;
use labdeck_ui::event::UiEvent;

use crate::output;

/// Arguments for the `rm` command.
#[derive(Args, Debug)]
pub struct RmArgs {
    /// Container ids to delete. One id uses the row delete; several are
    /// deleted together as a selection and may be given as unique prefixes,
    /// such as the short ids printed by `ls`.
    pub ids: Vec<String>,

    /// Delete every listed container.
    #[arg(short, long, conflicts_with = "ids")]
    pub all: bool,
}

/// Executes the `rm` command.
///
/// # Errors
///
/// Returns an error if no id is given, an id matches no listed container or
/// several of them (bulk mode), or the delete fails.
pub async fn execute<A: ContainerApi>(
    dispatcher: &Dispatcher<A>,
    args: &RmArgs,
) -> anyhow::Result<()> {
    if let [id] = args.ids.as_slice() {
        let banner = dispatcher.delete_one(&ContainerId::new(id.as_str())).await;
        return output::report(Some(&banner));
    }
    if !args.all && args.ids.is_empty() {
        anyhow::bail!("no container ids given (use --all to delete every container)");
    }

    dispatcher.refresh().await;
    output::report(dispatcher.page().await.banner())?;

    if args.all {
        dispatcher.handle(UiEvent::SelectAllToggled(true)).await;
    } else {
        let rows = dispatcher.page().await.selection().rows().to_vec();
        for arg in &args.ids {
            let id = resolve_id(&rows, arg)?;
            dispatcher
                .handle(UiEvent::RowToggled { id, checked: true })
                .await;
        }
    }

    let banner = dispatcher.delete_selected().await;
    output::report(Some(&banner))
}

/// Finds the listed container named by `arg`: an exact id, or else the
/// only id starting with `arg`.
fn resolve_id(rows: &[ContainerId], arg: &str) -> anyhow::Result<ContainerId> {
    if let Some(id) = rows.iter().find(|id| id.as_str() == arg) {
        return Ok(id.clone());
    }
    let mut matches = rows.iter().filter(|id| id.as_str().starts_with(arg));
    match (matches.next(), matches.next()) {
        (Some(id), None) if !arg.is_empty() => Ok(id.clone()),
        (Some(_), Some(_)) => anyhow::bail!("container id {arg} is ambiguous"),
        _ => anyhow::bail!("container {arg} is not listed by the backend"),
    }
}
