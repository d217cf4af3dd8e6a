//! User actions against the backend.
//!
//! Every mutating action goes through one runner that sets the loading
//! affordance, awaits a single backend call, shows the resulting banner,
//! clears the affordance, and then reconciles the page with a full reload.
//! A failed reconcile leaves the action's banner in place; it is only logged.
//! At most one mutating action runs at a time; a second one is refused with
//! an informational banner. Refresh is read-only and never refused.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

use labdeck_client::api::ContainerApi;
use labdeck_common::types::{ContainerId, ContainerRecord, CreatedContainer};
use serde_json::Value;
use tokio::sync::{Mutex, MutexGuard};

use crate::event::{UiEvent, parse_count};
use crate::messages::Messages;
use crate::page::{ButtonTarget, Page};
use crate::view::banner::Banner;

/// Controls put in their loading state for the duration of an action.
#[derive(Debug, Clone, Default)]
struct Affordance {
    button: Option<ButtonTarget>,
    lock_checkboxes: bool,
    list_loading: bool,
}

impl Affordance {
    fn engage(&self, page: &mut Page) {
        if let Some(button) = &self.button {
            page.start_loading(button);
        }
        if self.lock_checkboxes {
            page.set_checkboxes_disabled(true);
        }
        if self.list_loading {
            page.set_list_loading(true);
        }
    }

    fn release(&self, page: &mut Page) {
        if let Some(button) = &self.button {
            page.finish_loading(button, None);
        }
        if self.lock_checkboxes {
            page.set_checkboxes_disabled(false);
        }
        if self.list_loading {
            page.set_list_loading(false);
        }
    }
}

/// Clears the in-flight flag when the action ends, however it ends.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Turns user actions into backend calls and page updates.
#[derive(Debug)]
pub struct Dispatcher<A> {
    api: A,
    messages: Messages,
    page: Mutex<Page>,
    in_flight: AtomicBool,
}

impl<A: ContainerApi> Dispatcher<A> {
    /// Creates a dispatcher driving `page` through `api`.
    pub fn new(api: A, page: Page) -> Self {
        Self {
            messages: page.messages(),
            api,
            page: Mutex::new(page),
            in_flight: AtomicBool::new(false),
        }
    }

    /// The backend client.
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Locks the page. Do not hold the guard across a dispatcher call.
    pub async fn page(&self) -> MutexGuard<'_, Page> {
        self.page.lock().await
    }

    /// Whether a mutating action is in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Routes a user interaction to the matching action.
    pub async fn handle(&self, event: UiEvent) {
        tracing::debug!(?event, "ui event");
        match event {
            UiEvent::PageLoaded | UiEvent::RefreshClicked => self.refresh().await,
            UiEvent::CreateClicked { count } => {
                let _ = match parse_count(&count) {
                    Some(count) => self.create(count).await,
                    None => self.show(Banner::danger(self.messages.invalid_count())).await,
                };
            }
            UiEvent::DeleteOneClicked(id) => {
                let _ = self.delete_one(&id).await;
            }
            UiEvent::DeleteSelectedClicked => {
                let _ = self.delete_selected().await;
            }
            UiEvent::SelectAllToggled(checked) => {
                let _ = self.page.lock().await.toggle_select_all(checked);
            }
            UiEvent::RowToggled { id, checked } => {
                let _ = self.page.lock().await.toggle_row(&id, checked);
            }
            UiEvent::BannerDismissed => self.page.lock().await.dismiss_banner(),
        }
    }

    /// Reloads the list from the backend.
    ///
    /// A body that is not an array, or an empty array, renders the empty
    /// state. A failed call or undecodable records leave the list blank and
    /// show a load-failure banner.
    pub async fn refresh(&self) {
        self.reload(true).await;
    }

    /// Clears and refills the list. Load failures become a banner only when
    /// `report_failure` is set; otherwise they are logged and the current
    /// banner stays.
    async fn reload(&self, report_failure: bool) {
        {
            let mut page = self.page.lock().await;
            page.set_list_loading(true);
            page.clear_list();
        }

        let result = self.api.list().await;

        let mut page = self.page.lock().await;
        match result.map(decode_records) {
            Ok(Ok(records)) => {
                tracing::debug!(count = records.len(), "container list loaded");
                page.show_records(records);
            }
            Ok(Err(error)) => {
                tracing::warn!(%error, "container list has malformed records");
                if report_failure {
                    page.show_banner(Banner::danger(self.messages.load_failed()));
                }
            }
            Err(error) => {
                tracing::warn!(%error, "container list request failed");
                if report_failure {
                    page.show_banner(Banner::danger(self.messages.load_failed()));
                }
            }
        }
        page.set_list_loading(false);
    }

    /// Creates `count` containers and returns the banner describing the
    /// outcome.
    ///
    /// A count of zero is refused locally: no request, no reload.
    pub async fn create(&self, count: u32) -> Banner {
        if count == 0 {
            return self.show(Banner::danger(self.messages.invalid_count())).await;
        }

        let affordance = Affordance {
            button: Some(ButtonTarget::Create),
            ..Affordance::default()
        };
        self.run_action("create", affordance, || async move {
            match self.api.create(count).await {
                Ok(response) => match response.error_message() {
                    Some(error) => {
                        tracing::info!(count, error, "backend refused create");
                        Banner::danger(Messages::backend_error(error))
                    }
                    None => {
                        tracing::info!(created = response.created.len(), "containers created");
                        Banner::success(
                            self.messages
                                .created(response.created.iter().map(CreatedContainer::id)),
                        )
                    }
                },
                Err(error) => {
                    tracing::warn!(%error, "create request failed");
                    Banner::danger(self.messages.create_failed())
                }
            }
        })
        .await
    }

    /// Deletes one container from its row button and returns the banner
    /// describing the outcome.
    pub async fn delete_one(&self, id: &ContainerId) -> Banner {
        let affordance = Affordance {
            button: Some(ButtonTarget::Row(id.clone())),
            lock_checkboxes: true,
            list_loading: false,
        };
        self.run_action("delete_one", affordance, || async move {
            match self.api.delete(std::slice::from_ref(id)).await {
                Ok(response) if !response.removed.is_empty() => {
                    tracing::info!(%id, "container deleted");
                    Banner::warning(self.messages.deleted_one(id))
                }
                Ok(response) => {
                    tracing::info!(%id, error = response.error_message(), "container not deleted");
                    Banner::danger(response.error_message().map_or_else(
                        || self.messages.delete_one_failed().to_string(),
                        Messages::backend_error,
                    ))
                }
                Err(error) => {
                    tracing::warn!(%id, %error, "delete request failed");
                    Banner::danger(self.messages.delete_one_network_error())
                }
            }
        })
        .await
    }

    /// Deletes every checked row in one request and returns the banner
    /// describing the outcome.
    ///
    /// With nothing checked, shows an informational banner and sends nothing.
    pub async fn delete_selected(&self) -> Banner {
        let ids = self.page.lock().await.checked_ids();
        if ids.is_empty() {
            return self.show(Banner::info(self.messages.nothing_selected())).await;
        }

        let affordance = Affordance {
            button: Some(ButtonTarget::DeleteSelected),
            lock_checkboxes: true,
            list_loading: true,
        };
        self.run_action("delete_selected", affordance, || async move {
            match self.api.delete(&ids).await {
                Ok(response) if !response.removed.is_empty() => {
                    tracing::info!(
                        requested = ids.len(),
                        removed = response.removed.len(),
                        failed = response.errors.len(),
                        "selected containers deleted"
                    );
                    Banner::warning(
                        self.messages
                            .deleted_many(response.removed.len(), response.errors.len()),
                    )
                }
                Ok(response) => {
                    tracing::info!(
                        requested = ids.len(),
                        error = response.error_message(),
                        "selected containers not deleted"
                    );
                    Banner::danger(response.error_message().map_or_else(
                        || self.messages.delete_selected_failed().to_string(),
                        Messages::backend_error,
                    ))
                }
                Err(error) => {
                    tracing::warn!(requested = ids.len(), %error, "bulk delete request failed");
                    Banner::danger(self.messages.delete_selected_network_error())
                }
            }
        })
        .await
    }

    /// Post-action hook: resynchronizes the page with the backend without
    /// replacing the action's banner.
    async fn reconcile(&self) {
        self.reload(false).await;
    }

    /// Runs one mutating action: guard, affordance, call, banner, release,
    /// reconcile. Returns the banner the action ended with.
    async fn run_action<F, Fut>(
        &self,
        action: &'static str,
        affordance: Affordance,
        call: F,
    ) -> Banner
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Banner>,
    {
        let Some(_in_flight) = self.try_begin() else {
            tracing::info!(action, "refused: another action is in flight");
            return self.show(Banner::info(self.messages.action_in_progress())).await;
        };

        affordance.engage(&mut *self.page.lock().await);
        let banner = call().await;
        {
            let mut page = self.page.lock().await;
            page.show_banner(banner.clone());
            affordance.release(&mut page);
        }
        self.reconcile().await;
        banner
    }

    fn try_begin(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(&self.in_flight))
    }

    async fn show(&self, banner: Banner) -> Banner {
        self.page.lock().await.show_banner(banner.clone());
        banner
    }
}

/// Interprets a list body: anything but an array is an empty list.
fn decode_records(body: Value) -> Result<Vec<ContainerRecord>, serde_json::Error> {
    match body {
        Value::Array(_) => serde_json::from_value(body),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn non_array_body_is_an_empty_list() {
        for body in [json!(null), json!({}), json!({"error": "x"}), json!("list")] {
            assert!(decode_records(body).expect("decode failed").is_empty());
        }
    }

    #[test]
    fn array_body_decodes_records() {
        let body = json!([{"id": "a", "name": "n", "status": "running", "ports": {}}]);
        let records = decode_records(body).expect("decode failed");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.as_str(), "a");
    }

    #[test]
    fn array_of_non_records_is_an_error() {
        assert!(decode_records(json!([1, 2])).is_err());
    }
}
