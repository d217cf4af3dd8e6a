//! # labdeck-ui
//!
//! The container admin page, without a browser.
//!
//! The page is an explicit value ([`Page`](page::Page)) instead of ambient
//! document state. Every change to it is recorded as a
//! [`Patch`](page::Patch) so a host (a browser binding, the CLI, a test) can
//! apply the same updates to whatever it renders into.
//!
//! - [`view`]: pure HTML rendering of the list, banners, and page shell.
//! - [`selection`]: row checkboxes, "select all", bulk-delete enablement.
//! - [`loading`]: spinner/disabled state of buttons during requests.
//! - [`dispatcher`]: create / refresh / delete actions against a
//!   [`ContainerApi`](labdeck_client::api::ContainerApi), each followed by a
//!   full list reload.

pub mod dispatcher;
pub mod event;
pub mod html;
pub mod loading;
pub mod messages;
pub mod page;
pub mod selection;
pub mod view;
