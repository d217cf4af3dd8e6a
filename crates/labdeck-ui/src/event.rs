//! User interactions a host forwards to the dispatcher.

use labdeck_common::types::ContainerId;

/// A user interaction on the admin page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The document finished loading.
    PageLoaded,
    /// The create button was clicked; `count` is the raw input value.
    CreateClicked {
        /// Content of the count input.
        count: String,
    },
    /// The refresh button was clicked.
    RefreshClicked,
    /// A row's delete button was clicked.
    DeleteOneClicked(ContainerId),
    /// The bulk-delete button was clicked.
    DeleteSelectedClicked,
    /// The "select all" checkbox changed.
    SelectAllToggled(bool),
    /// A row checkbox changed.
    RowToggled {
        /// Row whose checkbox changed.
        id: ContainerId,
        /// New checkbox value.
        checked: bool,
    },
    /// The banner's close button was clicked.
    BannerDismissed,
}

/// Parses the count input. Returns `None` unless it is an integer >= 1.
#[must_use]
pub fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|count| *count >= 1)
}
