//! Pure HTML rendering.
//!
//! Nothing here reads page state: every function takes its inputs by
//! reference and returns markup.

pub mod banner;
pub mod shell;
pub mod table;

use crate::messages::Messages;

/// Rendering inputs that do not change between renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewContext {
    /// Catalog for labels and empty-state text.
    pub messages: Messages,
    /// Host used in links derived from port bindings.
    pub public_host: String,
}

impl ViewContext {
    /// Creates a rendering context.
    #[must_use]
    pub fn new(messages: Messages, public_host: impl Into<String>) -> Self {
        Self {
            messages,
            public_host: public_host.into(),
        }
    }
}

impl Default for ViewContext {
    fn default() -> Self {
        Self::new(
            Messages::default(),
            labdeck_common::constants::DEFAULT_PUBLIC_HOST,
        )
    }
}
