//! Loading affordance for buttons.

/// Inner HTML of a busy button, before the busy label.
const SPINNER_HTML: &str =
    r#"<span class="spinner-border spinner-border-sm me-2" role="status" aria-hidden="true"></span>"#;

/// Fallback label when a button finishes loading without saved content.
const DONE_FALLBACK: &str = "OK";

/// A button whose content is swapped for a spinner while its request runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    html: String,
    disabled: bool,
    saved_html: Option<String>,
}

impl Button {
    /// Creates an enabled button showing `html`.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            disabled: false,
            saved_html: None,
        }
    }

    /// Current inner HTML.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Whether the button is disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the button is showing its spinner.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.saved_html.is_some()
    }

    /// Enables or disables the button without touching its content.
    pub const fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Disables the button, saves its content and shows a spinner followed
    /// by `busy_label`. Calling it again while loading keeps the first saved
    /// content.
    pub fn start_loading(&mut self, busy_label: &str) {
        if self.saved_html.is_none() {
            self.saved_html = Some(std::mem::take(&mut self.html));
        }
        self.disabled = true;
        self.html = format!("{SPINNER_HTML}{busy_label}");
    }

    /// Re-enables the button and restores its content, or shows
    /// `label_override` instead when given.
    pub fn finish_loading(&mut self, label_override: Option<&str>) {
        let saved = self.saved_html.take();
        self.disabled = false;
        self.html = match (label_override, saved) {
            (Some(label), _) => label.to_string(),
            (None, Some(saved)) => saved,
            (None, None) => DONE_FALLBACK.to_string(),
        };
    }
}
