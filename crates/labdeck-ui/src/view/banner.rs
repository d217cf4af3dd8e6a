//! Dismissible status banners.

use std::fmt;

/// Severity of a banner, mapped to the alert colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Action succeeded.
    Success,
    /// Destructive action succeeded.
    Warning,
    /// Action failed.
    Danger,
    /// Nothing was done.
    Info,
}

impl Level {
    /// Alert suffix used in the CSS class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status message. `html` is inserted as-is and must already be escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Severity.
    pub level: Level,
    /// Escaped message body.
    pub html: String,
}

impl Banner {
    /// Creates a banner.
    #[must_use]
    pub fn new(level: Level, html: impl Into<String>) -> Self {
        Self {
            level,
            html: html.into(),
        }
    }

    /// Success banner.
    #[must_use]
    pub fn success(html: impl Into<String>) -> Self {
        Self::new(Level::Success, html)
    }

    /// Warning banner.
    #[must_use]
    pub fn warning(html: impl Into<String>) -> Self {
        Self::new(Level::Warning, html)
    }

    /// Danger banner.
    #[must_use]
    pub fn danger(html: impl Into<String>) -> Self {
        Self::new(Level::Danger, html)
    }

    /// Info banner.
    #[must_use]
    pub fn info(html: impl Into<String>) -> Self {
        Self::new(Level::Info, html)
    }

    /// Renders the alert markup placed in the message area.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            r#"<div class="alert alert-{} alert-dismissible fade show" role="alert">{}<button type="button" class="btn-close" data-bs-dismiss="alert"></button></div>"#,
            self.level, self.html
        )
    }
}
