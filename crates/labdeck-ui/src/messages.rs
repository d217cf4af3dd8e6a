//! User-facing strings.
//!
//! Every method returns HTML-safe text: values coming from the backend are
//! escaped here, so callers can put the result straight into a banner.

use labdeck_common::config::Locale;
use labdeck_common::types::ContainerId;

use crate::html::escape_html;

/// Message catalog for one locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    /// Creates the catalog for `locale`.
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Returns the catalog locale.
    #[must_use]
    pub const fn locale(self) -> Locale {
        self.locale
    }

    const fn pick(self, en: &'static str, it: &'static str) -> &'static str {
        match self.locale {
            Locale::En => en,
            Locale::It => it,
        }
    }

    /// Page title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        self.pick("Container admin", "Gestione container")
    }

    /// Label of the count input.
    #[must_use]
    pub const fn count_label(self) -> &'static str {
        self.pick("Containers to create", "Container da creare")
    }

    /// Create button label.
    #[must_use]
    pub const fn create_label(self) -> &'static str {
        self.pick("Create", "Crea")
    }

    /// Refresh button label.
    #[must_use]
    pub const fn refresh_label(self) -> &'static str {
        self.pick("Refresh", "Aggiorna")
    }

    /// Bulk-delete button label.
    #[must_use]
    pub const fn delete_selected_label(self) -> &'static str {
        self.pick("Delete selected", "Elimina selezionati")
    }

    /// Per-row delete button label.
    #[must_use]
    pub const fn delete_label(self) -> &'static str {
        self.pick("Delete", "Elimina")
    }

    /// Label shown next to the spinner of a busy button.
    #[must_use]
    pub const fn busy_label(self) -> &'static str {
        self.pick("Please wait...", "Attendere...")
    }

    /// Text of the list loading indicator.
    #[must_use]
    pub const fn loading_label(self) -> &'static str {
        self.pick("Loading...", "Caricamento...")
    }

    /// Empty-state text of the list.
    #[must_use]
    pub const fn no_containers(self) -> &'static str {
        self.pick("No active containers.", "Nessun container attivo.")
    }

    /// Tooltip of the "select all" checkbox.
    #[must_use]
    pub const fn select_all_title(self) -> &'static str {
        self.pick("Select all", "Seleziona tutti")
    }

    /// Tooltip of a row checkbox.
    #[must_use]
    pub fn select_row_title(self, name: &str) -> String {
        format!(
            "{} {}",
            self.pick("Select container", "Seleziona container"),
            escape_html(name)
        )
    }

    /// Column headers: name, status, URL.
    #[must_use]
    pub const fn column_headers(self) -> [&'static str; 3] {
        [self.pick("Name", "Nome"), self.pick("Status", "Stato"), "URL"]
    }

    /// Success banner after a create call.
    #[must_use]
    pub fn created<'a>(self, ids: impl IntoIterator<Item = &'a ContainerId>) -> String {
        let ids: Vec<&str> = ids.into_iter().map(ContainerId::as_str).collect();
        format!(
            "{}: {}",
            self.pick("Containers created", "Container creati"),
            escape_html(&ids.join(", "))
        )
    }

    /// Banner for an error reported by the backend.
    #[must_use]
    pub fn backend_error(error: &str) -> String {
        escape_html(error)
    }

    /// Banner when a create call fails in transport.
    #[must_use]
    pub const fn create_failed(self) -> &'static str {
        self.pick(
            "Error while creating containers.",
            "Errore durante la creazione dei container.",
        )
    }

    /// Banner when the requested count is not a positive integer.
    #[must_use]
    pub const fn invalid_count(self) -> &'static str {
        self.pick(
            "The number of containers must be at least 1.",
            "Il numero di container deve essere almeno 1.",
        )
    }

    /// Banner when the list cannot be loaded.
    #[must_use]
    pub const fn load_failed(self) -> &'static str {
        self.pick(
            "Error while loading the container list.",
            "Errore nel caricamento della lista.",
        )
    }

    /// Success banner after deleting one container.
    #[must_use]
    pub fn deleted_one(self, id: &ContainerId) -> String {
        format!(
            "{}: {}",
            self.pick("Container deleted", "Container eliminato"),
            escape_html(id.as_str())
        )
    }

    /// Success banner after a bulk delete. `failed` counts ids the backend
    /// reported as not removed.
    #[must_use]
    pub fn deleted_many(self, removed: usize, failed: usize) -> String {
        let mut text = match self.locale {
            Locale::En => format!("Deleted {removed} selected containers."),
            Locale::It => format!("Eliminati {removed} container selezionati."),
        };
        if failed > 0 {
            text.push(' ');
            text.push_str(&match self.locale {
                Locale::En => format!("{failed} could not be removed."),
                Locale::It => format!("{failed} non eliminati."),
            });
        }
        text
    }

    /// Banner when deleting one container reports nothing removed.
    #[must_use]
    pub const fn delete_one_failed(self) -> &'static str {
        self.pick(
            "Error while deleting the container.",
            "Errore nell'eliminazione del container.",
        )
    }

    /// Banner when a bulk delete reports nothing removed.
    #[must_use]
    pub const fn delete_selected_failed(self) -> &'static str {
        self.pick(
            "Error while deleting the selected containers.",
            "Errore nell'eliminazione dei container selezionati.",
        )
    }

    /// Banner when deleting one container fails in transport.
    #[must_use]
    pub const fn delete_one_network_error(self) -> &'static str {
        self.pick(
            "Network error while deleting.",
            "Errore di rete durante l'eliminazione.",
        )
    }

    /// Banner when a bulk delete fails in transport.
    #[must_use]
    pub const fn delete_selected_network_error(self) -> &'static str {
        self.pick(
            "Network error while deleting the selected containers.",
            "Errore di rete durante l'eliminazione selettiva.",
        )
    }

    /// Banner when bulk delete is invoked with nothing checked.
    #[must_use]
    pub const fn nothing_selected(self) -> &'static str {
        self.pick("No containers selected.", "Nessun container selezionato.")
    }

    /// Banner when a mutating action is started while another is in flight.
    #[must_use]
    pub const fn action_in_progress(self) -> &'static str {
        self.pick(
            "Another operation is already in progress.",
            "Un'altra operazione è già in corso.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_lists_escaped_ids() {
        let ids = [ContainerId::new("a1"), ContainerId::new("<b2>")];
        let text = Messages::default().created(&ids);
        assert_eq!(text, "Containers created: a1, &lt;b2&gt;");
    }

    #[test]
    fn deleted_many_mentions_failures_only_when_present() {
        let en = Messages::new(Locale::En);
        assert_eq!(en.deleted_many(3, 0), "Deleted 3 selected containers.");
        assert_eq!(
            en.deleted_many(2, 1),
            "Deleted 2 selected containers. 1 could not be removed."
        );
    }

    #[test]
    fn italian_catalog_is_selected_by_locale() {
        let it = Messages::new(Locale::It);
        assert_eq!(it.no_containers(), "Nessun container attivo.");
        assert_eq!(
            it.deleted_one(&ContainerId::new("abc")),
            "Container eliminato: abc"
        );
    }

    #[test]
    fn backend_error_is_escaped() {
        assert_eq!(
            Messages::backend_error("<script>"),
            "&lt;script&gt;"
        );
    }
}
