//! Row selection and the tri-state "select all" checkbox.

use std::collections::HashSet;

use labdeck_common::types::ContainerId;

/// Visual state of the "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    /// No row is checked (or there are no rows).
    Unchecked,
    /// Some, but not all, rows are checked.
    Indeterminate,
    /// Every row is checked.
    Checked,
}

impl SelectAllState {
    /// Whether the checkbox shows a check mark.
    #[must_use]
    pub const fn is_checked(self) -> bool {
        matches!(self, Self::Checked)
    }

    /// Whether the checkbox shows the partial-selection dash.
    #[must_use]
    pub const fn is_indeterminate(self) -> bool {
        matches!(self, Self::Indeterminate)
    }
}

/// Checked rows of the current render.
///
/// Built fresh for every render; nothing survives a reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    rows: Vec<ContainerId>,
    checked: HashSet<ContainerId>,
}

impl Selection {
    /// Creates a selection over `rows` with nothing checked.
    #[must_use]
    pub fn new(rows: Vec<ContainerId>) -> Self {
        Self {
            rows,
            checked: HashSet::new(),
        }
    }

    /// Row ids in display order.
    #[must_use]
    pub fn rows(&self) -> &[ContainerId] {
        &self.rows
    }

    /// Whether `id` is currently checked.
    #[must_use]
    pub fn is_checked(&self, id: &ContainerId) -> bool {
        self.checked.contains(id)
    }

    /// Number of checked rows.
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }

    /// Checked ids in display order.
    #[must_use]
    pub fn checked_ids(&self) -> Vec<ContainerId> {
        self.rows
            .iter()
            .filter(|id| self.checked.contains(*id))
            .cloned()
            .collect()
    }

    /// Sets every row to `checked`.
    pub fn set_all(&mut self, checked: bool) {
        if checked {
            self.checked = self.rows.iter().cloned().collect();
        } else {
            self.checked.clear();
        }
    }

    /// Sets one row. Returns `false` if `id` is not a row of this render.
    pub fn set_row(&mut self, id: &ContainerId, checked: bool) -> bool {
        if !self.rows.contains(id) {
            return false;
        }
        if checked {
            let _ = self.checked.insert(id.clone());
        } else {
            let _ = self.checked.remove(id);
        }
        true
    }

    /// State of the "select all" checkbox for the current rows.
    #[must_use]
    pub fn select_all_state(&self) -> SelectAllState {
        let checked = self.checked.len();
        if checked == 0 {
            SelectAllState::Unchecked
        } else if checked == self.rows.len() {
            SelectAllState::Checked
        } else {
            SelectAllState::Indeterminate
        }
    }

    /// The bulk-delete control is enabled iff at least one row is checked.
    #[must_use]
    pub fn bulk_delete_enabled(&self) -> bool {
        !self.checked.is_empty()
    }
}
