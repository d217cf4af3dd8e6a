//! Page state and the patches that mirror it into a document.
//!
//! [`Page`] is the single source of truth for what the admin page shows.
//! Each mutation updates the state and appends [`Patch`]es to an outbox;
//! a host drains the outbox with [`Page::drain_patches`] and applies them to
//! its document.

use std::collections::HashMap;

use labdeck_common::constants::{
    COUNT_INPUT_ID, CREATE_BUTTON_ID, DELETE_SELECTED_BUTTON_ID, LIST_ID, LIST_LOADING_ID,
    MESSAGE_AREA_ID, REFRESH_BUTTON_ID, SELECT_ALL_ID,
};
use labdeck_common::types::{ContainerId, ContainerRecord};

use crate::loading::Button;
use crate::messages::Messages;
use crate::selection::Selection;
use crate::view::ViewContext;
use crate::view::banner::Banner;
use crate::view::table::render_list;

/// Elements of the page addressed by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// Banner area.
    MessageArea,
    /// List container.
    List,
    /// List loading indicator.
    ListLoading,
    /// "Select all" checkbox in the table header.
    SelectAll,
    /// Create button.
    CreateButton,
    /// Refresh button.
    RefreshButton,
    /// Bulk-delete button.
    DeleteSelectedButton,
    /// Count input of the create form.
    CountInput,
}

impl ElementId {
    /// The DOM id of the element.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MessageArea => MESSAGE_AREA_ID,
            Self::List => LIST_ID,
            Self::ListLoading => LIST_LOADING_ID,
            Self::SelectAll => SELECT_ALL_ID,
            Self::CreateButton => CREATE_BUTTON_ID,
            Self::RefreshButton => REFRESH_BUTTON_ID,
            Self::DeleteSelectedButton => DELETE_SELECTED_BUTTON_ID,
            Self::CountInput => COUNT_INPUT_ID,
        }
    }
}

/// What a patch applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// An element with a fixed id.
    Element(ElementId),
    /// The `row-select` checkbox with this `data-id`.
    RowCheckbox(ContainerId),
    /// The `delete-one` button with this `data-id`.
    RowDeleteButton(ContainerId),
}

/// One DOM update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    /// Replace the inner HTML.
    SetHtml {
        /// Element to update.
        target: Target,
        /// New inner HTML.
        html: String,
    },
    /// Set the `disabled` property.
    SetDisabled {
        /// Element to update.
        target: Target,
        /// New value.
        disabled: bool,
    },
    /// Set the `checked` property of a checkbox.
    SetChecked {
        /// Element to update.
        target: Target,
        /// New value.
        checked: bool,
    },
    /// Set the `indeterminate` property of a checkbox.
    SetIndeterminate {
        /// Element to update.
        target: Target,
        /// New value.
        indeterminate: bool,
    },
    /// Show or hide an element.
    SetVisible {
        /// Element to update.
        target: Target,
        /// New value.
        visible: bool,
    },
}

/// Buttons that carry a loading affordance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ButtonTarget {
    /// Create button.
    Create,
    /// Refresh button.
    Refresh,
    /// Bulk-delete button.
    DeleteSelected,
    /// Delete button of one row.
    Row(ContainerId),
}

impl ButtonTarget {
    fn patch_target(&self) -> Target {
        match self {
            Self::Create => Target::Element(ElementId::CreateButton),
            Self::Refresh => Target::Element(ElementId::RefreshButton),
            Self::DeleteSelected => Target::Element(ElementId::DeleteSelectedButton),
            Self::Row(id) => Target::RowDeleteButton(id.clone()),
        }
    }
}

/// Content of the list container.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListView {
    /// Cleared while a reload is in flight, or after a failed reload.
    #[default]
    Blank,
    /// The backend reported no containers.
    Empty,
    /// One row per record.
    Table(Vec<ContainerRecord>),
}

/// State of the admin page.
#[derive(Debug)]
pub struct Page {
    view: ViewContext,
    banner: Option<Banner>,
    list: ListView,
    list_html: String,
    list_loading: bool,
    selection: Selection,
    checkboxes_disabled: bool,
    create_button: Button,
    refresh_button: Button,
    delete_selected_button: Button,
    row_buttons: HashMap<ContainerId, Button>,
    outbox: Vec<Patch>,
}

impl Page {
    /// Creates the page in its just-loaded state: blank list, no banner,
    /// bulk delete disabled.
    #[must_use]
    pub fn new(view: ViewContext) -> Self {
        let m = view.messages;
        let mut delete_selected_button = Button::new(m.delete_selected_label());
        delete_selected_button.set_disabled(true);
        Self {
            create_button: Button::new(m.create_label()),
            refresh_button: Button::new(m.refresh_label()),
            delete_selected_button,
            view,
            banner: None,
            list: ListView::Blank,
            list_html: String::new(),
            list_loading: false,
            selection: Selection::default(),
            checkboxes_disabled: false,
            row_buttons: HashMap::new(),
            outbox: Vec::new(),
        }
    }

    /// Rendering context.
    #[must_use]
    pub const fn view(&self) -> &ViewContext {
        &self.view
    }

    /// Message catalog.
    #[must_use]
    pub const fn messages(&self) -> Messages {
        self.view.messages
    }

    /// Banner currently shown.
    #[must_use]
    pub const fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Replaces the banner.
    pub fn show_banner(&mut self, banner: Banner) {
        self.push(Patch::SetHtml {
            target: Target::Element(ElementId::MessageArea),
            html: banner.render(),
        });
        self.banner = Some(banner);
    }

    /// Removes the banner.
    pub fn dismiss_banner(&mut self) {
        if self.banner.take().is_some() {
            self.push(Patch::SetHtml {
                target: Target::Element(ElementId::MessageArea),
                html: String::new(),
            });
        }
    }

    /// Content of the list container.
    #[must_use]
    pub const fn list(&self) -> &ListView {
        &self.list
    }

    /// Records currently rendered, empty unless the list is a table.
    #[must_use]
    pub fn records(&self) -> &[ContainerRecord] {
        match &self.list {
            ListView::Table(records) => records,
            ListView::Blank | ListView::Empty => &[],
        }
    }

    /// Markup currently in the list container.
    #[must_use]
    pub fn list_html(&self) -> &str {
        &self.list_html
    }

    /// Whether the list loading indicator is shown.
    #[must_use]
    pub const fn is_list_loading(&self) -> bool {
        self.list_loading
    }

    /// Shows or hides the list loading indicator.
    pub fn set_list_loading(&mut self, loading: bool) {
        self.list_loading = loading;
        self.push(Patch::SetVisible {
            target: Target::Element(ElementId::ListLoading),
            visible: loading,
        });
    }

    /// Empties the list container ahead of a reload.
    pub fn clear_list(&mut self) {
        self.list = ListView::Blank;
        self.list_html.clear();
        self.selection = Selection::default();
        self.row_buttons.clear();
        self.checkboxes_disabled = false;
        self.push(Patch::SetHtml {
            target: Target::Element(ElementId::List),
            html: String::new(),
        });
        self.sync_selection();
    }

    /// Renders `records` into the list container with a fresh, empty
    /// selection.
    pub fn show_records(&mut self, records: Vec<ContainerRecord>) {
        let ids: Vec<ContainerId> = records.iter().map(|r| r.id.clone()).collect();
        self.selection = Selection::new(ids.clone());
        self.checkboxes_disabled = false;
        let delete_label = self.view.messages.delete_label();
        self.row_buttons = ids
            .into_iter()
            .map(|id| (id, Button::new(delete_label)))
            .collect();
        self.list_html = render_list(&records, &self.selection, &self.view);
        self.list = if records.is_empty() {
            ListView::Empty
        } else {
            ListView::Table(records)
        };
        self.push(Patch::SetHtml {
            target: Target::Element(ElementId::List),
            html: self.list_html.clone(),
        });
        self.sync_selection();
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Checked ids in display order.
    #[must_use]
    pub fn checked_ids(&self) -> Vec<ContainerId> {
        self.selection.checked_ids()
    }

    /// Whether row checkboxes and "select all" are disabled.
    #[must_use]
    pub const fn checkboxes_disabled(&self) -> bool {
        self.checkboxes_disabled
    }

    /// Handles a change of the "select all" checkbox. Returns `false` when
    /// the checkbox is absent or disabled.
    pub fn toggle_select_all(&mut self, checked: bool) -> bool {
        if self.checkboxes_disabled || !matches!(self.list, ListView::Table(_)) {
            return false;
        }
        self.selection.set_all(checked);
        for id in self.selection.rows().to_vec() {
            self.push(Patch::SetChecked {
                target: Target::RowCheckbox(id),
                checked,
            });
        }
        self.sync_selection();
        true
    }

    /// Handles a change of one row checkbox. Returns `false` when the row
    /// does not exist or checkboxes are disabled.
    pub fn toggle_row(&mut self, id: &ContainerId, checked: bool) -> bool {
        if self.checkboxes_disabled || !self.selection.set_row(id, checked) {
            return false;
        }
        self.push(Patch::SetChecked {
            target: Target::RowCheckbox(id.clone()),
            checked,
        });
        self.sync_selection();
        true
    }

    /// Enables or disables every row checkbox and "select all".
    pub fn set_checkboxes_disabled(&mut self, disabled: bool) {
        self.checkboxes_disabled = disabled;
        for id in self.selection.rows().to_vec() {
            self.push(Patch::SetDisabled {
                target: Target::RowCheckbox(id),
                disabled,
            });
        }
        if matches!(self.list, ListView::Table(_)) {
            self.push(Patch::SetDisabled {
                target: Target::Element(ElementId::SelectAll),
                disabled,
            });
        }
    }

    /// Recomputes "select all" and bulk-delete enablement from the
    /// selection.
    fn sync_selection(&mut self) {
        let state = self.selection.select_all_state();
        if matches!(self.list, ListView::Table(_)) {
            self.push(Patch::SetChecked {
                target: Target::Element(ElementId::SelectAll),
                checked: state.is_checked(),
            });
            self.push(Patch::SetIndeterminate {
                target: Target::Element(ElementId::SelectAll),
                indeterminate: state.is_indeterminate(),
            });
        }
        if !self.delete_selected_button.is_loading() {
            let disabled = !self.selection.bulk_delete_enabled();
            self.delete_selected_button.set_disabled(disabled);
            self.push(Patch::SetDisabled {
                target: Target::Element(ElementId::DeleteSelectedButton),
                disabled,
            });
        }
    }

    /// Returns a button, or `None` for a row that is not rendered.
    #[must_use]
    pub fn button(&self, target: &ButtonTarget) -> Option<&Button> {
        match target {
            ButtonTarget::Create => Some(&self.create_button),
            ButtonTarget::Refresh => Some(&self.refresh_button),
            ButtonTarget::DeleteSelected => Some(&self.delete_selected_button),
            ButtonTarget::Row(id) => self.row_buttons.get(id),
        }
    }

    fn button_mut(&mut self, target: &ButtonTarget) -> Option<&mut Button> {
        match target {
            ButtonTarget::Create => Some(&mut self.create_button),
            ButtonTarget::Refresh => Some(&mut self.refresh_button),
            ButtonTarget::DeleteSelected => Some(&mut self.delete_selected_button),
            ButtonTarget::Row(id) => self.row_buttons.get_mut(id),
        }
    }

    /// Puts a button in its loading state. Missing rows are ignored.
    pub fn start_loading(&mut self, target: &ButtonTarget) {
        let busy = self.view.messages.busy_label();
        self.update_button(target, |button| button.start_loading(busy));
    }

    /// Restores a button after its request. Missing rows are ignored.
    pub fn finish_loading(&mut self, target: &ButtonTarget, label_override: Option<&str>) {
        self.update_button(target, |button| button.finish_loading(label_override));
    }

    fn update_button(&mut self, target: &ButtonTarget, update: impl FnOnce(&mut Button)) {
        let Some(button) = self.button_mut(target) else {
            return;
        };
        update(button);
        let disabled = button.is_disabled();
        let html = button.html().to_string();
        let patch_target = target.patch_target();
        self.push(Patch::SetDisabled {
            target: patch_target.clone(),
            disabled,
        });
        self.push(Patch::SetHtml {
            target: patch_target,
            html,
        });
    }

    /// Patches emitted since the last drain.
    #[must_use]
    pub fn pending_patches(&self) -> &[Patch] {
        &self.outbox
    }

    /// Takes every pending patch, oldest first.
    pub fn drain_patches(&mut self) -> Vec<Patch> {
        std::mem::take(&mut self.outbox)
    }

    fn push(&mut self, patch: Patch) {
        self.outbox.push(patch);
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(ViewContext::default())
    }
}
