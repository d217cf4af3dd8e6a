//! Container list: empty state or table.

use std::fmt::Write;

use labdeck_common::constants::{DELETE_ONE_ACTION, ROW_SELECT_CLASS, SELECT_ALL_ID};
use labdeck_common::types::ContainerRecord;

use crate::html::{escape_html, resolve_url};
use crate::selection::Selection;
use crate::view::ViewContext;

/// Renders the list: the empty-state message when `records` is empty,
/// otherwise a table with one row per record.
///
/// Checkboxes of ids checked in `selection` are rendered checked.
#[must_use]
pub fn render_list(records: &[ContainerRecord], selection: &Selection, ctx: &ViewContext) -> String {
    if records.is_empty() {
        return render_empty(ctx);
    }

    let [name, status, url] = ctx.messages.column_headers();
    let mut html = format!(
        r#"<table class="table table-striped align-middle"><thead><tr><th style="width: 36px;"><input type="checkbox" id="{SELECT_ALL_ID}" title="{}" /></th><th>{name}</th><th>{status}</th><th>{url}</th><th class="text-end col-actions"></th></tr></thead><tbody>"#,
        ctx.messages.select_all_title()
    );
    for record in records {
        html.push_str(&render_row(record, selection.is_checked(&record.id), ctx));
    }
    html.push_str("</tbody></table>");
    html
}

/// Renders the empty-state paragraph.
#[must_use]
pub fn render_empty(ctx: &ViewContext) -> String {
    format!(
        r#"<p class="text-muted">{}</p>"#,
        ctx.messages.no_containers()
    )
}

fn render_row(record: &ContainerRecord, checked: bool, ctx: &ViewContext) -> String {
    let id = escape_html(record.id.as_str());
    let url = resolve_url(record, &ctx.public_host);
    let mut row = String::from("<tr>");

    let _ = write!(
        row,
        r#"<td><input type="checkbox" class="{ROW_SELECT_CLASS}" data-id="{id}" title="{}"{} /></td>"#,
        ctx.messages.select_row_title(&record.name),
        if checked { " checked" } else { "" }
    );
    let _ = write!(
        row,
        "<td>{}</td><td>{}</td>",
        escape_html(&record.name),
        escape_html(&record.status)
    );
    if url.is_empty() {
        row.push_str("<td></td>");
    } else {
        let url = escape_html(&url);
        let _ = write!(
            row,
            r#"<td><a href="{url}" target="_blank" rel="noopener noreferrer">{url}</a></td>"#
        );
    }
    let _ = write!(
        row,
        r#"<td class="text-end col-actions"><button class="btn btn-danger btn-sm" data-action="{DELETE_ONE_ACTION}" data-id="{id}">{}</button></td>"#,
        ctx.messages.delete_label()
    );
    row.push_str("</tr>");
    row
}
