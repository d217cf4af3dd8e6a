//! Full page document.

use labdeck_common::constants::{
    APP_NAME, COUNT_INPUT_ID, CREATE_BUTTON_ID, DELETE_SELECTED_BUTTON_ID, LIST_ID,
    LIST_LOADING_ID, MESSAGE_AREA_ID, REFRESH_BUTTON_ID,
};

use crate::view::ViewContext;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";

/// Renders the page skeleton: create form, toolbar, message area, loading
/// indicator and an empty list container filled by later renders.
///
/// `list_html` is placed inside the list container as-is.
#[must_use]
pub fn render_shell(ctx: &ViewContext, default_count: u32, list_html: &str) -> String {
    let m = ctx.messages;
    format!(
        r#"<!doctype html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - {APP_NAME}</title>
<link rel="stylesheet" href="{BOOTSTRAP_CSS}">
</head>
<body class="container py-4">
<h1 class="h3 mb-4">{title}</h1>
<div class="row g-2 align-items-end mb-3">
<div class="col-auto">
<label for="{COUNT_INPUT_ID}" class="form-label">{count_label}</label>
<input type="number" class="form-control" id="{COUNT_INPUT_ID}" min="1" value="{default_count}">
</div>
<div class="col-auto"><button class="btn btn-primary" id="{CREATE_BUTTON_ID}">{create}</button></div>
<div class="col-auto"><button class="btn btn-secondary" id="{REFRESH_BUTTON_ID}">{refresh}</button></div>
<div class="col-auto"><button class="btn btn-outline-danger" id="{DELETE_SELECTED_BUTTON_ID}" disabled>{delete_selected}</button></div>
</div>
<div id="{MESSAGE_AREA_ID}"></div>
<div id="{LIST_LOADING_ID}" class="text-muted" style="display: none;">{loading}</div>
<div id="{LIST_ID}">{list_html}</div>
<script src="{BOOTSTRAP_JS}"></script>
</body>
</html>
"#,
        lang = m.locale(),
        title = m.title(),
        count_label = m.count_label(),
        create = m.create_label(),
        refresh = m.refresh_label(),
        delete_selected = m.delete_selected_label(),
        loading = m.loading_label(),
    )
}
