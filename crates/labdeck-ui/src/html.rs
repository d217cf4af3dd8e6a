//! Escaping and link resolution for rendered records.

use labdeck_common::types::ContainerRecord;
use serde_json::Value;

/// Escapes `&`, `<` and `>`.
///
/// Quotes are left alone, so the result is safe as element text but must
/// not be used to build attribute values from untrusted input containing
/// `"`.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Returns the link shown for a record, or an empty string for no link.
///
/// An explicit non-empty `url` wins; otherwise the link is derived from the
/// port bindings with [`url_from_ports`].
#[must_use]
pub fn resolve_url(record: &ContainerRecord, public_host: &str) -> String {
    match record.url.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => url_from_ports(&record.ports, public_host).unwrap_or_default(),
    }
}

/// Builds `http://{public_host}:{HostPort}` from the first port binding.
///
/// Only the first key of the mapping is considered, in wire order. Returns
/// `None` when `ports` is not an object, is empty, its first value is not a
/// non-empty array, or the first binding has no non-empty string `HostPort`.
#[must_use]
pub fn url_from_ports(ports: &Value, public_host: &str) -> Option<String> {
    let (_, bindings) = ports.as_object()?.iter().next()?;
    let host_port = bindings
        .as_array()?
        .first()?
        .get("HostPort")?
        .as_str()
        .filter(|port| !port.is_empty())?;
    Some(format!("http://{public_host}:{host_port}"))
}
