//! Terminal rendering of page state.
//!
//! Banners and labels are HTML-safe strings; these helpers turn them back
//! into plain text and lay records out as a table.

use labdeck_common::types::ContainerRecord;
use labdeck_ui::html::resolve_url;
use labdeck_ui::view::banner::{Banner, Level};

/// Number of id characters shown in tables.
const SHORT_ID_LEN: usize = 12;

/// Strips tags and undoes `&lt;`, `&gt;` and `&amp;`.
#[must_use]
pub fn plain_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Prints the banner an action ended with.
///
/// # Errors
///
/// Returns the banner text as an error when it reports a failure, so the
/// process exits non-zero.
#[allow(clippy::print_stdout)]
pub fn report(banner: Option<&Banner>) -> anyhow::Result<()> {
    let Some(banner) = banner else {
        return Ok(());
    };
    let text = plain_text(&banner.html);
    if banner.level == Level::Danger {
        anyhow::bail!(text);
    }
    println!("{text}");
    Ok(())
}

/// Shortens a container id the way `docker ps` does.
#[must_use]
pub fn short_id(id: &str) -> &str {
    id.char_indices()
        .nth(SHORT_ID_LEN)
        .map_or(id, |(end, _)| &id[..end])
}

/// Formats records as a table with a header row.
#[must_use]
pub fn format_table(records: &[ContainerRecord], public_host: &str) -> String {
    let mut out = format!("{:<14} {:<20} {:<12} {}\n", "CONTAINER ID", "NAME", "STATUS", "URL");
    for record in records {
        let url = resolve_url(record, public_host);
        out.push_str(&format!(
            "{:<14} {:<20} {:<12} {}\n",
            short_id(record.id.as_str()),
            record.name,
            record.status,
            if url.is_empty() { "-" } else { url.as_str() }
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use labdeck_common::types::ContainerId;

    use super::*;

    fn record(id: &str, ports: serde_json::Value) -> ContainerRecord {
        ContainerRecord {
            id: ContainerId::new(id),
            name: "hlab_10000".into(),
            status: "running".into(),
            ports,
            url: None,
        }
    }

    #[test]
    fn plain_text_unescapes_entities() {
        assert_eq!(plain_text("a &lt;b&gt; &amp;lt;"), "a <b> &lt;");
    }

    #[test]
    fn plain_text_strips_tags() {
        assert_eq!(plain_text("<span class=\"x\"></span>Please wait..."), "Please wait...");
    }

    #[test]
    fn short_id_truncates_long_ids() {
        assert_eq!(short_id("0123456789abcdef"), "0123456789ab");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn table_has_header_and_one_line_per_record() {
        let records = vec![
            record("0123456789abcdef", serde_json::json!({"80/tcp": [{"HostPort": "10000"}]})),
            record("fedcba", serde_json::json!({})),
        ];
        let table = format_table(&records, "localhost");
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("CONTAINER ID"));
        assert!(lines[1].starts_with("0123456789ab "));
        assert!(lines[1].ends_with("http://localhost:10000"));
        assert!(lines[2].ends_with(" -"));
    }

    #[test]
    fn danger_banner_is_an_error() {
        let err = report(Some(&Banner::danger("no &lt;ports&gt;"))).expect_err("should fail");
        assert_eq!(err.to_string(), "no <ports>");
    }

    #[test]
    fn success_banner_is_ok() {
        assert!(report(Some(&Banner::success("done"))).is_ok());
        assert!(report(None).is_ok());
    }
}
