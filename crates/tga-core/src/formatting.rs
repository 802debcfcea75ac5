//! Telegram HTML helpers.

/// Escape HTML special characters for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Preformatted JSON block; Telegram renders it monospaced with highlighting.
pub fn json_block(json: &str) -> String {
    format!(
        "<pre><code class=\"language-json\">{}</code></pre>",
        escape_html(json)
    )
}

/// Clickable `<a href>` link.
pub fn link(url: &str, label: &str) -> String {
    format!(
        "<a href=\"{}\">{}</a>",
        escape_html(url),
        escape_html(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_html() {
        let s = r#"<a href="x&y">"#;
        assert_eq!(escape_html(s), "&lt;a href=&quot;x&amp;y&quot;&gt;");
    }

    #[test]
    fn json_block_escapes_contents() {
        let html = json_block(r#"{"first_name": "<b>Bob</b>"}"#);
        assert!(html.starts_with("<pre><code class=\"language-json\">"));
        assert!(html.contains("&quot;first_name&quot;: &quot;&lt;b&gt;Bob&lt;/b&gt;&quot;"));
        assert!(html.ends_with("</code></pre>"));
    }

    #[test]
    fn link_escapes_query_ampersands() {
        assert_eq!(
            link("https://x/cb?token=a&b=1", "Open site"),
            r#"<a href="https://x/cb?token=a&amp;b=1">Open site</a>"#
        );
    }
}
