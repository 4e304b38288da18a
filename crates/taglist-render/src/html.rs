//! HTML escaping and anchor markup.

/// Escape text for embedding in HTML content or attribute values.
///
/// Converts `&`, `<`, `>`, `"` and `'` to character entities. The input is
/// scanned once, so entities produced for one character are never escaped
/// again. Escaping already escaped text double-escapes it.
///
/// # Examples
///
/// ```
/// use taglist_render::escape_html;
///
/// assert_eq!(escape_html("<a>&\"'"), "&lt;a&gt;&amp;&quot;&#39;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Wrap already-safe markup in an anchor.
///
/// `url` is inserted as is and must be an internally constructed URL.
pub fn link_raw(url: &str, markup: &str) -> String {
    format!(r#"<a href="{url}">{markup}</a>"#)
}

/// Wrap plain text in an anchor, escaping the text.
pub fn link(url: &str, text: &str) -> String {
    link_raw(url, &escape_html(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_all_special_chars() {
        assert_eq!(escape_html("<a>&\"'"), "&lt;a&gt;&amp;&quot;&#39;");
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("highway=primary"), "highway=primary");
    }

    #[test]
    fn test_escape_html_existing_entity_escaped_once() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_html_twice_double_escapes() {
        assert_eq!(escape_html(&escape_html("&")), "&amp;amp;");
    }

    #[test]
    fn test_escape_html_unicode_untouched() {
        assert_eq!(escape_html("Ключ <b>"), "Ключ &lt;b&gt;");
    }

    #[test]
    fn test_link_raw_keeps_markup() {
        assert_eq!(
            link_raw("https://example.com/", r#"<img src="x.png"/>"#),
            r#"<a href="https://example.com/"><img src="x.png"/></a>"#
        );
    }

    #[test]
    fn test_link_escapes_text() {
        assert_eq!(
            link("https://example.com/", "a<b"),
            r#"<a href="https://example.com/">a&lt;b</a>"#
        );
    }
}
