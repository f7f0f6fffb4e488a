//! Markup escaping for record fields

/// Escape text for embedding in HTML text nodes and quoted attributes
///
/// `&`, `<`, `>`, `"` and `'` become entities; everything else passes
/// through unchanged. Distinct inputs always produce distinct outputs.
///
/// # Examples
/// ```
/// use bookshelf::render::escape;
///
/// assert_eq!(escape("<b>Dune</b>"), "&lt;b&gt;Dune&lt;/b&gt;");
/// ```
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape("Dune by Frank Herbert"), "Dune by Frank Herbert");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x" onclick='y'>&</a>"#),
            "&lt;a href=&quot;x&quot; onclick=&#39;y&#39;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_no_raw_structural_characters() {
        let escaped = escape(r#"<script>alert("x" & 'y')</script>"#);
        for raw in ['<', '>', '"', '\''] {
            assert!(!escaped.contains(raw), "found raw {raw} in {escaped}");
        }
        // Every ampersand left over starts an entity
        for (idx, _) in escaped.match_indices('&') {
            let rest = &escaped[idx..];
            assert!(
                rest.starts_with("&amp;")
                    || rest.starts_with("&lt;")
                    || rest.starts_with("&gt;")
                    || rest.starts_with("&quot;")
                    || rest.starts_with("&#39;")
            );
        }
    }

    #[test]
    fn test_existing_entities_are_escaped_again() {
        assert_eq!(escape("&amp;"), "&amp;amp;");
        assert_ne!(escape("&"), escape("&amp;"));
    }

    #[test]
    fn test_unicode_passes_through() {
        assert_eq!(escape("Les Misérables, 雪国"), "Les Misérables, 雪国");
    }
}
