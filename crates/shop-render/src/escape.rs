//! HTML escaping for user-sourced text.

/// Escape text for safe interpolation into HTML content and attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"Bread & Butter"</b>"#),
            "&lt;b&gt;&quot;Bread &amp; Butter&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_html("Starter"), "Starter");
    }
}
