//! Shell template assembly.

use std::fmt::Write as _;

/// Head content for the page shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags as name/content pairs.
    pub meta: Vec<(String, String)>,
    /// Inline style blocks.
    pub styles: Vec<String>,
}

impl HeadContent {
    /// Head content holding just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Append a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Append an inline style block.
    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(css.to_string());
        self
    }

    /// Render the head markup.
    pub fn render(&self) -> String {
        let mut html = String::new();
        self.render_into(&mut html);
        html
    }

    fn render_into(&self, html: &mut String) {
        if let Some(title) = &self.title {
            let _ = writeln!(html, "<title>{}</title>", title);
        }
        for (name, content) in &self.meta {
            let _ = writeln!(html, r#"<meta name="{}" content="{}">"#, name, content);
        }
        for css in &self.styles {
            let _ = writeln!(html, "<style>{}</style>", css);
        }
    }
}

/// Shell template wrapping the page body.
///
/// The handler renders the opening, appends its section markup, then the
/// closing; the shell never sees the page content itself.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Whether to emit the doctype line.
    pub doctype: bool,
    /// Head content.
    pub head: HeadContent,
    /// HTML before the page content (opening body, wrapper divs).
    pub body_start: String,
    /// HTML after the page content (closing tags).
    pub body_end: String,
}

impl Shell {
    /// Shell with the default body wrapper.
    pub fn new(head: HeadContent) -> Self {
        Self {
            doctype: true,
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    /// Replace the markup before the page content.
    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Replace the markup after the page content.
    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Render the part of the shell before the page content.
    pub fn render_opening(&self) -> String {
        let mut html = String::new();
        if self.doctype {
            html.push_str("<!DOCTYPE html>\n");
        }
        html.push_str("<html lang=\"en\">\n<head>\n");
        self.head.render_into(&mut html);
        html.push_str("</head>\n");
        html.push_str(&self.body_start);
        html
    }

    /// Render the part of the shell after the page content.
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_renders_title_meta_and_styles() {
        let head = HeadContent::new("All bundles")
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style("body { margin: 0; }");

        let html = head.render();
        assert!(html.contains("<title>All bundles</title>"));
        assert!(html.contains(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#
        ));
        assert!(html.contains("<style>body { margin: 0; }</style>"));
    }

    #[test]
    fn test_shell_opening_and_closing() {
        let shell = Shell::new(HeadContent::new("All bundles"))
            .with_body_start("<body>\n<main class=\"page\">\n")
            .with_body_end("</main>\n</body>\n</html>");

        let opening = shell.render_opening();
        assert!(opening.starts_with("<!DOCTYPE html>"));
        assert!(opening.contains("<html lang=\"en\">"));
        assert!(opening.contains("<main class=\"page\">"));
        assert_eq!(shell.render_closing(), "</main>\n</body>\n</html>");
    }
}
