//! Page header section renderer.

/// Stacked-layers icon shown beside the page title.
const STACK_ICON_SVG: &str = r#"<svg width="25" height="25" viewBox="0 0 24 24" fill="currentColor" xmlns="http://www.w3.org/2000/svg" aria-hidden="true"><path d="M12 2 1.8 6.8a1 1 0 0 0 0 1.8L12 13.4l10.2-4.8a1 1 0 0 0 0-1.8L12 2z"/><path d="M21.5 11.1 12 15.6l-9.5-4.5a1 1 0 1 0-.9 1.8L12 17.8l10.4-4.9a1 1 0 1 0-.9-1.8z"/><path d="M21.5 15.6 12 20.1l-9.5-4.5a1 1 0 1 0-.9 1.8L12 22.3l10.4-4.9a1 1 0 1 0-.9-1.8z"/></svg>"#;

/// Render the page header: icon, title, tagline.
pub fn render_header() -> String {
    format!(
        r#"<section class="page-header" data-section="header">
    <span class="header-icon">{icon}</span>
    <div class="header-copy">
        <h1 class="header-title">All bundles</h1>
        <p class="header-tagline">Bundles lets you buy multiple sections at a discounted price.</p>
    </div>
</section>
"#,
        icon = STACK_ICON_SVG
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_copy() {
        let html = render_header();
        assert!(html.contains("All bundles"));
        assert!(html.contains("Bundles lets you buy multiple sections at a discounted price."));
        assert!(html.contains("<svg"));
    }
}
