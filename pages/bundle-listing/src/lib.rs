//! Bundle listing admin page.
//!
//! The merchant-facing listing of all section bundles. One navigation runs
//! two phases: the loader queries the store (charges filtered to the acting
//! shop) and a pure transform builds the card view-models; the section
//! renderers then produce the header and the stacked-card grid, assembled
//! into a single response body.

pub mod data;
pub mod sections;

#[cfg(target_arch = "wasm32")]
mod component;

use bundle_catalog::BundleCard;
use shop_render::{escape_html, HeadContent, Shell};

use sections::{render_grid, render_header};

/// Assemble the full listing page for the loaded cards.
pub fn render_page(cards: &[BundleCard]) -> String {
    let shell = page_shell();
    let mut html = shell.render_opening();
    html.push_str(&render_header());
    html.push_str(&render_grid(cards));
    html.push_str(&shell.render_closing());
    html
}

/// Assemble a minimal page carrying only an error message. The platform's
/// own error boundary wraps whatever we return, so this stays terse.
pub fn render_error_page(message: &str) -> String {
    let shell = page_shell();
    let mut html = shell.render_opening();
    html.push_str(&format!(
        "<p class=\"page-error\">{}</p>\n",
        escape_html(message)
    ));
    html.push_str(&shell.render_closing());
    html
}

fn page_shell() -> Shell {
    Shell::new(
        HeadContent::new("All bundles")
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style(PAGE_STYLES),
    )
    .with_body_start("<body>\n<main class=\"bundles-page\">\n")
    .with_body_end("</main>\n</body>\n</html>")
}

/// CSS styles for the listing page.
const PAGE_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #f6f6f7; }
.bundles-page { max-width: 1000px; margin: 0 auto; padding: 1rem 2rem; }

/* Header */
.page-header { display: flex; gap: 0.75rem; align-items: flex-start; padding: 0.75rem 0; }
.header-icon svg { display: block; margin-top: 0.2rem; }
.header-title { font-size: 1.25rem; margin: 0; }
.header-tagline { margin: 0.25rem 0 0; color: #616161; }

/* Grid of stacked cards */
.bundle-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 2rem; padding: 1rem 0; }
.card-stack { position: relative; height: 280px; }
.card-layer { position: absolute; width: calc(100% - 10px); height: calc(100% - 10px); background: #fff; border-radius: 12px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.15); padding: 1rem; }
.card-layer--backing { background: #fafafa; padding: 0; }
.card-link { display: block; cursor: pointer; }
.card-image { width: 100%; height: auto; border-radius: 8px; }
.card-meta { display: flex; justify-content: space-between; padding: 0.5rem 0.25rem 0; }
.card-title { margin: 0; }
.card-price { margin: 0; font-weight: 600; }

/* Errors */
.page-error { padding: 2rem; color: #8c1d18; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use bundle_catalog::BundleId;

    #[test]
    fn test_render_page_composes_shell_header_and_grid() {
        let cards = vec![BundleCard {
            bundle_id: BundleId::new("b1"),
            title: "Starter".to_string(),
            price: 10.0,
            img_src: "x.png".to_string(),
        }];

        let html = render_page(&cards);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>All bundles</title>"));
        assert!(html.contains("data-section=\"header\""));
        assert!(html.contains("data-section=\"grid\""));
        assert!(html.contains("$10"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_render_error_page_escapes_message() {
        let html = render_error_page("No bundles <found>");
        assert!(html.contains("No bundles &lt;found&gt;"));
        assert!(!html.contains("<found>"));
    }
}
