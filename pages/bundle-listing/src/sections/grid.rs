//! Bundle grid section renderer.

use bundle_catalog::BundleCard;
use shop_render::escape_html;

/// Layers per card: the front card plus two blank backing layers.
const STACK_DEPTH: usize = 3;
/// Pixel offset between consecutive layers.
const STACK_OFFSET_PX: usize = 5;

/// Render the responsive grid, one stacked card per bundle.
pub fn render_grid(cards: &[BundleCard]) -> String {
    let stacks: String = cards.iter().map(render_card_stack).collect();

    format!(
        r#"<section class="bundle-grid" data-section="grid">
{stacks}</section>
"#
    )
}

/// One grid cell: a stack of offset layers with the card on top. The
/// backing layers are purely cosmetic.
fn render_card_stack(card: &BundleCard) -> String {
    let layers: String = (0..STACK_DEPTH)
        .map(|depth| render_layer(card, depth))
        .collect();

    format!(
        r#"    <div class="card-stack">
{layers}    </div>
"#
    )
}

fn render_layer(card: &BundleCard, depth: usize) -> String {
    let offset = depth * STACK_OFFSET_PX;
    let z_index = STACK_DEPTH - depth;

    if depth == 0 {
        format!(
            r#"        <div class="card-layer" style="top: {offset}px; left: {offset}px; z-index: {z_index};">
            <a href="{href}" class="card-link"><img src="{img}" alt="bundleImage" class="card-image"></a>
            <div class="card-meta">
                <p class="card-title">{title}</p>
                <p class="card-price">{price}</p>
            </div>
        </div>
"#,
            href = escape_html(&card.detail_href()),
            img = escape_html(&card.img_src),
            title = escape_html(&card.title),
            price = card.price_label(),
        )
    } else {
        format!(
            r#"        <div class="card-layer card-layer--backing" style="top: {offset}px; left: {offset}px; z-index: {z_index};"></div>
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bundle_catalog::BundleId;

    fn card(id: &str, title: &str, price: f64) -> BundleCard {
        BundleCard {
            bundle_id: BundleId::new(id),
            title: title.to_string(),
            price,
            img_src: format!("{}.png", id),
        }
    }

    #[test]
    fn test_priced_card_shows_dollar_price() {
        let html = render_grid(&[card("b1", "Starter", 10.0)]);
        assert!(html.contains("Starter"));
        assert!(html.contains("<p class=\"card-price\">$10</p>"));
    }

    #[test]
    fn test_zero_price_card_shows_free() {
        let html = render_grid(&[card("b2", "Pro", 0.0)]);
        assert!(html.contains("Pro"));
        assert!(html.contains("<p class=\"card-price\">Free</p>"));
    }

    #[test]
    fn test_fractional_price_renders_exactly() {
        let html = render_grid(&[card("b3", "Plus", 9.99)]);
        assert!(html.contains("<p class=\"card-price\">$9.99</p>"));
    }

    #[test]
    fn test_front_image_links_to_detail_route() {
        let html = render_grid(&[card("abc123", "Starter", 10.0)]);
        assert!(html.contains(r#"<a href="/app/bundleDetail/abc123" class="card-link">"#));
        assert!(html.contains(r#"alt="bundleImage""#));
    }

    #[test]
    fn test_each_cell_stacks_three_layers() {
        let html = render_grid(&[card("b1", "Starter", 10.0)]);
        assert_eq!(html.matches("card-layer").count() - html.matches("card-layer--backing").count(), 3);
        assert_eq!(html.matches("card-layer--backing").count(), 2);
        assert!(html.contains("top: 5px; left: 5px; z-index: 2;"));
        assert!(html.contains("top: 10px; left: 10px; z-index: 1;"));
    }

    #[test]
    fn test_titles_are_escaped() {
        let html = render_grid(&[card("b1", "<script>alert(1)</script>", 10.0)]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
