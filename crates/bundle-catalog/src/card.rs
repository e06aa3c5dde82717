//! Card view-model for the bundle listing grid.

use crate::bundle::BundleRecord;
use crate::ids::BundleId;
use serde::{Deserialize, Serialize};

/// What one grid card displays.
///
/// Built from a [`BundleRecord`] by value copy; the record itself is never
/// altered, so the price override below stays a display-layer decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleCard {
    /// Identifier used to build the detail route.
    pub bundle_id: BundleId,
    /// Bundle name.
    pub title: String,
    /// Displayed price; zero when the shop already holds a charge.
    pub price: f64,
    /// Image URL.
    pub img_src: String,
}

impl BundleCard {
    /// Build the card for a record.
    ///
    /// A bundle the shop has already paid for displays as free.
    pub fn from_record(record: &BundleRecord) -> Self {
        Self {
            bundle_id: record.bundle_id.clone(),
            title: record.title.clone(),
            price: if record.is_charged() { 0.0 } else { record.price },
            img_src: record.img_src.clone(),
        }
    }

    /// Price text for the card: "Free" at zero, otherwise "$" followed by
    /// the shortest decimal form of the number. No locale or currency
    /// formatting.
    pub fn price_label(&self) -> String {
        if self.price == 0.0 {
            "Free".to_string()
        } else {
            format!("${}", self.price)
        }
    }

    /// Detail route for this bundle.
    pub fn detail_href(&self) -> String {
        format!("/app/bundleDetail/{}", self.bundle_id)
    }
}

/// Map fetched records to their cards.
pub fn bundle_cards(records: &[BundleRecord]) -> Vec<BundleCard> {
    records.iter().map(BundleCard::from_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::ChargeRecord;

    fn record(id: &str, title: &str, price: f64, charges: Vec<ChargeRecord>) -> BundleRecord {
        BundleRecord {
            bundle_id: BundleId::new(id),
            title: title.to_string(),
            price,
            img_src: format!("{}.png", id),
            charges,
        }
    }

    #[test]
    fn test_uncharged_bundle_keeps_stored_price() {
        let starter = record("b1", "Starter", 10.0, vec![]);
        let card = BundleCard::from_record(&starter);

        assert_eq!(card.price, 10.0);
        assert_eq!(card.price_label(), "$10");
        // The record copy stays untouched.
        assert_eq!(starter.price, 10.0);
    }

    #[test]
    fn test_charged_bundle_displays_free() {
        let pro = record(
            "b2",
            "Pro",
            25.0,
            vec![ChargeRecord {
                shop: "myshop".to_string(),
            }],
        );
        let card = BundleCard::from_record(&pro);

        assert_eq!(card.price, 0.0);
        assert_eq!(card.price_label(), "Free");
        // Only the card was zeroed, not the fetched record.
        assert_eq!(pro.price, 25.0);
    }

    #[test]
    fn test_price_label_decimal_forms() {
        let card = BundleCard::from_record(&record("b3", "Plus", 9.99, vec![]));
        assert_eq!(card.price_label(), "$9.99");

        let card = BundleCard::from_record(&record("b4", "Max", 25.0, vec![]));
        assert_eq!(card.price_label(), "$25");
    }

    #[test]
    fn test_detail_href() {
        let card = BundleCard::from_record(&record("abc123", "Starter", 10.0, vec![]));
        assert_eq!(card.detail_href(), "/app/bundleDetail/abc123");
    }

    #[test]
    fn test_bundle_cards_maps_each_record() {
        let records = vec![
            record("b1", "Starter", 10.0, vec![]),
            record(
                "b2",
                "Pro",
                25.0,
                vec![ChargeRecord {
                    shop: "myshop".to_string(),
                }],
            ),
        ];

        let cards = bundle_cards(&records);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].price, 10.0);
        assert_eq!(cards[1].price, 0.0);
    }
}
