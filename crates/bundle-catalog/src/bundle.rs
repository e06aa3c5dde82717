//! Bundle and charge records as fetched from the store.

use crate::ids::BundleId;
use serde::{Deserialize, Serialize};

/// A billing charge scoped to a shop.
///
/// The store query already filters charges to the current shop, so any
/// charge present on a record belongs to the acting shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeRecord {
    /// Tenant identifier of the shop that paid for the bundle.
    pub shop: String,
}

/// A bundle row group as read from the store.
///
/// Prices are stored as plain decimal numbers (the store's Float column);
/// currency handling is not this page's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleRecord {
    /// Unique bundle identifier.
    pub bundle_id: BundleId,
    /// Bundle name shown on the card.
    pub title: String,
    /// Stored price in currency units.
    pub price: f64,
    /// Image URL for the card.
    pub img_src: String,
    /// Charges for this bundle, filtered to the current shop.
    pub charges: Vec<ChargeRecord>,
}

impl BundleRecord {
    /// Whether the current shop already holds a charge for this bundle.
    pub fn is_charged(&self) -> bool {
        !self.charges.is_empty()
    }
}
