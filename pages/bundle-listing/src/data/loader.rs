//! Bundle loader: one query, rows regrouped into records.

use bundle_catalog::{BundleId, BundleRecord, CatalogError, ChargeRecord};
use shop_auth::ShopSession;
use shop_db::{params, Db, DbError, QueryResult, Row};

/// Every bundle, joined with the acting shop's charges. A bundle the shop
/// never paid for comes back with a NULL `charge_shop` cell.
const BUNDLES_WITH_CHARGES_SQL: &str = "\
SELECT b.bundle_id, b.title, b.price, b.img_src, c.shop AS charge_shop
FROM bundles b
LEFT JOIN charges c ON c.bundle_id = b.bundle_id AND c.shop = ?
ORDER BY b.rowid";

/// Load all bundles for the session's shop.
///
/// Full scan, no pagination; the catalog is small. An empty catalog is a
/// deliberate not-found signal, any data-access failure surfaces as
/// [`CatalogError::Fetch`] with the cause attached.
pub fn load_bundles(db: &Db, session: &ShopSession) -> Result<Vec<BundleRecord>, CatalogError> {
    let result = db.query(BUNDLES_WITH_CHARGES_SQL, params![session.shop.as_str()])?;
    let records = group_rows(&result)?;
    if records.is_empty() {
        return Err(CatalogError::NotFound);
    }
    Ok(records)
}

/// Regroup the joined rows: one record per bundle, charges collected.
fn group_rows(result: &QueryResult) -> Result<Vec<BundleRecord>, DbError> {
    let mut records: Vec<BundleRecord> = Vec::new();

    for row in result.iter() {
        let bundle_id = text_column(row, "bundle_id")?;
        let idx = match records
            .iter()
            .position(|r| r.bundle_id.as_str() == bundle_id)
        {
            Some(idx) => idx,
            None => {
                records.push(BundleRecord {
                    bundle_id: BundleId::new(bundle_id),
                    title: text_column(row, "title")?,
                    price: real_column(row, "price")?,
                    img_src: text_column(row, "img_src")?,
                    charges: Vec::new(),
                });
                records.len() - 1
            }
        };

        if let Some(shop) = row.get("charge_shop").and_then(|v| v.as_text()) {
            records[idx].charges.push(ChargeRecord {
                shop: shop.to_string(),
            });
        }
    }

    Ok(records)
}

fn text_column(row: &Row, column: &str) -> Result<String, DbError> {
    row.get(column)
        .and_then(|v| v.as_text())
        .map(str::to_string)
        .ok_or_else(|| DbError::Deserialize(format!("missing text column: {}", column)))
}

fn real_column(row: &Row, column: &str) -> Result<f64, DbError> {
    row.get(column)
        .and_then(|v| v.as_real())
        .ok_or_else(|| DbError::Deserialize(format!("missing numeric column: {}", column)))
}
