//! Type-safe SQLite access for the bundles admin app.
//!
//! Wraps Spin's SQLite interface with typed values and result rows. On
//! non-WASM targets the connection is an inert stub so host-side unit tests
//! and tooling compile against the same API.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_db::{Db, params};
//!
//! let db = Db::open_default()?;
//! let result = db.query(
//!     "SELECT bundle_id, title, price FROM bundles WHERE price < ?",
//!     params![50.0],
//! )?;
//! for row in result.iter() {
//!     let title = row.get("title").and_then(|v| v.as_text());
//! }
//! ```

mod db;
mod error;
mod types;

pub use db::Db;
pub use error::DbError;
pub use types::{QueryResult, Row, Value};

/// Create a parameter list for SQL queries.
///
/// ```rust,ignore
/// let params = params!["myshop", 42];
/// ```
#[macro_export]
macro_rules! params {
    ($($param:expr),* $(,)?) => {
        &[$($crate::Value::from($param)),*]
    };
}
