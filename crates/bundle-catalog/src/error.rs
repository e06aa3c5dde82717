//! Catalog error types.

use shop_db::DbError;
use thiserror::Error;

/// Errors that can occur when loading bundles.
///
/// The two failure kinds stay distinct all the way to the response: an empty
/// result set is a deliberate not-found signal, while a data-access failure
/// keeps its original cause reachable through `source()`.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The store holds no bundles at all.
    #[error("no bundles found")]
    NotFound,

    /// Fetching bundle data failed.
    #[error("failed to fetch bundles")]
    Fetch(#[from] DbError),
}

impl CatalogError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> u16 {
        match self {
            CatalogError::NotFound => 404,
            CatalogError::Fetch(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_status_mapping() {
        assert_eq!(CatalogError::NotFound.status(), 404);
        let fetch = CatalogError::from(DbError::Query("disk I/O error".to_string()));
        assert_eq!(fetch.status(), 500);
    }

    #[test]
    fn test_fetch_preserves_cause() {
        let fetch = CatalogError::from(DbError::Query("disk I/O error".to_string()));
        let cause = fetch.source().expect("fetch failure keeps its cause");
        assert!(cause.to_string().contains("disk I/O error"));
    }

    #[test]
    fn test_not_found_is_distinct_from_fetch() {
        assert!(CatalogError::NotFound.source().is_none());
        assert!(!matches!(
            CatalogError::from(DbError::NotFound),
            CatalogError::NotFound
        ));
    }
}
