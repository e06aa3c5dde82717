//! Shop session resolution and expiry.

use crate::AuthError;
use serde::{Deserialize, Serialize};
use shop_core::RequestContext;

/// Header carrying the authenticated shop identity, set by the platform's
/// auth gateway before the request reaches a page.
pub const SHOP_DOMAIN_HEADER: &str = "x-shop-domain";

/// Tenant identifier of the authenticated storefront.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShopDomain(String);

impl ShopDomain {
    /// Create a shop domain from a string.
    pub fn new(shop: impl Into<String>) -> Self {
        Self(shop.into())
    }

    /// Get the domain as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShopDomain {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ShopDomain {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// An authenticated shop session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopSession {
    /// The shop acting in this session.
    pub shop: ShopDomain,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp when the session expires.
    pub expires_at: i64,
}

impl ShopSession {
    /// Default session duration: 24 hours.
    pub const DEFAULT_DURATION_SECS: i64 = 24 * 60 * 60;

    /// Create a new session for a shop.
    pub fn new(shop: ShopDomain) -> Self {
        let now = current_timestamp();
        Self {
            shop,
            created_at: now,
            expires_at: now + Self::DEFAULT_DURATION_SECS,
        }
    }

    /// Override the expiry relative to creation time.
    pub fn with_duration(mut self, duration_secs: i64) -> Self {
        self.expires_at = self.created_at + duration_secs;
        self
    }

    /// Whether the session has passed its expiry.
    pub fn is_expired(&self) -> bool {
        current_timestamp() > self.expires_at
    }

    /// Reject an expired session.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.is_expired() {
            return Err(AuthError::SessionExpired);
        }
        Ok(())
    }
}

/// Resolve the shop session for a request.
///
/// Reads the identity the gateway attached to the request. A request without
/// one never legitimately reaches an admin page.
pub fn resolve_session(ctx: &RequestContext) -> Result<ShopSession, AuthError> {
    let shop = ctx
        .header(SHOP_DOMAIN_HEADER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(AuthError::SessionNotFound)?;

    Ok(ShopSession::new(ShopDomain::new(shop)))
}

fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_core::Method;

    #[test]
    fn test_session_creation() {
        let session = ShopSession::new(ShopDomain::new("myshop"));
        assert_eq!(session.shop.as_str(), "myshop");
        assert!(!session.is_expired());
        assert!(session.validate().is_ok());
    }

    #[test]
    fn test_session_expiry() {
        let session = ShopSession::new(ShopDomain::new("myshop")).with_duration(-1);
        assert!(session.is_expired());
        assert!(matches!(
            session.validate(),
            Err(AuthError::SessionExpired)
        ));
    }

    #[test]
    fn test_resolve_session_from_header() {
        let ctx = RequestContext::new(Method::Get, "/app/bundles")
            .with_header("X-Shop-Domain", "myshop.example");

        let session = resolve_session(&ctx).unwrap();
        assert_eq!(session.shop.as_str(), "myshop.example");
    }

    #[test]
    fn test_resolve_session_missing_header() {
        let ctx = RequestContext::new(Method::Get, "/app/bundles");
        assert!(matches!(
            resolve_session(&ctx),
            Err(AuthError::SessionNotFound)
        ));
    }

    #[test]
    fn test_resolve_session_blank_header() {
        let ctx = RequestContext::new(Method::Get, "/app/bundles")
            .with_header("x-shop-domain", "   ");
        assert!(matches!(
            resolve_session(&ctx),
            Err(AuthError::SessionNotFound)
        ));
    }
}
