//! Shop session handling for the admin pages.
//!
//! The authentication handshake happens upstream; by the time a request
//! reaches a page the platform gateway has already established which shop is
//! acting. This crate resolves that identity into an explicit [`ShopSession`]
//! value that handlers pass down to their loaders.

mod error;
mod session;

pub use error::AuthError;
pub use session::{resolve_session, ShopDomain, ShopSession, SHOP_DOMAIN_HEADER};
