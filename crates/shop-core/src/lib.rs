//! Core abstractions shared by the admin pages.
//!
//! Provides the typed request context a page handler works against:
//! - `RequestId` - per-request identifier for log correlation
//! - `Method` - HTTP method
//! - `RequestContext` - path, method, query and headers of one navigation

mod context;

pub use context::*;
