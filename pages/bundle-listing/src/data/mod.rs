//! Data loading for the bundle listing.

mod loader;

pub use loader::load_bundles;
