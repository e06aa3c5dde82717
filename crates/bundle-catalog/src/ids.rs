//! Newtype IDs for type-safe identifiers.
//!
//! A `ChargeId` never passes where a `BundleId` is expected. IDs are
//! store-owned and this app only reads them, so there is no generation here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs with a per-type doc line.
macro_rules! define_id {
    ($(#[doc = $doc:expr] $name:ident),+ $(,)?) => {
        $(
            #[doc = $doc]
            #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
            pub struct $name(String);

            impl $name {
                /// Create a new ID from a string.
                pub fn new(id: impl Into<String>) -> Self {
                    Self(id.into())
                }

                /// Get the ID as a string slice.
                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<String> for $name {
                fn from(s: String) -> Self {
                    Self(s)
                }
            }

            impl From<&str> for $name {
                fn from(s: &str) -> Self {
                    Self(s.to_owned())
                }
            }

            impl AsRef<str> for $name {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }
        )+
    };
}

define_id! {
    #[doc = "Identifier of a bundle."]
    BundleId,
    #[doc = "Identifier of a billing charge."]
    ChargeId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = BundleId::new("b1");
        assert_eq!(id.as_str(), "b1");
    }

    #[test]
    fn test_id_from_string() {
        let id: BundleId = "abc123".into();
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn test_id_display() {
        let id = ChargeId::new("ch-42");
        assert_eq!(format!("{}", id), "ch-42");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(BundleId::new("same"), BundleId::new("same"));
        assert_ne!(BundleId::new("same"), BundleId::new("different"));
    }
}
