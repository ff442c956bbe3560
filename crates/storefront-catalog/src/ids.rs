//! Newtype IDs for type-safe identifiers.
//!
//! Catalog identifiers are opaque strings assigned by the data source.
//! Wrapping them keeps a `VariantId` from being passed where a
//! `ProductId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// An opaque, stable identifier.
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
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

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(VariantId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_str() {
        let id: ProductId = "elf-decor-mat".into();
        assert_eq!(id.as_str(), "elf-decor-mat");
        assert_eq!(format!("{}", id), "elf-decor-mat");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = VariantId::new("v-15l");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"v-15l\"");

        let back: VariantId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
