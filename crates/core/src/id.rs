//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog product.
///
/// Opaque: the catalog assigns ids such as `"001"` and nothing interprets them
/// beyond equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

macro_rules! impl_string_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create an identifier, rejecting empty or all-whitespace values.
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::invalid_id(format!(
                        "{}: cannot be empty",
                        $name
                    )));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

impl_string_newtype!(ProductId, "ProductId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_ids() {
        assert!(matches!(ProductId::new(""), Err(DomainError::InvalidId(_))));
        assert!(matches!(ProductId::new("  "), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn keeps_value_verbatim() {
        let id: ProductId = "001".parse().unwrap();
        assert_eq!(id.as_str(), "001");
        assert_eq!(id.to_string(), "001");
    }

    #[test]
    fn serializes_transparently() {
        let id = ProductId::new("007").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"007\"");
        let back: ProductId = serde_json::from_str("\"007\"").unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<ProductId>("\"\"").is_err());
    }
}
