use serde::{Deserialize, Serialize};

use acme_core::{DomainError, DomainResult, ValueObject};

/// Supplier identifier as seen from other bounded contexts.
///
/// Never empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SupplierId(String);

impl SupplierId {
    pub fn new(identifier: impl Into<String>) -> DomainResult<Self> {
        let identifier = identifier.into();
        if identifier.trim().is_empty() {
            return Err(DomainError::invalid_argument(
                "identifier",
                "supplier id cannot be null or empty",
            ));
        }
        Ok(Self(identifier))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for SupplierId {}

impl core::fmt::Display for SupplierId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SupplierId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SupplierId> for String {
    fn from(value: SupplierId) -> Self {
        value.0
    }
}
