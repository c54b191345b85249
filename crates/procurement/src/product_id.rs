use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use acme_core::{DomainError, DomainResult, ValueObject};

/// Product identifier. Never the nil UUID.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct ProductId(Uuid);

impl ProductId {
    /// Create a fresh identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn try_from_uuid(uuid: Uuid) -> DomainResult<Self> {
        if uuid.is_nil() {
            return Err(DomainError::invalid_argument(
                "id",
                "product id cannot be empty",
            ));
        }
        Ok(Self(uuid))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueObject for ProductId {}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Uuid> for ProductId {
    type Error = DomainError;

    fn try_from(value: Uuid) -> Result<Self, Self::Error> {
        Self::try_from_uuid(value)
    }
}

impl From<ProductId> for Uuid {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::invalid_argument("id", format!("ProductId: {e}")))?;
        Self::try_from_uuid(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nil_uuid_is_rejected() {
        let err = ProductId::try_from_uuid(Uuid::nil()).unwrap_err();
        assert_eq!(err.argument(), "id");
        assert!(ProductId::try_from(Uuid::nil()).is_err());
    }

    #[test]
    fn generated_ids_are_never_nil_and_distinct() {
        let a = ProductId::new();
        let b = ProductId::new();
        assert!(!a.as_uuid().is_nil());
        assert!(!b.as_uuid().is_nil());
        assert_ne!(a, b);
    }

    #[test]
    fn wraps_given_uuid() {
        let uuid = Uuid::now_v7();
        let id = ProductId::try_from_uuid(uuid).unwrap();
        assert_eq!(Uuid::from(id), uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn parses_from_str() {
        let uuid = Uuid::now_v7();
        let id: ProductId = uuid.to_string().parse().unwrap();
        assert_eq!(id.as_uuid(), &uuid);

        assert!("not-a-uuid".parse::<ProductId>().is_err());
        assert!(
            "00000000-0000-0000-0000-000000000000"
                .parse::<ProductId>()
                .is_err()
        );
    }

    #[test]
    fn deserialize_rejects_nil() {
        let nil = serde_json::to_string(&Uuid::nil()).unwrap();
        assert!(serde_json::from_str::<ProductId>(&nil).is_err());

        let id = ProductId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(serde_json::from_str::<ProductId>(&json).unwrap(), id);
    }
}
