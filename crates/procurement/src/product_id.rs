//! Product identifier within the procurement context.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use acme_core::{DomainError, DomainResult, ValueObject};

/// Identifier of a product being ordered. Never the nil UUID.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct ProductId(Uuid);

impl ProductId {
    /// Wrap an existing identifier. Fails with `InvalidArgument` for the nil UUID.
    pub fn new(id: Uuid) -> DomainResult<Self> {
        if id.is_nil() {
            return Err(DomainError::invalid_argument(
                "product_id",
                "product id cannot be empty",
            ));
        }
        Ok(Self(id))
    }

    /// Generate a fresh random (v4) identifier.
    pub fn new_id() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Uuid> for ProductId {
    type Error = DomainError;

    fn try_from(value: Uuid) -> Result<Self, Self::Error> {
        Self::new(value)
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
            .map_err(|e| DomainError::invalid_argument("product_id", e.to_string()))?;
        Self::new(uuid)
    }
}

impl ValueObject for ProductId {}
