use core::fmt;

use serde::{Deserialize, Serialize};

use acme_core::{AggregateRoot, DomainError, DomainResult, Entity, ValueObject};

use crate::address::Address;

/// Supplier identifier as issued by the SCM context (e.g. `"SUP123"`).
///
/// Other contexts hold it as an opaque reference: a `SupplierId` is never
/// blank, so receiving one means the supplier reference is present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SupplierId(String);

impl SupplierId {
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::invalid_argument(
                "supplier_id",
                "supplier identifier cannot be empty",
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
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

impl ValueObject for SupplierId {}

/// Aggregate root: Supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Supplier {
    id: SupplierId,
    name: String,
    address: Address,
}

impl Supplier {
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        address: Address,
    ) -> DomainResult<Self> {
        let id = SupplierId::new(identifier)?;

        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument("name", "name cannot be empty"));
        }

        Ok(Self { id, name, address })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Supplier {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_address() -> Address {
        Address::new("123 Main St", "Apt 4B", "Anytown", "CA", "12345", "USA").unwrap()
    }

    #[test]
    fn new_supplier_exposes_its_details() {
        let supplier = Supplier::new("SUP123", "Best Supplies Inc.", test_address()).unwrap();
        assert_eq!(supplier.id().as_str(), "SUP123");
        assert_eq!(supplier.name(), "Best Supplies Inc.");
        assert_eq!(supplier.address(), &test_address());
    }

    #[test]
    fn supplier_rejects_blank_identifier() {
        let err = Supplier::new("  ", "Best Supplies Inc.", test_address()).unwrap_err();
        match err {
            DomainError::InvalidArgument { param: "supplier_id", .. } => {}
            _ => panic!("Expected InvalidArgument for blank identifier"),
        }
    }

    #[test]
    fn supplier_rejects_blank_name() {
        let err = Supplier::new("SUP123", "", test_address()).unwrap_err();
        match err {
            DomainError::InvalidArgument { param: "name", .. } => {}
            _ => panic!("Expected InvalidArgument for blank name"),
        }
    }

    #[test]
    fn supplier_id_deserialization_is_validated() {
        let id: SupplierId = serde_json::from_str(r#""SUP123""#).unwrap();
        assert_eq!(id, SupplierId::new("SUP123").unwrap());
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""SUP123""#);

        assert!(serde_json::from_str::<SupplierId>(r#""""#).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: supplier ids compare by value and render as given.
        #[test]
        fn supplier_id_has_value_semantics(raw in "[A-Z]{3}[0-9]{1,6}") {
            let a = SupplierId::new(raw.clone()).unwrap();
            let b = SupplierId::new(raw.clone()).unwrap();
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a.to_string(), raw);
        }
    }
}
