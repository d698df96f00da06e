use core::fmt;

use serde::Serialize;

use acme_core::{DomainError, DomainResult, ValueObject};

/// Postal address of a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    street: String,
    number: String,
    city: String,
    state_or_region: String,
    postal_code: String,
    country: String,
}

impl Address {
    /// Build an address.
    ///
    /// `street`, `city`, `postal_code` and `country` are required;
    /// `number` and `state_or_region` may be empty.
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        city: impl Into<String>,
        state_or_region: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> DomainResult<Self> {
        let street = required("street", street.into())?;
        let city = required("city", city.into())?;
        let postal_code = required("postal_code", postal_code.into())?;
        let country = required("country", country.into())?;

        Ok(Self {
            street,
            number: number.into(),
            city,
            state_or_region: state_or_region.into(),
            postal_code,
            country,
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state_or_region(&self) -> &str {
        &self.state_or_region
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

fn required(param: &'static str, value: String) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_argument(param, format!("{param} cannot be empty")));
    }
    Ok(value)
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.street)?;
        if !self.number.trim().is_empty() {
            write!(f, " {}", self.number)?;
        }
        write!(f, ", {}, ", self.city)?;
        if !self.state_or_region.trim().is_empty() {
            write!(f, "{} ", self.state_or_region)?;
        }
        write!(f, "{}, {}", self.postal_code, self.country)
    }
}

impl ValueObject for Address {}
