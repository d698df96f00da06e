//! Monetary value objects shared by every bounded context.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Three-character currency code (ISO 4217 format, e.g. `"USD"`).
///
/// The code is stored exactly as given; no case normalization happens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    pub const CODE_LEN: usize = 3;

    pub fn new(code: impl Into<String>) -> DomainResult<Self> {
        let code = code.into();
        if code.trim().is_empty() || code.chars().count() != Self::CODE_LEN {
            return Err(DomainError::invalid_argument(
                "currency",
                "currency must be a 3-letter ISO code",
            ));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Currency {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.0
    }
}

impl ValueObject for Currency {}

/// An amount of money in a given currency.
///
/// `Money` carries no arithmetic of its own; owners that multiply or sum
/// amounts do so on [`Money::amount`] and wrap the result again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRepr")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Create money from a raw currency code.
    ///
    /// Fails with `InvalidArgument` when `currency` is blank or not exactly
    /// three characters long.
    pub fn new(amount: Decimal, currency: &str) -> DomainResult<Self> {
        let currency = Currency::new(currency)?;
        Ok(Self::from_parts(amount, currency))
    }

    pub fn from_parts(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn zero(currency: Currency) -> Self {
        Self::from_parts(Decimal::ZERO, currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl ValueObject for Money {}

#[derive(Deserialize)]
struct MoneyRepr {
    amount: Decimal,
    currency: String,
}

impl TryFrom<MoneyRepr> for Money {
    type Error = DomainError;

    fn try_from(value: MoneyRepr) -> Result<Self, Self::Error> {
        Money::new(value.amount, &value.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_renders_amount_then_currency() {
        let money = Money::new(dec!(275.00), "USD").unwrap();
        assert_eq!(money.to_string(), "275.00 USD");
        assert_eq!(money.amount(), dec!(275.00));
        assert_eq!(money.currency().as_str(), "USD");
    }

    #[test]
    fn money_accepts_negative_amounts() {
        let money = Money::new(dec!(-12.5), "EUR").unwrap();
        assert_eq!(money.to_string(), "-12.5 EUR");
    }

    #[test]
    fn money_rejects_malformed_currency() {
        for code in ["", "   ", "US", "USDX", "\t\t\t"] {
            let err = Money::new(dec!(1), code).unwrap_err();
            match err {
                DomainError::InvalidArgument { param: "currency", .. } => {}
                _ => panic!("Expected InvalidArgument for currency {code:?}"),
            }
        }
    }

    #[test]
    fn currency_length_counts_characters_not_bytes() {
        assert!(Currency::new("€UR").is_ok());
        assert!(Currency::new("€€").is_err());
    }

    #[test]
    fn money_equality_is_structural() {
        let a = Money::new(dec!(275), "USD").unwrap();
        let b = Money::new(dec!(275.00), "USD").unwrap();
        let c = Money::new(dec!(275), "EUR").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn zero_is_zero_in_the_given_currency() {
        let zero = Money::zero(Currency::new("JPY").unwrap());
        assert_eq!(zero, Money::new(Decimal::ZERO, "JPY").unwrap());
    }

    #[test]
    fn deserialization_revalidates_currency() {
        let ok: Money = serde_json::from_str(r#"{"amount":"15.00","currency":"USD"}"#).unwrap();
        assert_eq!(ok, Money::new(dec!(15.00), "USD").unwrap());

        let bad = serde_json::from_str::<Money>(r#"{"amount":"15.00","currency":"US"}"#);
        assert!(bad.is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: any amount with a 3-letter code renders as "<amount> <code>".
        #[test]
        fn valid_money_renders_amount_and_code(
            cents in any::<i64>(),
            code in "[A-Z]{3}"
        ) {
            let amount = Decimal::new(cents, 2);
            let money = Money::new(amount, &code).unwrap();
            prop_assert_eq!(money.to_string(), format!("{amount} {code}"));
        }

        /// Property: codes that are not exactly three characters are rejected.
        #[test]
        fn wrong_length_codes_are_rejected(code in "[A-Z]{0,2}|[A-Z]{4,8}") {
            let is_invalid_argument = matches!(
                Money::new(Decimal::ONE, &code),
                Err(DomainError::InvalidArgument { .. })
            );
            prop_assert!(is_invalid_argument);
        }
    }
}
