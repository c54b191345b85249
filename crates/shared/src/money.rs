//! Money value object: a decimal amount tagged with a currency code.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use acme_core::{DomainError, DomainResult, ValueObject};

/// Three-character currency code.
///
/// Only the length is checked (and that the code is not blank): `"123"` and
/// `"usd"` are both valid codes. Length is counted in UTF-16 code units, so a
/// character outside the Basic Multilingual Plane counts as two.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub const LEN: usize = 3;

    pub fn new(code: impl Into<String>) -> DomainResult<Self> {
        let code = code.into();
        if code.trim().is_empty() || code.encode_utf16().count() != Self::LEN {
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

impl ValueObject for CurrencyCode {}

impl core::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}

/// An amount of money in a single currency.
///
/// Amounts are not restricted; callers that need positive prices enforce that
/// themselves. There are no arithmetic operators: summing same-currency
/// amounts is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: CurrencyCode,
}

impl Money {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> DomainResult<Self> {
        Ok(Self::in_currency(amount, CurrencyCode::new(currency)?))
    }

    /// Build from an already validated currency code.
    pub fn in_currency(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        self.currency.as_str()
    }

    pub fn currency_code(&self) -> &CurrencyCode {
        &self.currency
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
