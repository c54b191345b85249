use serde::{Deserialize, Serialize};

use acme_core::ValueObject;

/// Postal address.
///
/// Fields are stored exactly as given; no normalization or validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    street: String,
    postal_code: String,
    city: String,
    state: String,
    state_code: String,
    country: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        state_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            postal_code: postal_code.into(),
            city: city.into(),
            state: state.into(),
            state_code: state_code.into(),
            country: country.into(),
        }
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn state_code(&self) -> &str {
        &self.state_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl ValueObject for Address {}
