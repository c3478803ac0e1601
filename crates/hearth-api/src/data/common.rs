use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street:       Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number:       Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    pub city:         String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state:        Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code:  Option<String>,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let street = [self.street.as_deref(), self.number.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        let parts = [Some(street.as_str()).filter(|s| !s.is_empty()), self.neighborhood.as_deref(), Some(self.city.as_str())];
        let mut first = true;
        for part in parts.into_iter().flatten() {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(part)?;
            first = false;
        }
        if let Some(ref state) = self.state {
            write!(f, " - {state}")?;
        }
        Ok(())
    }
}

/// An amount in a named currency, as the backend reports prices and fees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount:   f64,
    pub currency: String,
}

impl Money {
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{} {:.2}", self.currency, self.amount) }
}
