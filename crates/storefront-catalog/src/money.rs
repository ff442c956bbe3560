//! Money type for representing catalog prices.
//!
//! Uses an integer count of minor units (bani for RON, cents for EUR)
//! so price ranges compare exactly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies the storefront prices in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    RON,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "RON").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::RON => "RON",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::RON => "lei",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "RON" => Some(Currency::RON),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    #[serde(default)]
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use storefront_catalog::money::{Currency, Money};
    /// let price = Money::from_decimal(189.90, Currency::RON);
    /// assert_eq!(price.amount_minor, 18990);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self::new((amount * 100.0).round() as i64, currency)
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_minor as f64 / 100.0
    }

    /// Format for display: "189.90 lei", "€12.00".
    pub fn display(&self) -> String {
        match self.currency {
            Currency::RON => format!("{:.2} {}", self.to_decimal(), self.currency.symbol()),
            Currency::EUR => format!("{}{:.2}", self.currency.symbol(), self.to_decimal()),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::RON);
        assert_eq!(m.amount_minor, 4999);
        assert!((m.to_decimal() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(18990, Currency::RON).display(), "189.90 lei");
        assert_eq!(Money::new(1200, Currency::EUR).display(), "\u{20ac}12.00");
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("ron"), Some(Currency::RON));
        assert_eq!(Currency::from_code("EUR"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("USD"), None);
    }
}
