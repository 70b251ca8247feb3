//! Amount type for representing expense values
//!
//! Amounts are kept as `f64` exactly as entered. Nothing in the core rounds
//! them; two-decimal rounding is applied only when formatting for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::error::PlannerError;

/// A monetary amount carried as a floating-point value
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount without validation
    ///
    /// Use [`Amount::positive`] for values that are about to be stored.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Create an amount that is valid for an expense record
    ///
    /// # Examples
    /// ```
    /// use budget_planner::models::Amount;
    /// assert!(Amount::positive(12.5).is_ok());
    /// assert!(Amount::positive(-3.0).is_err());
    /// assert!(Amount::positive(f64::NAN).is_err());
    /// ```
    pub fn positive(value: f64) -> Result<Self, PlannerError> {
        if !value.is_finite() {
            return Err(PlannerError::InvalidInput(format!(
                "amount must be a finite number, got {}",
                value
            )));
        }
        if value <= 0.0 {
            return Err(PlannerError::InvalidInput(format!(
                "amount must be greater than zero, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check that this amount may be stored in an expense record
    pub fn is_valid_expense(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Parse an amount from user text
    ///
    /// Accepts "12.50", "$12.50" and "12". The result is not validated for
    /// positivity.
    pub fn parse(s: &str) -> Result<Self, PlannerError> {
        let s = s.trim();
        let s = s.strip_prefix('$').unwrap_or(s);
        s.parse::<f64>()
            .map(Self)
            .map_err(|_| PlannerError::InvalidInput(format!("Invalid amount: {}", s)))
    }

    /// Format with a currency symbol, rounded to two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.0 < 0.0 {
            format!("-{}{:.2}", symbol, self.0.abs())
        } else {
            format!("{}{:.2}", symbol, self.0)
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_validation() {
        assert_eq!(Amount::positive(12.5).unwrap().value(), 12.5);
        assert!(Amount::positive(0.0).is_err());
        assert!(Amount::positive(-3.0).is_err());
        assert!(Amount::positive(f64::INFINITY).is_err());
        assert!(Amount::positive(f64::NAN).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_display_rounds_to_cents() {
        assert_eq!(format!("{}", Amount::new(10.5)), "$10.50");
        assert_eq!(format!("{}", Amount::new(0.0)), "$0.00");
        assert_eq!(Amount::new(-3.0).format_with_symbol("€"), "-€3.00");
        assert_eq!(Amount::new(19.999).format_with_symbol("$"), "$20.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("10.50").unwrap().value(), 10.5);
        assert_eq!(Amount::parse("$7.25").unwrap().value(), 7.25);
        assert_eq!(Amount::parse(" 3 ").unwrap().value(), 3.0);
        assert!(Amount::parse("ten").is_err());
    }

    #[test]
    fn test_sum() {
        let total: Amount = vec![Amount::new(12.5), Amount::new(7.25)].into_iter().sum();
        assert_eq!(total.value(), 19.75);
    }

    #[test]
    fn test_serialization_is_exact() {
        let a = Amount::new(0.1);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "0.1");

        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
