//! Monetary value with decimal precision and a currency code.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for exact fixed-point arithmetic.

use std::cmp::Ordering;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// An immutable monetary amount tagged with a currency code.
///
/// The currency is any non-empty token; it is not checked against a list of
/// ISO 4217 codes.
///
/// # Invariants
///
/// - `currency` is never empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMonetaryValue")]
pub struct MonetaryValue {
    amount: Decimal,
    currency: String,
}

/// Unchecked wire form, validated through [`MonetaryValue::new`].
#[derive(Deserialize)]
struct RawMonetaryValue {
    amount: Decimal,
    currency: String,
}

impl TryFrom<RawMonetaryValue> for MonetaryValue {
    type Error = AppError;

    fn try_from(raw: RawMonetaryValue) -> Result<Self, Self::Error> {
        Self::new(raw.amount, raw.currency)
    }
}

impl MonetaryValue {
    /// Creates a new monetary value.
    ///
    /// Zero and negative amounts are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidArgument`] if `currency` is empty.
    pub fn new(amount: Decimal, currency: impl Into<String>) -> AppResult<Self> {
        let currency = currency.into();
        if currency.is_empty() {
            return Err(AppError::invalid_argument("currency must not be empty"));
        }
        Ok(Self { amount, currency })
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency code.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns `1`, `-1` or `0` for positive, negative and zero amounts.
    #[must_use]
    pub fn sign(&self) -> i32 {
        match self.amount.cmp(&Decimal::ZERO) {
            Ordering::Greater => 1,
            Ordering::Less => -1,
            Ordering::Equal => 0,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Returns `"<amount> <currency>"` with the amount's plain decimal text.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MonetaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
