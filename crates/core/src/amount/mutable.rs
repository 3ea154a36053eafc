//! A decimal amount whose sign, integer part, and fractional part can be
//! replaced independently.

use std::io::{self, Write};

use rust_decimal::Decimal;
use tally_shared::{AppError, AppResult};
use tracing::{debug, trace};

use super::format::CurrencyFormat;

/// A mutable decimal amount.
///
/// Construction requires a non-negative value. After that the setters may
/// move the amount to either side of zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutableAmount {
    amount: Decimal,
}

impl MutableAmount {
    /// Creates an amount from a non-negative initial value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidArgument`] if `initial` is negative.
    pub fn new(initial: Decimal) -> AppResult<Self> {
        if initial < Decimal::ZERO {
            debug!(%initial, "rejected negative initial amount");
            return Err(AppError::invalid_argument(format!(
                "initial amount must not be negative, got {initial}"
            )));
        }
        Ok(Self { amount: initial })
    }

    /// Returns the current amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Sets the amount to `|amount| * sign`. Zero stays unsigned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidArgument`] unless `sign` is `1` or `-1`.
    pub fn set_sign(&mut self, sign: i32) -> AppResult<&mut Self> {
        let magnitude = self.amount.abs();
        self.amount = match sign {
            -1 if !magnitude.is_zero() => -magnitude,
            1 | -1 => magnitude,
            _ => {
                debug!(sign, "rejected sign");
                return Err(AppError::invalid_argument(format!(
                    "sign must be 1 or -1, got {sign}"
                )));
            }
        };
        trace!(amount = %self.amount, "sign set");
        Ok(self)
    }

    /// Replaces the integer part, keeping `amount - trunc(amount)`.
    ///
    /// The kept remainder carries the sign of the previous amount, so
    /// `-100.75` with a new integer part of `50` becomes `50 - 0.75 = 49.25`.
    pub fn set_integer_part(&mut self, integer_part: i64) -> &mut Self {
        let remainder = self.amount - self.amount.trunc();
        self.amount = Decimal::from(integer_part) + remainder;
        trace!(amount = %self.amount, "integer part set");
        self
    }

    /// Replaces the fractional part: `amount = trunc(amount) + fractional_part`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidArgument`] if `fractional_part` is outside `[0, 1)`
    /// or the new amount is out of decimal range. The amount is left unchanged.
    pub fn set_fractional_part(&mut self, fractional_part: Decimal) -> AppResult<&mut Self> {
        if fractional_part < Decimal::ZERO || fractional_part >= Decimal::ONE {
            debug!(%fractional_part, "rejected fractional part");
            return Err(AppError::invalid_argument(format!(
                "fractional part must be in [0, 1), got {fractional_part}"
            )));
        }
        let whole = self.amount.trunc();
        self.amount = whole.checked_add(fractional_part).ok_or_else(|| {
            debug!(%whole, %fractional_part, "fractional part out of decimal range");
            AppError::invalid_argument(format!(
                "{whole} with fractional part {fractional_part} is out of decimal range"
            ))
        })?;
        trace!(amount = %self.amount, "fractional part set");
        Ok(self)
    }

    /// Writes the amount in currency style, followed by a newline.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn display<W: Write>(&self, out: &mut W, format: &CurrencyFormat) -> io::Result<()> {
        writeln!(out, "{}", format.render(self.amount))
    }
}
