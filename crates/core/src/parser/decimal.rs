//! "int.frac" decimal string parsing.
//!
//! The integer and fractional segments are parsed separately and then
//! recombined by decimal addition, not by joining digits. A negative integer
//! segment therefore pulls the fraction toward zero: `"-5.25"` is
//! `-5 + 0.25 = -4.75`.

use std::str::FromStr;

use rust_decimal::Decimal;
use tally_shared::{AppError, AppResult};
use tracing::debug;

/// Stateless parser for `"<integer>[.<fraction>]"` strings.
pub struct DecimalParser;

impl DecimalParser {
    /// Parses `input` into a decimal.
    ///
    /// The integer segment is an optional `+`/`-` followed by ASCII digits.
    /// The fraction segment, if present, is ASCII digits only and may be
    /// empty (`"7."` is 7).
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidArgument`] if `input` is empty.
    /// - [`AppError::InvalidFormat`] if `input` has more than one `.`, either
    ///   segment is not a decimal literal, or the sum is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tally_core::DecimalParser;
    ///
    /// assert_eq!(DecimalParser::parse("123.45").unwrap(), dec!(123.45));
    /// assert_eq!(DecimalParser::parse("-5.25").unwrap(), dec!(-4.75));
    /// ```
    pub fn parse(input: &str) -> AppResult<Decimal> {
        if input.is_empty() {
            debug!("rejected empty decimal input");
            return Err(AppError::invalid_argument("input must not be empty"));
        }

        let mut segments = input.split('.');
        let integer_segment = segments.next().unwrap_or_default();
        let fraction_segment = segments.next();
        if segments.next().is_some() {
            debug!(input, "rejected decimal input with more than one separator");
            return Err(AppError::invalid_format(format!(
                "'{input}' has more than one '.' separator"
            )));
        }

        let integer_part = parse_integer_segment(integer_segment)?;
        let fractional_part = match fraction_segment {
            Some(segment) => parse_fraction_segment(segment)?,
            None => Decimal::ZERO,
        };

        integer_part.checked_add(fractional_part).ok_or_else(|| {
            debug!(input, "decimal input out of range");
            AppError::invalid_format(format!("'{input}' is out of decimal range"))
        })
    }
}

fn parse_integer_segment(segment: &str) -> AppResult<Decimal> {
    let (negative, digits) = match segment.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, segment.strip_prefix('+').unwrap_or(segment)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        debug!(segment, "rejected integer segment");
        return Err(AppError::invalid_format(format!(
            "'{segment}' is not a valid integer part"
        )));
    }
    let magnitude = Decimal::from_str(digits).map_err(|e| {
        debug!(segment, error = %e, "integer segment out of range");
        AppError::invalid_format(format!("'{segment}' is not a valid integer part: {e}"))
    })?;
    Ok(if negative { -magnitude } else { magnitude })
}

fn parse_fraction_segment(segment: &str) -> AppResult<Decimal> {
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        debug!(segment, "rejected fraction segment");
        return Err(AppError::invalid_format(format!(
            "'{segment}' is not a valid fractional part"
        )));
    }
    if segment.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(&format!("0.{segment}")).map_err(|e| {
        AppError::invalid_format(format!("'{segment}' is not a valid fractional part: {e}"))
    })
}
