//! Currency-style rendering of decimal amounts.
//!
//! Rounding uses banker's rounding (round half to even), the same strategy
//! used everywhere amounts are cut to a fixed number of places.

use rust_decimal::{Decimal, RoundingStrategy};
use tally_shared::config::DisplayConfig;

/// How an amount is rendered for display, e.g. `-$1,234.50`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Symbol placed before the digits.
    pub symbol: String,
    /// Fraction digits shown, padded with zeros.
    pub decimal_places: u32,
    /// Separator between groups of three integer digits.
    pub group_separator: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::from(&DisplayConfig::default())
    }
}

impl From<&DisplayConfig> for CurrencyFormat {
    fn from(config: &DisplayConfig) -> Self {
        Self {
            symbol: config.currency_symbol.clone(),
            decimal_places: config.decimal_places,
            group_separator: config.group_separator.clone(),
        }
    }
}

impl CurrencyFormat {
    /// Renders `amount` as `[-]<symbol><grouped integer>[.<fraction>]`.
    ///
    /// A value that rounds to zero is rendered without a minus sign.
    #[must_use]
    pub fn render(&self, amount: Decimal) -> String {
        let rounded =
            amount.round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointNearestEven);
        let negative = rounded < Decimal::ZERO;

        let mut magnitude = rounded.abs();
        magnitude.rescale(self.decimal_places);
        let digits = magnitude.to_string();
        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut out = String::with_capacity(digits.len() + self.symbol.len() + 8);
        if negative {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push_str(&group_digits(integer, &self.group_separator));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

fn group_digits(digits: &str, separator: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
