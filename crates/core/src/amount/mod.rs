//! Mutable decimal amount and currency-style rendering.

pub mod format;
pub mod mutable;

#[cfg(test)]
mod props;

pub use format::CurrencyFormat;
pub use mutable::MutableAmount;
