//! String-to-decimal parsing.

pub mod decimal;

#[cfg(test)]
mod props;

pub use decimal::DecimalParser;
