//! Core decimal logic for Tally.
//!
//! This crate holds the pure value-manipulation routines with no I/O beyond
//! writing to a caller-supplied sink.
//!
//! # Modules
//!
//! - `parser` - "int.frac" string parsing
//! - `amount` - Mutable decimal amount and currency-style rendering

pub mod amount;
pub mod parser;

pub use amount::{CurrencyFormat, MutableAmount};
pub use parser::DecimalParser;
