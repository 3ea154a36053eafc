//! Common types used across the application.

pub mod money;

#[cfg(test)]
mod money_props;

pub use money::MonetaryValue;
