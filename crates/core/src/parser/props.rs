//! Property-based tests for decimal parsing.

use std::str::FromStr;

use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::AppError;

use super::decimal::DecimalParser;

/// Strategy to generate fraction digit strings (1 to 10 digits).
fn fraction_digits() -> impl Strategy<Value = String> {
    "[0-9]{1,10}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Plain integers parse to themselves.
    #[test]
    fn prop_integer_only(value in any::<i64>()) {
        let parsed = DecimalParser::parse(&value.to_string()).unwrap();
        prop_assert_eq!(parsed, Decimal::from(value));
    }

    /// For non-negative integer parts, recombination agrees with reading
    /// the whole string as one decimal literal.
    #[test]
    fn prop_non_negative_matches_literal(
        integer in 0u64..1_000_000_000_000,
        fraction in fraction_digits(),
    ) {
        let input = format!("{integer}.{fraction}");
        let parsed = DecimalParser::parse(&input).unwrap();
        prop_assert_eq!(parsed, Decimal::from_str(&input).unwrap());
    }

    /// For negative integer parts, the fraction is added, so the result sits
    /// exactly twice the fraction above the digit-wise reading.
    #[test]
    fn prop_negative_adds_fraction(
        integer in 1u64..1_000_000_000_000,
        fraction in fraction_digits(),
    ) {
        let input = format!("-{integer}.{fraction}");
        let parsed = DecimalParser::parse(&input).unwrap();
        let digit_wise = Decimal::from_str(&input).unwrap();
        let fractional = Decimal::from_str(&format!("0.{fraction}")).unwrap();
        prop_assert_eq!(parsed, digit_wise + fractional * Decimal::TWO);
    }

    /// Three or more segments are always a format error.
    #[test]
    fn prop_extra_separator_rejected(
        a in 0u32..10_000,
        b in 0u32..10_000,
        c in 0u32..10_000,
    ) {
        let result = DecimalParser::parse(&format!("{a}.{b}.{c}"));
        prop_assert!(matches!(result, Err(AppError::InvalidFormat(_))));
    }
}
