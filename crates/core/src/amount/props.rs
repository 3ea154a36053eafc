//! Property-based tests for `MutableAmount`.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::mutable::MutableAmount;

/// Strategy to generate non-negative amounts (0.00 to 10,000,000,000.0000).
fn non_negative_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000_000_000i64, 0u32..=4).prop_map(|(v, scale)| Decimal::new(v, scale))
}

/// Strategy to generate fractional parts in [0, 1) with up to 6 digits.
fn fractional_part() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|v| Decimal::new(v, 6))
}

/// Strategy to generate a valid sign.
fn sign() -> impl Strategy<Value = i32> {
    prop_oneof![Just(1), Just(-1)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Setting a sign keeps the magnitude.
    #[test]
    fn prop_set_sign_keeps_magnitude(initial in non_negative_amount(), sign in sign()) {
        let mut amount = MutableAmount::new(initial).unwrap();
        amount.set_sign(sign).unwrap();
        prop_assert_eq!(amount.amount().abs(), initial);
        prop_assert_eq!(amount.amount(), initial * Decimal::from(sign));
    }

    /// Replacing the integer part keeps the signed remainder exactly.
    #[test]
    fn prop_set_integer_part_keeps_remainder(
        initial in non_negative_amount(),
        sign in sign(),
        integer_part in -1_000_000_000i64..1_000_000_000,
    ) {
        let mut amount = MutableAmount::new(initial).unwrap();
        amount.set_sign(sign).unwrap();
        let before = amount.amount();
        amount.set_integer_part(integer_part);
        prop_assert_eq!(
            amount.amount(),
            Decimal::from(integer_part) + (before - before.trunc())
        );
    }

    /// Replacing the fractional part adds it to the truncated amount.
    #[test]
    fn prop_set_fractional_part(
        initial in non_negative_amount(),
        sign in sign(),
        fractional in fractional_part(),
    ) {
        let mut amount = MutableAmount::new(initial).unwrap();
        amount.set_sign(sign).unwrap();
        let before = amount.amount();
        amount.set_fractional_part(fractional).unwrap();
        prop_assert_eq!(amount.amount(), before.trunc() + fractional);
    }

    /// Negative initial values are always rejected.
    #[test]
    fn prop_negative_initial_rejected(v in 1i64..1_000_000_000, scale in 0u32..=4) {
        prop_assert!(MutableAmount::new(Decimal::new(-v, scale)).is_err());
    }
}
