//! Property-based tests for `MonetaryValue`.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::money::MonetaryValue;

/// Strategy to generate signed decimal amounts with 0 to 6 fraction digits.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64, 0u32..=6)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strategy to generate non-empty currency tokens.
fn currency_code() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,8}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Describe text is the amount's decimal text, a space, then the currency.
    #[test]
    fn prop_describe_concatenates(amount in any_amount(), currency in currency_code()) {
        let value = MonetaryValue::new(amount, currency.clone()).unwrap();
        prop_assert_eq!(value.describe(), format!("{amount} {currency}"));
    }

    /// Sign follows the ordering of the amount against zero.
    #[test]
    fn prop_sign_classifies_amount(amount in any_amount()) {
        let value = MonetaryValue::new(amount, "USD").unwrap();
        let expected = if amount > Decimal::ZERO {
            1
        } else if amount < Decimal::ZERO {
            -1
        } else {
            0
        };
        prop_assert_eq!(value.sign(), expected);
    }
}
