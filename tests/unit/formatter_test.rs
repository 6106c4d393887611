// Property-based tests for the NTD display formatters
//
// format_currency: "NT$" prefix, thousands separators, two decimals for
// amounts of NT$1 and up, three decimals for sub-dollar amounts.
// format_count: literal under 1K, tenths of K up to 1M, tenths of M above.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

use briocast_revenue::{format_count, format_currency};

proptest! {
    #[test]
    fn test_currency_reparses_to_the_rounded_amount(
        cents in 100u64..100_000_000_000u64
    ) {
        let amount = Decimal::from(cents) / Decimal::from(100);
        let formatted = format_currency(amount);

        prop_assert!(formatted.starts_with("NT$"), "Missing prefix: {}", formatted);

        let digits = formatted.trim_start_matches("NT$").replace(',', "");
        let reparsed = Decimal::from_str(&digits).unwrap();
        prop_assert_eq!(reparsed, amount.round_dp(2), "Formatted {} from {}", formatted, amount);

        let decimals = formatted.split('.').nth(1).map(str::len);
        prop_assert_eq!(decimals, Some(2), "Amounts of NT$1 and up show two decimals: {}", formatted);
    }

    #[test]
    fn test_sub_dollar_amounts_show_three_decimals(
        thousandths in 1u64..1000u64
    ) {
        let amount = Decimal::from(thousandths) / Decimal::from(1000);
        let formatted = format_currency(amount);

        let decimals = formatted.split('.').nth(1).map(str::len);
        prop_assert_eq!(decimals, Some(3), "Sub-dollar amounts show three decimals: {}", formatted);

        let digits = formatted.trim_start_matches("NT$").replace(',', "");
        let reparsed = Decimal::from_str(&digits).unwrap();
        prop_assert_eq!(reparsed, amount.round_dp(3));
    }

    #[test]
    fn test_count_bands(count in 0u64..100_000_000u64) {
        let formatted = format_count(count);

        if count < 1_000 {
            prop_assert_eq!(formatted, count.to_string());
        } else if count < 1_000_000 {
            prop_assert!(formatted.ends_with('K'), "Expected K band for {}: {}", count, formatted);
        } else {
            prop_assert!(formatted.ends_with('M'), "Expected M band for {}: {}", count, formatted);
        }
    }

    #[test]
    fn test_count_keeps_one_decimal_in_k_and_m_bands(count in 1_000u64..100_000_000u64) {
        let formatted = format_count(count);

        let body = formatted.trim_end_matches(['K', 'M']);
        let decimals = body.split('.').nth(1).map(str::len);
        prop_assert_eq!(decimals, Some(1), "Banded counts show one decimal: {}", formatted);
    }
}

#[test]
fn test_currency_display_table() {
    assert_eq!(format_currency(dec!(1234.56)), "NT$1,234.56");
    assert_eq!(format_currency(dec!(1234.5)), "NT$1,234.50");
    assert_eq!(format_currency(dec!(45231.5)), "NT$45,231.50");
    assert_eq!(format_currency(dec!(0.042)), "NT$0.042");
    assert_eq!(format_currency(dec!(0)), "NT$0.00");
    assert_eq!(format_currency(dec!(1000000)), "NT$1,000,000.00");
}

#[test]
fn test_negative_amount_keeps_sign_after_prefix() {
    assert_eq!(format_currency(dec!(-1234.5)), "NT$-1,234.50");
}

#[test]
fn test_count_display_table() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(1_000), "1.0K");
    assert_eq!(format_count(1_240), "1.2K");
    assert_eq!(format_count(18_500), "18.5K");
    assert_eq!(format_count(152_340), "152.3K");
    assert_eq!(format_count(999_999), "1000.0K");
    assert_eq!(format_count(1_000_000), "1.0M");
    assert_eq!(format_count(2_300_000), "2.3M");
}
