//! Display rules for New Taiwan Dollar amounts.
//!
//! All revenue figures in this crate are NTD. Aggregation always happens at
//! full `Decimal` precision; these helpers apply rounding only at the display
//! boundary. Amounts below NT$1 keep three decimal places so that sub-dollar
//! CPM fragments stay visible; everything else renders with two decimal
//! places and thousands separators.

use rust_decimal::Decimal;

/// Decimal places for regular NTD amounts
pub const NTD_SCALE: u32 = 2;

/// Decimal places for sub-dollar amounts (CPM fragments)
pub const NTD_SUB_DOLLAR_SCALE: u32 = 3;

/// Rounds an amount to regular NTD display precision (banker's rounding).
pub fn round_ntd(amount: Decimal) -> Decimal {
    amount.round_dp(NTD_SCALE)
}

/// Formats an NTD amount with the `NT$` prefix.
///
/// - `0 < amount < 1`: exactly 3 decimal places (`NT$0.042`)
/// - otherwise (zero included): exactly 2 decimal places with comma
///   separators (`NT$1,234.56`, `NT$0.00`)
pub fn format_currency(amount: Decimal) -> String {
    let scale = if amount > Decimal::ZERO && amount < Decimal::ONE {
        NTD_SUB_DOLLAR_SCALE
    } else {
        NTD_SCALE
    };

    let mut rounded = amount.round_dp(scale);
    rounded.rescale(scale);

    let text = rounded.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (units, fraction) = unsigned
        .split_once('.')
        .unwrap_or((unsigned, ""));

    format!("NT${}{}.{}", sign, group_thousands(units), fraction)
}

/// Abbreviates large counts the way the revenue screens display impressions:
/// `1,532,100 -> "1.5M"`, `18,500 -> "18.5K"`, `999 -> "999"`.
///
/// One decimal place, round half up, pure integer arithmetic.
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        let tenths = count / 100_000 + u64::from(count % 100_000 >= 50_000);
        format!("{}.{}M", tenths / 10, tenths % 10)
    } else if count >= 1_000 {
        let tenths = count / 100 + u64::from(count % 100 >= 50);
        format!("{}.{}K", tenths / 10, tenths % 10)
    } else {
        count.to_string()
    }
}

/// Inserts comma separators into an unsigned integer digit string.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
