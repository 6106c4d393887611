//! Tolerant field readers for loosely-typed backend JSON.
//!
//! The ads backend serialises numbers inconsistently across deployments:
//! plain JSON numbers in some, quoted strings (`"1234.56"`) in others. Each
//! coercer answers `Some` only for a value it can read as the expected
//! domain type; anything else (wrong JSON type, unparseable text, a negative
//! amount) yields `None` and the wire layer decides what that means:
//! default the field and mark the payload degraded.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;

/// Upper bound for a single numeric wire field, whether an NTD amount or an
/// impression count. Values beyond it are corrupt, not data; accepting them
/// would let one row distort or overflow the aggregation downstream.
const MAX_WIRE_MAGNITUDE: u64 = 1_000_000_000_000_000;

/// Reads a non-negative monetary amount.
///
/// Numbers are re-read from their shortest printed token, so wire amounts
/// with a few decimal places keep their literal value rather than a binary
/// float rendering of it.
pub fn coerce_amount(value: &Value) -> Option<Decimal> {
    let parsed = match value {
        Value::Number(n) => parse_decimal_text(&n.to_string()),
        Value::String(s) => parse_decimal_text(s),
        _ => None,
    }?;
    if parsed.is_sign_negative() && !parsed.is_zero() {
        return None;
    }
    if parsed > Decimal::from(MAX_WIRE_MAGNITUDE) {
        return None;
    }
    Some(parsed)
}

/// Reads a non-negative integer count (impressions, view totals).
///
/// Accepts integral floats (`12000.0`) since some deployments emit counts
/// through a float serialiser.
pub fn coerce_count(value: &Value) -> Option<u64> {
    let count = match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= MAX_WIRE_MAGNITUDE as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;
    if count > MAX_WIRE_MAGNITUDE {
        return None;
    }
    Some(count)
}

/// Reads an ISO `YYYY-MM-DD` date.
pub fn coerce_date(value: &Value) -> Option<NaiveDate> {
    let text = value.as_str()?.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Reads a non-empty trimmed string.
pub fn coerce_text(value: &Value) -> Option<String> {
    let text = value.as_str()?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn parse_decimal_text(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    trimmed
        .parse()
        .ok()
        .or_else(|| Decimal::from_scientific(trimmed).ok())
}
