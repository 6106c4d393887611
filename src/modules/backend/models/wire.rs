// Lenient wire schemas for the ads backend.
//
// Bodies are read in two steps: serde keeps each consumed field as a raw
// `serde_json::Value`, then the coercers in `core::json` read them field by
// field. A field that cannot be read becomes its zero default and flips the
// payload's degraded flag. Parsing as a whole never fails: the worst body
// maps to an empty payload with the flag set, and the report builder turns
// that into all-zero figures the shell can mark as degraded.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::core::json::{coerce_amount, coerce_count, coerce_date, coerce_text};
use crate::modules::revenue::models::{
    PayoutPayload, PayoutRecord, PayoutStatus, RevenuePayload, RevenuePeriod, RevenueRecord,
    RevenueSnapshot,
};

/// Revenue endpoint response shell
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RevenueBody {
    summary: Option<Value>,
    daily: Option<Value>,
}

/// The `summary` block. The backend names the previous-period figure
/// `lastMonthRevenue` regardless of the selected granularity.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SummaryBody {
    #[serde(rename = "totalEarnings")]
    total_earnings: Option<Value>,
    #[serde(rename = "netRevenue")]
    net_revenue: Option<Value>,
    #[serde(rename = "grossRevenue")]
    gross_revenue: Option<Value>,
    impressions: Option<Value>,
    #[serde(rename = "pendingPayout")]
    pending_payout: Option<Value>,
    #[serde(rename = "lastMonthRevenue")]
    last_month_revenue: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DailyRowBody {
    date: Option<Value>,
    impressions: Option<Value>,
    revenue: Option<Value>,
}

/// Payouts endpoint response shell
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PayoutsBody {
    payouts: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PayoutRowBody {
    period: Option<Value>,
    impressions: Option<Value>,
    gross: Option<Value>,
    fee: Option<Value>,
    net: Option<Value>,
    status: Option<Value>,
}

/// Reads a revenue endpoint body into a payload. Never fails: an unreadable
/// body maps to the empty degraded payload.
pub fn parse_revenue_body(body: &str, period: RevenuePeriod) -> RevenuePayload {
    let shell: RevenueBody = match serde_json::from_str(body) {
        Ok(shell) => shell,
        Err(err) => {
            warn!("Unreadable {} revenue body, reporting zeros: {}", period, err);
            return RevenuePayload::empty_degraded(period);
        }
    };

    let mut degraded = false;

    let snapshot = match shell.summary.and_then(|value| from_object(&value)) {
        Some(fields) => parse_summary_block(fields, &mut degraded),
        None => {
            warn!("Revenue body has no readable summary block, defaulting to zeros");
            degraded = true;
            RevenueSnapshot::default()
        }
    };

    let (records, records_missing) = match shell.daily.as_ref().and_then(Value::as_array) {
        Some(rows) => {
            let records = rows
                .iter()
                .map(|row| parse_daily_row(row, &mut degraded))
                .collect();
            (records, false)
        }
        None => {
            warn!("Revenue body has no readable daily section");
            degraded = true;
            (Vec::new(), true)
        }
    };

    RevenuePayload {
        period,
        snapshot,
        records,
        records_missing,
        degraded,
    }
}

/// Reads a payouts endpoint body into a payload. Never fails: an unreadable
/// body maps to the empty degraded payload.
pub fn parse_payouts_body(body: &str) -> PayoutPayload {
    let shell: PayoutsBody = match serde_json::from_str(body) {
        Ok(shell) => shell,
        Err(err) => {
            warn!("Unreadable payouts body, reporting no rows: {}", err);
            return PayoutPayload::empty_degraded();
        }
    };

    let mut degraded = false;

    let rows = match shell.payouts.as_ref().and_then(Value::as_array) {
        Some(rows) => rows
            .iter()
            .map(|row| parse_payout_row(row, &mut degraded))
            .collect(),
        None => {
            warn!("Payouts body has no readable payouts section");
            degraded = true;
            Vec::new()
        }
    };

    PayoutPayload { rows, degraded }
}

fn parse_summary_block(fields: SummaryBody, degraded: &mut bool) -> RevenueSnapshot {
    RevenueSnapshot {
        total_earnings_ntd: amount_or_zero(fields.total_earnings, "summary.totalEarnings", degraded),
        last_period_ntd: amount_or_zero(
            fields.last_month_revenue,
            "summary.lastMonthRevenue",
            degraded,
        ),
        pending_payout_ntd: amount_or_zero(fields.pending_payout, "summary.pendingPayout", degraded),
        gross_ntd: amount_or_zero(fields.gross_revenue, "summary.grossRevenue", degraded),
        net_ntd: amount_or_zero(fields.net_revenue, "summary.netRevenue", degraded),
        impressions: count_or_zero(fields.impressions, "summary.impressions", degraded),
    }
}

fn parse_daily_row(row: &Value, degraded: &mut bool) -> RevenueRecord {
    let fields: DailyRowBody = match serde_json::from_value(row.clone()) {
        Ok(fields) => fields,
        Err(_) => {
            *degraded = true;
            DailyRowBody::default()
        }
    };

    RevenueRecord {
        // The date is not consumed by the aggregation, so an unreadable one
        // does not degrade the payload
        date: fields.date.as_ref().and_then(coerce_date),
        impressions: count_or_zero(fields.impressions, "daily.impressions", degraded),
        gross_ntd: amount_or_zero(fields.revenue, "daily.revenue", degraded),
    }
}

fn parse_payout_row(row: &Value, degraded: &mut bool) -> PayoutRecord {
    let fields: PayoutRowBody = match serde_json::from_value(row.clone()) {
        Ok(fields) => fields,
        Err(_) => {
            *degraded = true;
            PayoutRowBody::default()
        }
    };

    let period = match fields.period.as_ref().and_then(coerce_text) {
        Some(period) => period,
        None => {
            warn!("Payout row has no readable period label");
            *degraded = true;
            String::new()
        }
    };

    let status = match fields.status.as_ref().and_then(coerce_text) {
        Some(token) => match token.parse::<PayoutStatus>() {
            Ok(status) => status,
            Err(_) => {
                warn!("Unknown payout status '{}', treating as pending", token);
                *degraded = true;
                PayoutStatus::Pending
            }
        },
        None => {
            warn!("Payout row has no readable status, treating as pending");
            *degraded = true;
            PayoutStatus::Pending
        }
    };

    PayoutRecord {
        period,
        impressions: count_or_zero(fields.impressions, "payouts.impressions", degraded),
        gross_ntd: amount_or_zero(fields.gross, "payouts.gross", degraded),
        fee_ntd: amount_or_zero(fields.fee, "payouts.fee", degraded),
        net_ntd: amount_or_zero(fields.net, "payouts.net", degraded),
        status,
    }
}

fn from_object<T: serde::de::DeserializeOwned>(value: &Value) -> Option<T> {
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value.clone()).ok()
}

fn amount_or_zero(value: Option<Value>, field: &str, degraded: &mut bool) -> Decimal {
    match value.as_ref().and_then(coerce_amount) {
        Some(amount) => amount,
        None => {
            warn!("Defaulting unreadable wire field {} to zero", field);
            *degraded = true;
            Decimal::ZERO
        }
    }
}

fn count_or_zero(value: Option<Value>, field: &str, degraded: &mut bool) -> u64 {
    match value.as_ref().and_then(coerce_count) {
        Some(count) => count,
        None => {
            warn!("Defaulting unreadable wire field {} to zero", field);
            *degraded = true;
            0
        }
    }
}
