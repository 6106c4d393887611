//! Contract tests for the ads-backend response bodies
//!
//! Validates the two consumed shapes: `GET /api/ads/revenue` (summary block
//! plus daily rows) and `GET /api/ads/payouts` (period rows with status).
//! Parsing is total: missing or malformed fields default and set the
//! degraded flag, never fail the whole response.

#[path = "../helpers/mod.rs"]
mod helpers;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use briocast_revenue::modules::backend::models::{parse_payouts_body, parse_revenue_body};
use briocast_revenue::modules::revenue::RevenueSnapshot;
use briocast_revenue::{PayoutStatus, RevenuePeriod};

#[test]
fn test_revenue_response_contract() {
    helpers::init_tracing();

    let payload = parse_revenue_body(helpers::REVENUE_BODY, RevenuePeriod::Month);

    assert_eq!(payload.period, RevenuePeriod::Month);
    assert!(!payload.degraded);
    assert!(!payload.records_missing);

    // Summary block
    assert_eq!(payload.snapshot.total_earnings_ntd, dec!(45231.5));
    assert_eq!(payload.snapshot.net_ntd, dec!(3120.75));
    assert_eq!(payload.snapshot.gross_ntd, dec!(4458.21));
    assert_eq!(payload.snapshot.impressions, 152_340);
    assert_eq!(payload.snapshot.pending_payout_ntd, dec!(3120.75));
    assert_eq!(payload.snapshot.last_period_ntd, dec!(2890.4));

    // Daily rows keep order and fields
    assert_eq!(payload.records.len(), 3);
    assert_eq!(payload.records[1].date, NaiveDate::from_ymd_opt(2025, 7, 13));
    assert_eq!(payload.records[1].impressions, 5_123);
    assert_eq!(payload.records[1].gross_ntd, dec!(142.5));
}

#[test]
fn test_payouts_response_contract() {
    helpers::init_tracing();

    let payload = parse_payouts_body(helpers::PAYOUTS_BODY);

    assert!(!payload.degraded);
    assert_eq!(payload.rows.len(), 3);

    let first = &payload.rows[0];
    assert_eq!(first.period, "2025-07");
    assert_eq!(first.impressions, 152_340);
    assert_eq!(first.gross_ntd, dec!(4458.21));
    assert_eq!(first.fee_ntd, dec!(1337.46));
    assert_eq!(first.net_ntd, dec!(3120.75));
    assert_eq!(first.status, PayoutStatus::Pending);
    assert!(first.amounts_reconcile());

    assert_eq!(payload.rows[1].status, PayoutStatus::Processing);
    assert_eq!(payload.rows[2].status, PayoutStatus::Paid);
}

#[test]
fn test_numeric_fields_accept_strings() {
    let body = r#"{
        "summary": {
            "totalEarnings": "45231.5",
            "netRevenue": "3120.75",
            "grossRevenue": "4458.21",
            "impressions": "152340",
            "pendingPayout": "3120.75",
            "lastMonthRevenue": "2890.4"
        },
        "daily": [
            {"date": "2025-07-13", "impressions": "5123", "revenue": "142.5"}
        ]
    }"#;

    let payload = parse_revenue_body(body, RevenuePeriod::Month);

    assert!(!payload.degraded);
    assert_eq!(payload.snapshot.total_earnings_ntd, dec!(45231.5));
    assert_eq!(payload.snapshot.impressions, 152_340);
    assert_eq!(payload.records[0].impressions, 5_123);
    assert_eq!(payload.records[0].gross_ntd, dec!(142.5));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let body = r#"{
        "summary": {
            "totalEarnings": 100,
            "netRevenue": 70,
            "grossRevenue": 100,
            "impressions": 1000,
            "pendingPayout": 70,
            "lastMonthRevenue": 50,
            "currency": "TWD"
        },
        "daily": [],
        "requestId": "abc-123"
    }"#;

    let payload = parse_revenue_body(body, RevenuePeriod::Month);

    assert!(!payload.degraded);
    assert_eq!(payload.snapshot.gross_ntd, dec!(100));
}

#[test]
fn test_missing_summary_field_defaults_to_zero() {
    let body = r#"{
        "summary": {
            "totalEarnings": 45231.5,
            "netRevenue": 3120.75,
            "grossRevenue": 4458.21,
            "pendingPayout": 3120.75,
            "lastMonthRevenue": 2890.4
        },
        "daily": []
    }"#;

    let payload = parse_revenue_body(body, RevenuePeriod::Month);

    assert!(payload.degraded);
    assert_eq!(payload.snapshot.impressions, 0);
    // The readable fields still come through
    assert_eq!(payload.snapshot.total_earnings_ntd, dec!(45231.5));
}

#[test]
fn test_negative_amount_defaults_to_zero() {
    let body = r#"{
        "summary": {
            "totalEarnings": -500,
            "netRevenue": 70,
            "grossRevenue": 100,
            "impressions": 1000,
            "pendingPayout": 70,
            "lastMonthRevenue": 50
        },
        "daily": []
    }"#;

    let payload = parse_revenue_body(body, RevenuePeriod::Month);

    assert!(payload.degraded);
    assert_eq!(payload.snapshot.total_earnings_ntd, Decimal::ZERO);
}

#[test]
fn test_absurd_amount_defaults_to_zero() {
    let body = r#"{
        "summary": {
            "totalEarnings": 1e20,
            "netRevenue": 70,
            "grossRevenue": 100,
            "impressions": 1000,
            "pendingPayout": 70,
            "lastMonthRevenue": 50
        },
        "daily": []
    }"#;

    let payload = parse_revenue_body(body, RevenuePeriod::Month);

    assert!(payload.degraded);
    assert_eq!(payload.snapshot.total_earnings_ntd, Decimal::ZERO);
    assert_eq!(payload.snapshot.gross_ntd, dec!(100));
}

#[test]
fn test_malformed_daily_row_defaults_per_field() {
    let body = r#"{
        "summary": {
            "totalEarnings": 100,
            "netRevenue": 70,
            "grossRevenue": 100,
            "impressions": 1000,
            "pendingPayout": 70,
            "lastMonthRevenue": 50
        },
        "daily": [
            {"date": "2025-07-13", "impressions": "many", "revenue": 142.5}
        ]
    }"#;

    let payload = parse_revenue_body(body, RevenuePeriod::Month);

    assert!(payload.degraded);
    assert!(!payload.records_missing);
    assert_eq!(payload.records[0].impressions, 0);
    assert_eq!(payload.records[0].gross_ntd, dec!(142.5));
}

#[test]
fn test_unreadable_revenue_body_yields_empty_degraded_payload() {
    let payload = parse_revenue_body("<html>502 Bad Gateway</html>", RevenuePeriod::Day);

    assert!(payload.degraded);
    assert!(payload.records_missing);
    assert!(payload.records.is_empty());
    assert_eq!(payload.snapshot, RevenueSnapshot::default());
    assert_eq!(payload.period, RevenuePeriod::Day);
}

#[test]
fn test_unreadable_payouts_body_yields_empty_degraded_payload() {
    let payload = parse_payouts_body("<html>502 Bad Gateway</html>");

    assert!(payload.degraded);
    assert!(payload.rows.is_empty());
}

#[test]
fn test_completed_status_is_accepted_as_paid() {
    let body = r#"{
        "payouts": [
            {"period": "2025-05", "impressions": 1000, "gross": 100, "fee": 30, "net": 70, "status": "completed"}
        ]
    }"#;

    let payload = parse_payouts_body(body);

    assert!(!payload.degraded);
    assert_eq!(payload.rows[0].status, PayoutStatus::Paid);
}

#[test]
fn test_unknown_status_defaults_to_pending() {
    let body = r#"{
        "payouts": [
            {"period": "2025-05", "impressions": 1000, "gross": 100, "fee": 30, "net": 70, "status": "settled"}
        ]
    }"#;

    let payload = parse_payouts_body(body);

    assert!(payload.degraded);
    assert_eq!(payload.rows[0].status, PayoutStatus::Pending);
}

#[test]
fn test_missing_payouts_section_degrades() {
    let payload = parse_payouts_body(r#"{"rows": []}"#);

    assert!(payload.degraded);
    assert!(payload.rows.is_empty());
}

#[test]
fn test_garbage_payout_row_keeps_its_slot() {
    let body = r#"{
        "payouts": [
            {"period": "2025-07", "impressions": 1000, "gross": 100, "fee": 30, "net": 70, "status": "pending"},
            42
        ]
    }"#;

    let payload = parse_payouts_body(body);

    assert!(payload.degraded);
    assert_eq!(payload.rows.len(), 2);
    assert_eq!(payload.rows[1].period, "");
    assert_eq!(payload.rows[1].net_ntd, Decimal::ZERO);
    assert_eq!(payload.rows[1].status, PayoutStatus::Pending);
}
