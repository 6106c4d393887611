// Parsed revenue data for one reporting window.
//
// The backend reports two kinds of figures: accruals the client cannot
// derive on its own (all-time earnings, previous period, pending payout) and
// the per-bucket records for the selected period. `RevenuePayload` carries
// both, plus the flags the wire layer sets while reading a lenient body.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::period::RevenuePeriod;

/// One sub-period bucket of the selected reporting window.
///
/// Amounts and counts are non-negative by construction: the wire layer
/// defaults anything it cannot read as such to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueRecord {
    /// Bucket date, when the backend provided a parseable one
    pub date: Option<NaiveDate>,

    /// Ad impressions served in the bucket
    pub impressions: u64,

    /// Gross revenue earned in the bucket, before platform fees
    pub gross_ntd: Decimal,
}

/// The backend's own summary block for the selected period.
///
/// The accrual fields (`total_earnings_ntd`, `last_period_ntd`,
/// `pending_payout_ntd`) are figures only the backend can know and pass
/// straight into the report. `gross_ntd`, `net_ntd` and `impressions` are
/// the backend's period totals; the report builder recomputes those from the
/// records and uses the snapshot copy only for fallback and cross-checking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueSnapshot {
    pub total_earnings_ntd: Decimal,
    pub last_period_ntd: Decimal,
    pub pending_payout_ntd: Decimal,
    pub gross_ntd: Decimal,
    pub net_ntd: Decimal,
    pub impressions: u64,
}

/// Parsed revenue endpoint response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePayload {
    pub period: RevenuePeriod,
    pub snapshot: RevenueSnapshot,
    pub records: Vec<RevenueRecord>,

    /// The records section itself was absent or not an array. An explicitly
    /// empty section is a claim of zero activity and does not set this.
    pub records_missing: bool,

    /// Some consumed field was missing, malformed, or clamped
    pub degraded: bool,
}

impl RevenuePayload {
    /// Payload with no data at all, flagged clean (a backend with nothing to
    /// report, not a read failure).
    pub fn empty(period: RevenuePeriod) -> Self {
        RevenuePayload {
            period,
            snapshot: RevenueSnapshot::default(),
            records: Vec::new(),
            records_missing: false,
            degraded: false,
        }
    }

    /// Payload for a body that could not be read at all
    pub fn empty_degraded(period: RevenuePeriod) -> Self {
        RevenuePayload {
            period,
            snapshot: RevenueSnapshot::default(),
            records: Vec::new(),
            records_missing: true,
            degraded: true,
        }
    }
}
