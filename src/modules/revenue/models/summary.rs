// Display-ready revenue summary.
//
// Everything the revenue dashboard's header cards show, already rounded for
// display: currency fields to 2 decimal places, CPM to 3 so sub-dollar
// fragments survive.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::period::RevenuePeriod;

/// Aggregated revenue figures for one reporting window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSummary {
    /// Window the figures were built for
    pub period: RevenuePeriod,

    /// All-time earnings accrued to the account
    pub total_earnings_ntd: Decimal,

    /// Net revenue for the selected window after the platform fee
    pub this_period_ntd: Decimal,

    /// Net revenue of the previous window
    pub last_period_ntd: Decimal,

    /// Earnings accrued but not yet paid out
    pub pending_payout_ntd: Decimal,

    /// Impressions served in the selected window
    pub total_impressions: u64,

    /// Average CPM over the window: aggregated gross per 1000 impressions
    pub average_cpm_ntd: Decimal,

    /// Some backend field was missing or malformed and got defaulted
    pub degraded: bool,
}

impl RevenueSummary {
    /// All-zero summary for a window with no activity
    pub fn empty(period: RevenuePeriod) -> Self {
        RevenueSummary {
            period,
            total_earnings_ntd: Decimal::ZERO,
            this_period_ntd: Decimal::ZERO,
            last_period_ntd: Decimal::ZERO,
            pending_payout_ntd: Decimal::ZERO,
            total_impressions: 0,
            average_cpm_ntd: Decimal::ZERO,
            degraded: false,
        }
    }

    /// True when pending earnings have reached the payout threshold; drives
    /// the "request payout" affordance.
    pub fn payout_requestable(&self, threshold_ntd: Decimal) -> bool {
        self.pending_payout_ntd >= threshold_ntd
    }
}
