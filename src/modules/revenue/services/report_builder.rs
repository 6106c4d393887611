use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::RevenuePolicy;
use crate::core::currency::{round_ntd, NTD_SUB_DOLLAR_SCALE};
use crate::core::Result;
use crate::modules::revenue::models::{
    PayoutPayload, PayoutStatus, PayoutView, RevenuePayload, RevenueSummary,
};

/// Builds display-ready revenue reports from parsed backend payloads.
///
/// Every figure the dashboard shows comes through here, so the money policy
/// lives in exactly one place:
/// - net revenue is always gross * (1 - fee_rate) with the configured rate;
///   nets scattered through backend responses are never used for display
/// - average CPM is the ratio of aggregated totals (gross / impressions *
///   1000) against gross revenue, never a mean of per-record CPMs
pub struct ReportBuilder {
    policy: RevenuePolicy,
}

impl ReportBuilder {
    pub fn new(policy: RevenuePolicy) -> Result<Self> {
        policy.validate()?;
        Ok(ReportBuilder { policy })
    }

    pub fn policy(&self) -> RevenuePolicy {
        self.policy
    }

    /// Net revenue after the platform fee: `gross * (1 - fee_rate)`.
    ///
    /// For `gross >= 0` and `fee_rate` in `[0, 1]` the result stays within
    /// `[0, gross]`.
    pub fn net_revenue(gross: Decimal, fee_rate: Decimal) -> Decimal {
        gross * (Decimal::ONE - fee_rate)
    }

    /// Average CPM: aggregated gross per thousand impressions.
    ///
    /// Zero impressions yield zero CPM, not an error.
    pub fn average_cpm(gross: Decimal, impressions: u64) -> Decimal {
        if impressions == 0 {
            return Decimal::ZERO;
        }
        gross / Decimal::from(impressions) * Decimal::ONE_THOUSAND
    }

    /// Builds the dashboard summary for one reporting window.
    ///
    /// Period totals are aggregated from the per-bucket records; the
    /// backend's own totals in the snapshot serve only as a fallback (when
    /// the records section was unreadable) and as a cross-check. Accrual
    /// figures pass through from the snapshot. Outputs are display-rounded:
    /// currency to 2 decimal places, CPM to 3.
    pub fn build_summary(&self, payload: &RevenuePayload) -> RevenueSummary {
        debug!(
            "Building {} revenue summary from {} records (degraded: {})",
            payload.period,
            payload.records.len(),
            payload.degraded
        );

        let (gross, impressions) = if payload.records_missing {
            // Records section unreadable: the snapshot totals are the only
            // period figures left.
            (payload.snapshot.gross_ntd, payload.snapshot.impressions)
        } else {
            let mut gross = Decimal::ZERO;
            let mut impressions: u64 = 0;
            for record in &payload.records {
                gross += record.gross_ntd;
                impressions = impressions.saturating_add(record.impressions);
            }
            (gross, impressions)
        };

        let net = Self::net_revenue(gross, self.policy.fee_rate);

        if !payload.degraded && !payload.records.is_empty() {
            self.cross_check_snapshot(payload, gross, net, impressions);
        }

        RevenueSummary {
            period: payload.period,
            total_earnings_ntd: round_ntd(payload.snapshot.total_earnings_ntd),
            this_period_ntd: round_ntd(net),
            last_period_ntd: round_ntd(payload.snapshot.last_period_ntd),
            pending_payout_ntd: round_ntd(payload.snapshot.pending_payout_ntd),
            total_impressions: impressions,
            average_cpm_ntd: Self::average_cpm(gross, impressions)
                .round_dp(NTD_SUB_DOLLAR_SCALE),
            degraded: payload.degraded,
        }
    }

    /// Builds the payout history view.
    ///
    /// Non-terminal rows are reclassified against the configured minimum
    /// payout; terminal rows (paid, processing) pass through untouched.
    /// Rows are never dropped and amounts never rewritten, so output length
    /// and total net always equal the input. Ordering is most recent period
    /// first; rows with equal labels keep their backend order.
    pub fn build_payout_view(&self, payload: &PayoutPayload) -> PayoutView {
        debug!(
            "Building payout view from {} rows (degraded: {})",
            payload.rows.len(),
            payload.degraded
        );

        let mut records = payload.rows.clone();

        for record in &mut records {
            if !record.amounts_reconcile() {
                warn!(
                    "Payout period {} does not reconcile: gross {} - fee {} != net {}",
                    record.period, record.gross_ntd, record.fee_ntd, record.net_ntd
                );
            }

            if !record.status.is_terminal() {
                record.status = if record.net_ntd >= self.policy.minimum_payout_ntd {
                    PayoutStatus::Eligible
                } else {
                    PayoutStatus::BelowThreshold
                };
            }
        }

        // Stable sort: equal labels keep backend order
        records.sort_by(|a, b| b.period.cmp(&a.period));

        PayoutView {
            records,
            degraded: payload.degraded,
        }
    }

    /// Flags disagreement between the aggregated records and the backend's
    /// own period totals. Display figures always come from the aggregation;
    /// this only makes the drift visible.
    fn cross_check_snapshot(
        &self,
        payload: &RevenuePayload,
        gross: Decimal,
        net: Decimal,
        impressions: u64,
    ) {
        // NT$0.01
        let tolerance = Decimal::new(1, 2);
        let snapshot = &payload.snapshot;

        if (gross - snapshot.gross_ntd).abs() > tolerance {
            warn!(
                "Backend {} gross {} disagrees with aggregated records ({})",
                payload.period, snapshot.gross_ntd, gross
            );
        }

        if (net - snapshot.net_ntd).abs() > tolerance {
            warn!(
                "Backend {} net {} disagrees with the configured fee policy ({})",
                payload.period, snapshot.net_ntd, net
            );
        }

        if impressions != snapshot.impressions {
            warn!(
                "Backend {} impressions {} disagree with aggregated records ({})",
                payload.period, snapshot.impressions, impressions
            );
        }
    }
}
