use async_trait::async_trait;

use crate::core::Result;
use crate::modules::backend::models::SessionContext;
use crate::modules::revenue::models::{PayoutPayload, RevenuePayload, RevenuePeriod};

/// Read access to the ads backend.
///
/// The production implementor speaks REST; tests substitute fakes at this
/// seam. `Err` is reserved for transport and auth failures: a readable 2xx
/// body always parses (leniently) into a payload.
#[async_trait]
pub trait RevenueBackend: Send + Sync {
    /// Fetch revenue figures for one reporting window
    async fn fetch_revenue(
        &self,
        session: &SessionContext,
        period: RevenuePeriod,
    ) -> Result<RevenuePayload>;

    /// Fetch the payout settlement history
    async fn fetch_payouts(&self, session: &SessionContext) -> Result<PayoutPayload>;
}
