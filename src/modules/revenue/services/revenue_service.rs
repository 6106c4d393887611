use std::sync::Arc;

use tracing::{error, info};

use crate::config::{Config, RevenuePolicy};
use crate::core::Result;
use crate::modules::backend::{RestBackend, RevenueBackend, SessionContext};
use crate::modules::revenue::models::{PayoutView, RevenuePeriod, RevenueSummary};

use super::report_builder::ReportBuilder;

/// Everything one dashboard render needs.
///
/// The two sides resolve independently: a failed summary fetch never blocks
/// the payout history from rendering, and vice versa.
pub struct RevenueDashboard {
    pub period: RevenuePeriod,
    pub summary: Result<RevenueSummary>,
    pub payouts: Result<PayoutView>,
}

/// Fetch-then-build pipeline behind the revenue screens.
///
/// Stateless: every load fetches fresh payloads and rebuilds from scratch,
/// so pull-to-refresh is simply another call and concurrent loads need no
/// coordination.
pub struct RevenueService {
    backend: Arc<dyn RevenueBackend>,
    builder: ReportBuilder,
}

impl RevenueService {
    pub fn new(backend: Arc<dyn RevenueBackend>, builder: ReportBuilder) -> Self {
        RevenueService { backend, builder }
    }

    /// Wires the production service: REST backend plus the configured
    /// revenue policy.
    pub fn from_config(config: &Config) -> Result<Self> {
        let backend = Arc::new(RestBackend::new(&config.api)?);
        let builder = ReportBuilder::new(config.policy)?;
        Ok(RevenueService::new(backend, builder))
    }

    /// Revenue-sharing terms the service classifies against
    pub fn policy(&self) -> RevenuePolicy {
        self.builder.policy()
    }

    /// Loads the full dashboard for one reporting window, fetching both
    /// endpoints concurrently.
    pub async fn load_dashboard(
        &self,
        session: &SessionContext,
        period: RevenuePeriod,
    ) -> RevenueDashboard {
        info!(period = %period, "Loading revenue dashboard");

        let (summary, payouts) = tokio::join!(
            self.load_summary(session, period),
            self.load_payouts(session)
        );

        RevenueDashboard {
            period,
            summary,
            payouts,
        }
    }

    /// Fetches and builds the summary for one reporting window
    pub async fn load_summary(
        &self,
        session: &SessionContext,
        period: RevenuePeriod,
    ) -> Result<RevenueSummary> {
        match self.backend.fetch_revenue(session, period).await {
            Ok(payload) => Ok(self.builder.build_summary(&payload)),
            Err(err) => {
                error!(period = %period, error = %err, "Revenue fetch failed");
                Err(err)
            }
        }
    }

    /// Fetches and builds the payout history view
    pub async fn load_payouts(&self, session: &SessionContext) -> Result<PayoutView> {
        match self.backend.fetch_payouts(session).await {
            Ok(payload) => Ok(self.builder.build_payout_view(&payload)),
            Err(err) => {
                error!(error = %err, "Payouts fetch failed");
                Err(err)
            }
        }
    }
}
