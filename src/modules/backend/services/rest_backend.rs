use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::core::{AppError, Result};
use crate::modules::backend::models::wire::{parse_payouts_body, parse_revenue_body};
use crate::modules::backend::models::SessionContext;
use crate::modules::revenue::models::{PayoutPayload, RevenuePayload, RevenuePeriod};

use super::backend_trait::RevenueBackend;

/// REST client for the ads backend
pub struct RestBackend {
    client: Client,
    base_url: String,
}

impl RestBackend {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(RestBackend {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_text(&self, url: &str, session: &SessionContext) -> Result<String> {
        let request_id = Uuid::new_v4();

        info!(request_id = %request_id, url = %url, "Requesting ads backend");

        let response = self
            .client
            .get(url)
            .bearer_auth(session.token())
            .header("X-Request-ID", request_id.to_string())
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(request_id = %request_id, status = %status, "Backend rejected session credentials");
            return Err(AppError::unauthorized("Session rejected by backend"));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let excerpt: String = body.chars().take(200).collect();
            warn!(request_id = %request_id, status = %status, "Backend request failed");
            return Err(AppError::Backend(format!(
                "Backend error {}: {}",
                status, excerpt
            )));
        }

        let body = response.text().await?;
        info!(request_id = %request_id, bytes = body.len(), "Backend request completed");
        Ok(body)
    }
}

#[async_trait]
impl RevenueBackend for RestBackend {
    async fn fetch_revenue(
        &self,
        session: &SessionContext,
        period: RevenuePeriod,
    ) -> Result<RevenuePayload> {
        let url = format!(
            "{}/api/ads/revenue?period={}",
            self.base_url,
            period.as_query_value()
        );
        let body = self.get_text(&url, session).await?;
        Ok(parse_revenue_body(&body, period))
    }

    async fn fetch_payouts(&self, session: &SessionContext) -> Result<PayoutPayload> {
        let url = format!("{}/api/ads/payouts", self.base_url);
        let body = self.get_text(&url, session).await?;
        Ok(parse_payouts_body(&body))
    }
}
