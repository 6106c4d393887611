use crate::core::{AppError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub api: ApiConfig,
    pub policy: RevenuePolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Ads backend endpoint settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

/// Revenue-sharing policy of the deployment.
///
/// There is no default fee rate or payout threshold: both are commercial
/// terms that differ per deployment, so configuration must state them
/// explicitly or loading fails.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RevenuePolicy {
    /// Platform fee withheld from gross revenue, as a fraction in [0, 1]
    pub fee_rate: Decimal,
    /// Minimum net amount a payout period must reach to be eligible
    pub minimum_payout_ntd: Decimal,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            api: ApiConfig {
                base_url: env::var("BRIOCAST_API_BASE_URL")
                    .unwrap_or_else(|_| "https://api.briolabs.io".to_string()),
                timeout_secs: env::var("BRIOCAST_HTTP_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid BRIOCAST_HTTP_TIMEOUT_SECS".to_string())
                    })?,
                connect_timeout_secs: env::var("BRIOCAST_CONNECT_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid BRIOCAST_CONNECT_TIMEOUT_SECS".to_string())
                    })?,
            },
            policy: RevenuePolicy {
                fee_rate: env::var("BRIOCAST_FEE_RATE")
                    .map_err(|_| AppError::Configuration("BRIOCAST_FEE_RATE not set".to_string()))?
                    .parse()
                    .map_err(|_| AppError::Configuration("Invalid BRIOCAST_FEE_RATE".to_string()))?,
                minimum_payout_ntd: env::var("BRIOCAST_MIN_PAYOUT_NTD")
                    .map_err(|_| {
                        AppError::Configuration("BRIOCAST_MIN_PAYOUT_NTD not set".to_string())
                    })?
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid BRIOCAST_MIN_PAYOUT_NTD".to_string())
                    })?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(AppError::Configuration(
                "API base URL must not be empty".to_string(),
            ));
        }

        if self.api.timeout_secs == 0 || self.api.connect_timeout_secs == 0 {
            return Err(AppError::Configuration(
                "HTTP timeouts must be greater than 0".to_string(),
            ));
        }

        self.policy.validate()
    }
}

impl RevenuePolicy {
    pub fn new(fee_rate: Decimal, minimum_payout_ntd: Decimal) -> Result<Self> {
        let policy = RevenuePolicy {
            fee_rate,
            minimum_payout_ntd,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fee_rate < Decimal::ZERO || self.fee_rate > Decimal::ONE {
            return Err(AppError::validation("Fee rate must be between 0 and 1"));
        }

        if self.minimum_payout_ntd < Decimal::ZERO {
            return Err(AppError::validation("Minimum payout must not be negative"));
        }

        Ok(())
    }
}
