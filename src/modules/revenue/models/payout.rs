// Payout history rows and the settlement status lifecycle.
//
// A payout row is one settlement period. The backend owns the terminal
// states (money moved or is moving); the client derives the anticipatory
// ones from the configured minimum-payout threshold.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Settlement status of a payout period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayoutStatus {
    /// Reported by the backend, not yet classified against the threshold
    #[serde(rename = "pending")]
    Pending,

    /// Net amount has not reached the minimum payout threshold
    #[serde(rename = "below_threshold")]
    BelowThreshold,

    /// Net amount has reached the threshold and can be requested
    #[serde(rename = "eligible")]
    Eligible,

    /// Payout request accepted, transfer in flight
    #[serde(rename = "processing")]
    Processing,

    /// Transfer settled
    #[serde(rename = "paid")]
    Paid,
}

impl PayoutStatus {
    /// Terminal states are backend-authoritative: the money moved or is
    /// moving, so threshold reclassification must leave them alone.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PayoutStatus::Processing | PayoutStatus::Paid)
    }
}

impl Default for PayoutStatus {
    fn default() -> Self {
        PayoutStatus::Pending
    }
}

impl std::fmt::Display for PayoutStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayoutStatus::Pending => write!(f, "pending"),
            PayoutStatus::BelowThreshold => write!(f, "below_threshold"),
            PayoutStatus::Eligible => write!(f, "eligible"),
            PayoutStatus::Processing => write!(f, "processing"),
            PayoutStatus::Paid => write!(f, "paid"),
        }
    }
}

impl std::str::FromStr for PayoutStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PayoutStatus::Pending),
            "below_threshold" => Ok(PayoutStatus::BelowThreshold),
            "eligible" => Ok(PayoutStatus::Eligible),
            "processing" => Ok(PayoutStatus::Processing),
            "paid" => Ok(PayoutStatus::Paid),
            // Older backend deployments report settled periods as "completed"
            "completed" => Ok(PayoutStatus::Paid),
            _ => Err(format!("Invalid payout status: {}", s)),
        }
    }
}

/// One settlement period row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutRecord {
    /// Backend period label, ISO-style (`"2025-07"`); lexicographic order is
    /// chronological order
    pub period: String,

    /// Impressions served in the period
    pub impressions: u64,

    /// Gross revenue for the period
    pub gross_ntd: Decimal,

    /// Platform fee withheld
    pub fee_ntd: Decimal,

    /// Net amount payable
    pub net_ntd: Decimal,

    /// Settlement status
    pub status: PayoutStatus,
}

impl PayoutRecord {
    /// True when `gross - fee == net` exactly. The builder logs rows that
    /// fail this; it never rewrites their amounts.
    pub fn amounts_reconcile(&self) -> bool {
        self.gross_ntd - self.fee_ntd == self.net_ntd
    }
}

/// Parsed payouts endpoint response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutPayload {
    pub rows: Vec<PayoutRecord>,

    /// Some consumed field was missing, malformed, or clamped
    pub degraded: bool,
}

impl PayoutPayload {
    pub fn empty() -> Self {
        PayoutPayload {
            rows: Vec::new(),
            degraded: false,
        }
    }

    /// Payload for a body that could not be read at all
    pub fn empty_degraded() -> Self {
        PayoutPayload {
            rows: Vec::new(),
            degraded: true,
        }
    }
}

/// Display-ready payout history: reclassified statuses, most recent first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutView {
    pub records: Vec<PayoutRecord>,
    pub degraded: bool,
}
