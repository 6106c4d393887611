//! brioCAST Revenue Reporting Core
//!
//! This library turns raw ads-backend responses into the display-ready
//! figures the brioCAST mobile shell renders: period revenue summaries
//! (earnings, impressions, average CPM), payout history with threshold
//! classification, and the NTD formatting rules.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use config::{Config, RevenuePolicy};
pub use crate::core::currency::{format_count, format_currency};
pub use crate::core::{AppError, Result};
pub use modules::backend::{RestBackend, RevenueBackend, SessionContext};
pub use modules::revenue::{
    PayoutRecord, PayoutStatus, PayoutView, ReportBuilder, RevenueDashboard, RevenuePeriod,
    RevenueService, RevenueSummary,
};
