pub mod models;
pub mod services;

pub use models::{
    PayoutPayload, PayoutRecord, PayoutStatus, PayoutView, RevenuePayload, RevenuePeriod,
    RevenueRecord, RevenueSnapshot, RevenueSummary,
};
pub use services::{ReportBuilder, RevenueDashboard, RevenueService};
