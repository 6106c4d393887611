pub mod report_builder;
pub mod revenue_service;

pub use report_builder::ReportBuilder;
pub use revenue_service::{RevenueDashboard, RevenueService};
