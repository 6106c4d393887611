pub mod models;
pub mod services;

pub use models::SessionContext;
pub use services::{RestBackend, RevenueBackend};
