pub mod session;
pub mod wire;

pub use session::SessionContext;
pub use wire::{parse_payouts_body, parse_revenue_body};
