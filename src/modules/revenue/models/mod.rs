pub mod payout;
pub mod period;
pub mod record;
pub mod summary;

pub use payout::{PayoutPayload, PayoutRecord, PayoutStatus, PayoutView};
pub use period::RevenuePeriod;
pub use record::{RevenuePayload, RevenueRecord, RevenueSnapshot};
pub use summary::RevenueSummary;
