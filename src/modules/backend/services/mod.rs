pub mod backend_trait;
pub mod rest_backend;

pub use backend_trait::RevenueBackend;
pub use rest_backend::RestBackend;
