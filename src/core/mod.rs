pub mod currency;
pub mod error;
pub mod json;

pub use error::{AppError, Result};
