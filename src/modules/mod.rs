pub mod backend;
pub mod revenue;
