//! Application layer: services that call into the domain calculator

pub mod services;

// Re-export key types for convenience
pub use services::{check_single_day, TaxService};
