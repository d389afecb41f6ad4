//! Application services

mod tax;

pub use tax::{check_single_day, TaxService};
