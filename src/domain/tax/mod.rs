//! Daily congestion tax
//!
//! Contains the fee calculator and the breakdown types it produces.

pub mod model;

pub use model::{ChargeWindow, DailyTaxBreakdown, FeeCalculator, PassageCharge};
