//! # Congestion Tax Calculator
//!
//! Computes the congestion tax one vehicle owes for one day of toll-gate
//! passages under the 2013 Gothenburg schedule.
//!
//! ## Architecture
//!
//! - **domain**: vehicle classes, rate table, toll-free calendar and the fee calculator
//! - **application**: `TaxService`, which adds input checks and logging
//! - **config**: TOML configuration for the command-line front end
//! - **shared**: application-wide errors and timestamp parsing
//!
//! ```
//! use chrono::NaiveDate;
//! use congestion_tax::{FeeCalculator, VehicleClass};
//!
//! let day = NaiveDate::from_ymd_opt(2013, 2, 7).unwrap();
//! let passages = [
//!     day.and_hms_opt(6, 23, 27).unwrap(),
//!     day.and_hms_opt(15, 27, 0).unwrap(),
//! ];
//! let tax = FeeCalculator::default()
//!     .compute_daily_tax(Some(VehicleClass::Car), &passages)
//!     .unwrap();
//! assert_eq!(tax, 21);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod shared;

pub use application::TaxService;
pub use config::{default_config_path, AppConfig, OutputFormat};
pub use domain::{
    DailyTaxBreakdown, DomainError, DomainResult, FeeCalculator, TollFreeReason, Vehicle,
    VehicleClass, DAILY_CAP,
};
pub use shared::{AppError, AppResult};
