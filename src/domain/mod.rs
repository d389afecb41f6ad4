//! Domain layer: vehicle classes, tariff and calendar reference data, and the
//! fee calculator built on top of them.

pub mod calendar;
pub mod error;
pub mod tariff;
pub mod tax;
pub mod vehicle;

// Re-export commonly used types
pub use calendar::{TollFreeCalendar, TollFreeReason};
pub use error::{DomainError, DomainResult};
pub use tariff::{RateBand, RateTable, CHARGE_WINDOW_MINUTES, DAILY_CAP};
pub use tax::{ChargeWindow, DailyTaxBreakdown, FeeCalculator, PassageCharge};
pub use vehicle::{Vehicle, VehicleClass};
