//! Tariff reference data
//!
//! Contains the time-of-day rate table, the daily cap and the charge window
//! length used when aggregating passages.

pub mod model;

pub use model::{RateBand, RateTable, CHARGE_WINDOW_MINUTES, DAILY_CAP, GOTHENBURG_2013_BANDS};
