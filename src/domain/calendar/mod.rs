//! Toll-free dates

pub mod model;

pub use model::{TollFreeCalendar, TollFreeReason, PUBLIC_HOLIDAYS_2013, TOLL_FREE_MONTH};
