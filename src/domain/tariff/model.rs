//! Time-of-day rate bands

use chrono::{NaiveTime, Timelike};

/// Maximum tax charged for one vehicle on one day
pub const DAILY_CAP: u32 = 60;

/// Passages within this many minutes of a window's first passage are charged once
pub const CHARGE_WINDOW_MINUTES: i64 = 60;

/// A band starts at `hour:minute` and lasts until the next band of the same hour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateBand {
    pub hour: u32,
    pub minute: u32,
    /// Fee in whole currency units
    pub fee: u32,
}

impl RateBand {
    pub const fn new(hour: u32, minute: u32, fee: u32) -> Self {
        Self { hour, minute, fee }
    }
}

/// 2013 schedule. Bands are only matched within their own hour, so hours
/// 9–14 and 16 have no band and are free.
pub const GOTHENBURG_2013_BANDS: [RateBand; 9] = [
    RateBand::new(6, 0, 8),
    RateBand::new(6, 30, 13),
    RateBand::new(7, 0, 18),
    RateBand::new(8, 0, 13),
    RateBand::new(8, 30, 8),
    RateBand::new(15, 0, 13),
    RateBand::new(15, 30, 18),
    RateBand::new(17, 0, 13),
    RateBand::new(18, 0, 8),
];

/// Immutable lookup over a set of rate bands
#[derive(Debug, Clone, Copy)]
pub struct RateTable {
    bands: &'static [RateBand],
}

impl RateTable {
    pub const fn new(bands: &'static [RateBand]) -> Self {
        Self { bands }
    }

    pub const fn gothenburg_2013() -> Self {
        Self::new(&GOTHENBURG_2013_BANDS)
    }

    /// Fee for a passage at `time`, ignoring toll-free dates.
    ///
    /// Picks the band of the same hour with the latest start not after
    /// `time.minute()`; 0 when no band matches.
    pub fn rate_at(&self, time: NaiveTime) -> u32 {
        let (hour, minute) = (time.hour(), time.minute());
        self.bands
            .iter()
            .filter(|band| band.hour == hour && band.minute <= minute)
            .max_by_key(|band| band.minute)
            .map(|band| band.fee)
            .unwrap_or(0)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::gothenburg_2013()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn morning_rush() {
        let t = RateTable::default();
        assert_eq!(t.rate_at(at(6, 0)), 8);
        assert_eq!(t.rate_at(at(6, 29)), 8);
        assert_eq!(t.rate_at(at(6, 30)), 13);
        assert_eq!(t.rate_at(at(6, 59)), 13);
        assert_eq!(t.rate_at(at(7, 0)), 18);
        assert_eq!(t.rate_at(at(7, 59)), 18);
    }

    #[test]
    fn half_past_eight_boundary() {
        let t = RateTable::default();
        assert_eq!(t.rate_at(at(8, 29)), 13);
        assert_eq!(t.rate_at(at(8, 30)), 8);
        assert_eq!(t.rate_at(at(8, 59)), 8);
    }

    #[test]
    fn midday_plateau_is_free() {
        let t = RateTable::default();
        assert_eq!(t.rate_at(at(9, 0)), 0);
        assert_eq!(t.rate_at(at(12, 15)), 0);
        assert_eq!(t.rate_at(at(14, 59)), 0);
    }

    #[test]
    fn afternoon_rush() {
        let t = RateTable::default();
        assert_eq!(t.rate_at(at(15, 0)), 13);
        assert_eq!(t.rate_at(at(15, 29)), 13);
        assert_eq!(t.rate_at(at(15, 30)), 18);
        assert_eq!(t.rate_at(at(16, 30)), 0);
        assert_eq!(t.rate_at(at(17, 0)), 13);
        assert_eq!(t.rate_at(at(18, 0)), 8);
        assert_eq!(t.rate_at(at(18, 45)), 8);
    }

    #[test]
    fn night_is_free() {
        let t = RateTable::default();
        assert_eq!(t.rate_at(at(0, 0)), 0);
        assert_eq!(t.rate_at(at(5, 59)), 0);
        assert_eq!(t.rate_at(at(19, 0)), 0);
        assert_eq!(t.rate_at(at(23, 59)), 0);
    }

    #[test]
    fn seconds_do_not_matter() {
        let t = RateTable::default();
        let time = NaiveTime::from_hms_opt(6, 29, 59).unwrap();
        assert_eq!(t.rate_at(time), 8);
    }

    #[test]
    fn empty_table_charges_nothing() {
        static NONE: [RateBand; 0] = [];
        assert_eq!(RateTable::new(&NONE).rate_at(at(7, 30)), 0);
    }
}
