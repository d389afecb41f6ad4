//! Calendar of days on which no congestion tax is charged

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Month (1-based) in which every day is toll-free
pub const TOLL_FREE_MONTH: u32 = 7;

/// Public holidays as `(year, month, day)`
pub const PUBLIC_HOLIDAYS_2013: [(i32, u32, u32); 14] = [
    (2013, 1, 1),
    (2013, 3, 28),
    (2013, 3, 29),
    (2013, 4, 1),
    (2013, 5, 1),
    (2013, 5, 8),
    (2013, 6, 5),
    (2013, 6, 6),
    (2013, 6, 21),
    (2013, 11, 1),
    (2013, 12, 24),
    (2013, 12, 25),
    (2013, 12, 26),
    (2013, 12, 31),
];

const WEEKEND: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

/// Why a given date is toll-free
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TollFreeReason {
    Weekend,
    July,
    PublicHoliday,
    /// The next day is a public holiday
    DayBeforeHoliday,
}

impl std::fmt::Display for TollFreeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weekend => write!(f, "weekend"),
            Self::July => write!(f, "July"),
            Self::PublicHoliday => write!(f, "public holiday"),
            Self::DayBeforeHoliday => write!(f, "day before a public holiday"),
        }
    }
}

/// Read-only toll-free date rules
#[derive(Debug, Clone, Copy)]
pub struct TollFreeCalendar {
    weekend: &'static [Weekday],
    holidays: &'static [(i32, u32, u32)],
    free_month: u32,
}

impl TollFreeCalendar {
    pub const fn gothenburg_2013() -> Self {
        Self {
            weekend: &WEEKEND,
            holidays: &PUBLIC_HOLIDAYS_2013,
            free_month: TOLL_FREE_MONTH,
        }
    }

    /// Whether `date` is a listed public holiday
    pub fn is_public_holiday(&self, date: NaiveDate) -> bool {
        let key = (date.year(), date.month(), date.day());
        self.holidays.contains(&key)
    }

    pub fn is_toll_free(&self, date: NaiveDate) -> bool {
        self.toll_free_reason(date).is_some()
    }

    /// First rule that makes `date` toll-free, checked in the order
    /// weekend, July, holiday, holiday eve.
    pub fn toll_free_reason(&self, date: NaiveDate) -> Option<TollFreeReason> {
        if self.weekend.contains(&date.weekday()) {
            return Some(TollFreeReason::Weekend);
        }
        if date.month() == self.free_month {
            return Some(TollFreeReason::July);
        }
        if self.is_public_holiday(date) {
            return Some(TollFreeReason::PublicHoliday);
        }
        match date.succ_opt() {
            Some(next) if self.is_public_holiday(next) => Some(TollFreeReason::DayBeforeHoliday),
            _ => None,
        }
    }
}

impl Default for TollFreeCalendar {
    fn default() -> Self {
        Self::gothenburg_2013()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekends_are_free() {
        let cal = TollFreeCalendar::default();
        // 2013-02-09 is a Saturday
        assert_eq!(cal.toll_free_reason(date(2013, 2, 9)), Some(TollFreeReason::Weekend));
        assert_eq!(cal.toll_free_reason(date(2013, 2, 10)), Some(TollFreeReason::Weekend));
    }

    #[test]
    fn ordinary_weekday_is_taxed() {
        let cal = TollFreeCalendar::default();
        assert!(!cal.is_toll_free(date(2013, 2, 7)));
        assert!(!cal.is_toll_free(date(2013, 2, 8)));
    }

    #[test]
    fn all_of_july_is_free() {
        let cal = TollFreeCalendar::default();
        for day in 1..=31 {
            assert!(cal.is_toll_free(date(2013, 7, day)), "2013-07-{day:02}");
        }
        // 2014-07-01 is a Tuesday with no holiday nearby
        assert_eq!(cal.toll_free_reason(date(2014, 7, 1)), Some(TollFreeReason::July));
    }

    #[test]
    fn holidays_are_free() {
        let cal = TollFreeCalendar::default();
        for &(y, m, d) in PUBLIC_HOLIDAYS_2013.iter() {
            assert!(cal.is_toll_free(date(y, m, d)), "{y}-{m:02}-{d:02}");
        }
        assert_eq!(
            cal.toll_free_reason(date(2013, 5, 1)),
            Some(TollFreeReason::PublicHoliday)
        );
    }

    #[test]
    fn day_before_holiday_is_free() {
        let cal = TollFreeCalendar::default();
        // Monday before Christmas Eve
        assert_eq!(
            cal.toll_free_reason(date(2013, 12, 23)),
            Some(TollFreeReason::DayBeforeHoliday)
        );
        // Tuesday before Ascension-week Wednesday 2013-05-08
        assert_eq!(
            cal.toll_free_reason(date(2013, 5, 7)),
            Some(TollFreeReason::DayBeforeHoliday)
        );
    }

    #[test]
    fn day_after_holiday_is_taxed() {
        let cal = TollFreeCalendar::default();
        // Thursday after 2013-05-08
        assert!(!cal.is_toll_free(date(2013, 5, 9)));
        // Tuesday after Easter Monday
        assert!(!cal.is_toll_free(date(2013, 4, 2)));
    }

    #[test]
    fn new_years_eve_2012_precedes_listed_holiday() {
        let cal = TollFreeCalendar::default();
        assert_eq!(
            cal.toll_free_reason(date(2012, 12, 31)),
            Some(TollFreeReason::DayBeforeHoliday)
        );
    }

    #[test]
    fn holidays_only_listed_for_2013() {
        let cal = TollFreeCalendar::default();
        // 2014-05-01 is a Thursday
        assert!(!cal.is_toll_free(date(2014, 5, 1)));
    }
}
