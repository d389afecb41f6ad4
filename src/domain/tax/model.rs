//! Fee calculator and charge windows

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::domain::calendar::{TollFreeCalendar, TollFreeReason};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::tariff::{RateTable, CHARGE_WINDOW_MINUTES, DAILY_CAP};
use crate::domain::vehicle::{Vehicle, VehicleClass};

/// Fee attached to a single passage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassageCharge {
    pub at: NaiveDateTime,
    pub fee: u32,
    /// Set when the passage date is toll-free
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toll_free_reason: Option<TollFreeReason>,
}

/// Passages charged together as one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChargeWindow {
    /// First passage of the window; never moves once the window is open
    pub start: NaiveDateTime,
    pub passages: Vec<PassageCharge>,
    /// Highest fee among the window's passages
    pub fee: u32,
}

impl ChargeWindow {
    fn open(start: NaiveDateTime) -> Self {
        Self {
            start,
            passages: Vec::new(),
            fee: 0,
        }
    }

    fn covers(&self, at: NaiveDateTime) -> bool {
        at - self.start <= Duration::minutes(CHARGE_WINDOW_MINUTES)
    }

    fn push(&mut self, charge: PassageCharge) {
        self.fee = self.fee.max(charge.fee);
        self.passages.push(charge);
    }
}

/// Full account of how a day's tax was reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTaxBreakdown {
    pub vehicle_class: Option<VehicleClass>,
    /// Vehicle class never pays; no windows are computed
    pub exempt: bool,
    /// Date of the earliest passage, if any
    pub date: Option<NaiveDate>,
    pub windows: Vec<ChargeWindow>,
    /// Sum of window fees before the daily cap
    pub uncapped_total: u32,
    pub total: u32,
}

impl DailyTaxBreakdown {
    fn exempt(vehicle_class: Option<VehicleClass>, date: Option<NaiveDate>) -> Self {
        Self {
            vehicle_class,
            exempt: true,
            date,
            windows: Vec::new(),
            uncapped_total: 0,
            total: 0,
        }
    }

    /// Whether the daily cap reduced the amount owed
    pub fn is_capped(&self) -> bool {
        self.uncapped_total > self.total
    }

    pub fn passage_count(&self) -> usize {
        self.windows.iter().map(|w| w.passages.len()).sum()
    }
}

/// Computes the congestion tax owed by one vehicle for one day.
///
/// Holds only read-only reference data, so a single value can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct FeeCalculator {
    rates: RateTable,
    calendar: TollFreeCalendar,
}

impl FeeCalculator {
    pub const fn new(rates: RateTable, calendar: TollFreeCalendar) -> Self {
        Self { rates, calendar }
    }

    pub const fn gothenburg_2013() -> Self {
        Self::new(RateTable::gothenburg_2013(), TollFreeCalendar::gothenburg_2013())
    }

    /// Unclassified vehicles are taxed
    pub fn is_toll_free_vehicle(&self, vehicle_class: Option<VehicleClass>) -> bool {
        vehicle_class.is_some_and(VehicleClass::is_toll_free)
    }

    pub fn is_toll_free_date(&self, date: NaiveDate) -> bool {
        self.calendar.is_toll_free(date)
    }

    /// Fee for a single passage, before any window aggregation
    pub fn rate_for(&self, at: NaiveDateTime) -> u32 {
        self.charge(at).fee
    }

    fn charge(&self, at: NaiveDateTime) -> PassageCharge {
        let toll_free_reason = self.calendar.toll_free_reason(at.date());
        let fee = match toll_free_reason {
            Some(_) => 0,
            None => self.rates.rate_at(at.time()),
        };
        PassageCharge {
            at,
            fee,
            toll_free_reason,
        }
    }

    /// Total tax for one day's passages, capped at [`DAILY_CAP`].
    ///
    /// Exempt classes pay nothing even when `passages` is empty; any other
    /// class needs at least one passage. Passages are expected to share one
    /// calendar day but this is not checked here.
    pub fn compute_daily_tax(
        &self,
        vehicle_class: Option<VehicleClass>,
        passages: &[NaiveDateTime],
    ) -> DomainResult<u32> {
        self.daily_breakdown(vehicle_class, passages)
            .map(|breakdown| breakdown.total)
    }

    /// [`compute_daily_tax`](Self::compute_daily_tax) for anything that can report its class
    pub fn tax_for<V: Vehicle + ?Sized>(
        &self,
        vehicle: &V,
        passages: &[NaiveDateTime],
    ) -> DomainResult<u32> {
        self.compute_daily_tax(vehicle.vehicle_class(), passages)
    }

    /// Same computation as [`compute_daily_tax`](Self::compute_daily_tax),
    /// keeping every window and passage fee.
    pub fn daily_breakdown(
        &self,
        vehicle_class: Option<VehicleClass>,
        passages: &[NaiveDateTime],
    ) -> DomainResult<DailyTaxBreakdown> {
        let date = passages.iter().min().map(NaiveDateTime::date);
        if self.is_toll_free_vehicle(vehicle_class) {
            return Ok(DailyTaxBreakdown::exempt(vehicle_class, date));
        }

        let mut sorted = passages.to_vec();
        sorted.sort();
        let Some(&first) = sorted.first() else {
            return Err(DomainError::NoPassages);
        };

        let mut windows = Vec::new();
        let mut current = ChargeWindow::open(first);
        for at in sorted {
            if !current.covers(at) {
                windows.push(std::mem::replace(&mut current, ChargeWindow::open(at)));
            }
            current.push(self.charge(at));
        }
        windows.push(current);

        let uncapped_total: u32 = windows.iter().map(|w| w.fee).sum();
        Ok(DailyTaxBreakdown {
            vehicle_class,
            exempt: false,
            date,
            windows,
            uncapped_total,
            total: uncapped_total.min(DAILY_CAP),
        })
    }
}

impl Default for FeeCalculator {
    fn default() -> Self {
        Self::gothenburg_2013()
    }
}

// ── Tests ──────────────────────────────────────────────────────
