//! Tax service wrapping the fee calculator with input checks and logging

use log::{debug, info, warn};

use crate::config::CalculatorConfig;
use crate::domain::{
    DailyTaxBreakdown, DomainError, DomainResult, FeeCalculator, VehicleClass,
};
use chrono::NaiveDateTime;

/// Service for daily tax calculations
#[derive(Debug, Clone)]
pub struct TaxService {
    calculator: FeeCalculator,
    /// Reject passages that fall on more than one calendar day
    strict_single_day: bool,
}

impl TaxService {
    pub fn new(calculator: FeeCalculator, strict_single_day: bool) -> Self {
        Self {
            calculator,
            strict_single_day,
        }
    }

    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(FeeCalculator::default(), config.strict_single_day)
    }

    /// Calculate the tax owed for one day of passages
    pub fn daily_tax(
        &self,
        vehicle_class: Option<VehicleClass>,
        passages: &[NaiveDateTime],
    ) -> DomainResult<u32> {
        self.daily_breakdown(vehicle_class, passages)
            .map(|breakdown| breakdown.total)
    }

    /// Calculate the tax with its per-window breakdown
    pub fn daily_breakdown(
        &self,
        vehicle_class: Option<VehicleClass>,
        passages: &[NaiveDateTime],
    ) -> DomainResult<DailyTaxBreakdown> {
        let label = vehicle_class
            .map(|c| c.to_string())
            .unwrap_or_else(|| "unclassified".to_string());

        if self.strict_single_day && !self.calculator.is_toll_free_vehicle(vehicle_class) {
            if let Err(e) = check_single_day(passages) {
                warn!("Rejected {} passages for {}: {}", passages.len(), label, e);
                return Err(e);
            }
        }

        let breakdown = self
            .calculator
            .daily_breakdown(vehicle_class, passages)
            .map_err(|e| {
                warn!("Rejected passages for {}: {}", label, e);
                e
            })?;

        if breakdown.exempt {
            debug!("{} is exempt from congestion tax", label);
            return Ok(breakdown);
        }

        for window in &breakdown.windows {
            debug!(
                "Window from {} with {} passage(s) charged {}",
                window.start,
                window.passages.len(),
                window.fee
            );
        }

        let date = breakdown
            .date
            .map(|d| d.to_string())
            .unwrap_or_default();
        if breakdown.is_capped() {
            info!(
                "Congestion tax for {} on {}: {} (capped from {})",
                label, date, breakdown.total, breakdown.uncapped_total
            );
        } else {
            info!(
                "Congestion tax for {} on {}: {} ({} passages, {} windows)",
                label,
                date,
                breakdown.total,
                breakdown.passage_count(),
                breakdown.windows.len()
            );
        }

        Ok(breakdown)
    }
}

impl Default for TaxService {
    fn default() -> Self {
        Self::from_config(&CalculatorConfig::default())
    }
}

/// Ensure every passage shares the calendar date of the earliest one
pub fn check_single_day(passages: &[NaiveDateTime]) -> DomainResult<()> {
    let first = passages.iter().min().map(NaiveDateTime::date);
    let last = passages.iter().max().map(NaiveDateTime::date);
    match (first, last) {
        (Some(first), Some(last)) if first != last => {
            Err(DomainError::SpansMultipleDays { first, last })
        }
        _ => Ok(()),
    }
}

// ── Tests ──────────────────────────────────────────────────────
