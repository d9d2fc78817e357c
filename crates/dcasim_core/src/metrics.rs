//! Derived performance metrics and per-run diagnostics

use serde::{Deserialize, Serialize};

use crate::model::YearMonth;
use crate::resolver::ResolutionTier;

/// Compound annual growth rate in percent.
///
/// Zero when nothing was invested or no time elapsed.
pub fn annualized_return(final_value: f64, total_cost: f64, years: f64) -> f64 {
    if total_cost <= 0.0 || years <= 0.0 {
        return 0.0;
    }
    ((final_value / total_cost).powf(1.0 / years) - 1.0) * 100.0
}

/// Cost per share, or `None` when no shares are held.
pub fn average_purchase_price(total_cost: f64, total_shares: f64) -> Option<f64> {
    (total_shares > 0.0).then(|| total_cost / total_shares)
}

/// What happened during the monthly loop.
///
/// Skipped months are months whose price could not be resolved; they carry
/// no contribution and no trajectory point but still count toward elapsed
/// time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationDiagnostics {
    pub months_enumerated: usize,
    pub months_contributed: usize,
    pub skipped_months: Vec<YearMonth>,
    pub in_month: usize,
    pub prior_fallback: usize,
    pub future_fallback: usize,
}

impl SimulationDiagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a month whose price resolved through `tier`
    pub fn record_resolved(&mut self, tier: ResolutionTier) {
        self.months_enumerated += 1;
        self.months_contributed += 1;
        match tier {
            ResolutionTier::InMonth => self.in_month += 1,
            ResolutionTier::Prior => self.prior_fallback += 1,
            ResolutionTier::Future => self.future_fallback += 1,
        }
    }

    /// Record a month with no usable price
    pub fn record_skipped(&mut self, month: YearMonth) {
        self.months_enumerated += 1;
        self.skipped_months.push(month);
    }

    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped_months.len()
    }

    /// Months priced from outside their own calendar month
    #[must_use]
    pub fn fallback_count(&self) -> usize {
        self.prior_fallback + self.future_fallback
    }
}
