//! Simulation results
//!
//! Contains the output types of a run: the month-by-month trajectory and the
//! aggregate summary. Field names on the wire follow the request boundary
//! (`camelCase`).

use serde::{Deserialize, Serialize};

use super::YearMonth;
use crate::metrics::SimulationDiagnostics;

/// Portfolio state after one month's purchase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataPoint {
    pub month: YearMonth,
    /// Cumulative shares valued at this month's price
    pub total_value: f64,
    /// Cumulative cash put in, lump sum included
    pub total_investment: f64,
    pub price_used: f64,
    /// Cumulative shares held
    pub shares_owned: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DcaSummary {
    /// Enumerated months, gap months included
    pub investment_period_months: usize,
    pub investment_period_years: f64,
    /// `None` when no shares were bought
    pub average_purchase_price: Option<f64>,
    pub final_share_price: f64,
    pub total_shares: f64,
}

/// Complete result of a single run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DcaResult {
    pub final_value: f64,
    pub total_investment: f64,
    pub total_gain: f64,
    /// CAGR in percent
    pub annualized_return: f64,
    pub trajectory: Vec<ChartDataPoint>,
    pub summary: DcaSummary,
    pub diagnostics: SimulationDiagnostics,
}

impl DcaResult {
    pub fn last_point(&self) -> Option<&ChartDataPoint> {
        self.trajectory.last()
    }

    pub fn point_for(&self, month: YearMonth) -> Option<&ChartDataPoint> {
        self.trajectory.iter().find(|p| p.month == month)
    }

    /// No shares held at the end of the run
    pub fn is_degenerate(&self) -> bool {
        self.summary.total_shares <= 0.0
    }
}
