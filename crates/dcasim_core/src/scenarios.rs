//! Named scenarios evaluated as a batch.
//!
//! Each scenario is an independent run with its own input and series, so the
//! batch fans out across threads when the `parallel` feature is on.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::model::{DcaInput, DcaResult, PricePoint, YearMonth};
use crate::simulation::simulate_at;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub input: DcaInput,
}

impl Scenario {
    pub fn new(id: impl Into<String>, input: DcaInput) -> Self {
        Self {
            id: id.into(),
            input,
        }
    }
}

/// Result of one scenario in a batch
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub id: String,
    pub result: Result<DcaResult, SimulationError>,
}

impl ScenarioOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

fn builtin(
    id: &str,
    asset: &str,
    initial: f64,
    monthly: f64,
    start: (i16, i8),
    end: (i16, i8),
) -> Scenario {
    let month = |(y, m): (i16, i8)| YearMonth::of(jiff::civil::date(y, m, 1));
    Scenario::new(id, DcaInput::new(asset, initial, monthly, month(start), month(end)))
}

/// The scenarios behind the published insight articles
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        // S&P 500 vs NASDAQ backtest
        builtin("spy-20y-from-2005", "SPY", 0.0, 500.0, (2005, 7), (2025, 6)),
        builtin("qqq-20y-from-2005", "QQQ", 0.0, 500.0, (2005, 7), (2025, 6)),
        // Power of starting early
        builtin("spy-30y-from-1994", "SPY", 100.0, 100.0, (1994, 1), (2023, 12)),
        builtin("spy-20y-from-2004", "SPY", 100.0, 100.0, (2004, 1), (2023, 12)),
        // DCA through market crashes
        builtin("spy-crashes-from-2007", "SPY", 0.0, 1000.0, (2007, 1), (2025, 6)),
        builtin("nvda-crashes-from-2007", "NVDA", 0.0, 1000.0, (2007, 1), (2025, 6)),
    ]
}

/// Evaluate every scenario against the series returned by `prices_for`.
///
/// Outcomes come back in input order. A failing scenario is reported in its
/// outcome and does not stop the others.
pub fn run_scenarios<F>(
    scenarios: &[Scenario],
    prices_for: F,
    current: YearMonth,
) -> Vec<ScenarioOutcome>
where
    F: Fn(&Scenario) -> Vec<PricePoint> + Sync,
{
    let run = |scenario: &Scenario| {
        let prices = prices_for(scenario);
        let result = simulate_at(&scenario.input, &prices, current);
        match &result {
            Ok(r) => {
                tracing::debug!(id = %scenario.id, final_value = r.final_value, "scenario complete")
            }
            Err(e) => tracing::warn!(id = %scenario.id, error = %e, "scenario failed"),
        }
        ScenarioOutcome {
            id: scenario.id.clone(),
            result,
        }
    };

    #[cfg(feature = "parallel")]
    let outcomes = scenarios.par_iter().map(run).collect();

    #[cfg(not(feature = "parallel"))]
    let outcomes = scenarios.iter().map(run).collect();

    outcomes
}
