//! Historical dollar-cost-averaging simulation library
//!
//! This crate replays a fixed monthly investment plan against a real,
//! split/dividend-adjusted price series and reports the resulting wealth
//! trajectory. It provides:
//! - A month value type and calendar helpers
//! - A three-stage monthly price resolver (in-month, prior, future)
//! - The simulator itself, a pure single pass over the requested months
//! - Derived metrics (CAGR, average cost) and per-run diagnostics
//! - Batch evaluation of named scenarios, parallel with the `parallel` feature
//!
//! ```ignore
//! use dcasim_core::{DcaInput, PricePoint, YearMonth, simulate};
//!
//! let input = DcaInput::new("SPY", 0.0, 100.0, "2020-01".parse()?, "2020-03".parse()?);
//! let prices = vec![
//!     PricePoint::parse("2020-01-31", 10.0)?,
//!     PricePoint::parse("2020-02-28", 20.0)?,
//!     PricePoint::parse("2020-03-31", 10.0)?,
//! ];
//! let result = simulate(&input, &prices)?;
//! assert_eq!(result.total_investment, 300.0);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod api;
pub mod assets;
pub mod chart;
pub mod date_math;
pub mod error;
pub mod metrics;
pub mod resolver;
pub mod scenarios;
pub mod simulation;
pub mod validation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{DateError, PriceError, SimulationError, ValidationError};
pub use model::{ChartDataPoint, DcaInput, DcaRequest, DcaResult, DcaSummary, PricePoint, YearMonth};
pub use resolver::{NearestPriceResolver, PriceResolver, Resolution, ResolutionTier};
pub use simulation::{simulate, simulate_at, simulate_with};
