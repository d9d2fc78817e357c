//! Integration tests for the DCA simulation engine
//!
//! Tests are organized by topic:
//! - `scenarios` - Worked examples with hand-computed results
//! - `properties` - Invariants that hold for any valid run
//! - `resolver` - Price resolution priority and tie-breaking
//! - `edge_cases` - Lump sum, final valuation and skipped-month policies
//! - `api` - Request parsing and the response envelope

mod properties;

use crate::model::{DcaInput, PricePoint, YearMonth};

/// "Now" used by every test so validation never depends on the wall clock
pub(crate) fn now() -> YearMonth {
    YearMonth::new(2025, 6).unwrap()
}

pub(crate) fn ym(s: &str) -> YearMonth {
    s.parse().unwrap()
}

pub(crate) fn price(date: &str, price: f64) -> PricePoint {
    PricePoint::parse(date, price).unwrap()
}

pub(crate) fn input(initial: f64, monthly: f64, start: &str, end: &str) -> DcaInput {
    DcaInput::new("X", initial, monthly, ym(start), ym(end))
}

/// Month-end prices for every month in `[start, end]`, following `f(i)`
pub(crate) fn monthly_series(start: &str, end: &str, f: impl Fn(usize) -> f64) -> Vec<PricePoint> {
    crate::date_math::months_inclusive(ym(start), ym(end))
        .enumerate()
        .map(|(i, m)| PricePoint::new(m.last_day(), f(i)).unwrap())
        .collect()
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
