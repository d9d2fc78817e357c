//! Historical price observations
//!
//! A series is a slice of [`PricePoint`]s for one asset. Callers supply it in
//! ascending date order without duplicate dates; the resolver does not rely on
//! that ordering, but lump-sum purchase and final valuation use the first and
//! last elements as given.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::YearMonth;
use crate::error::PriceError;

/// One adjusted closing price.
///
/// Wire shape: `{ "date": "YYYY-MM-DD", "adjustedClose": number }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPricePoint")]
pub struct PricePoint {
    pub date: Date,
    #[serde(rename = "adjustedClose")]
    pub price: f64,
}

#[derive(Deserialize)]
struct RawPricePoint {
    date: Date,
    #[serde(rename = "adjustedClose")]
    price: f64,
}

impl TryFrom<RawPricePoint> for PricePoint {
    type Error = PriceError;

    fn try_from(raw: RawPricePoint) -> Result<Self, Self::Error> {
        PricePoint::new(raw.date, raw.price)
    }
}

impl PricePoint {
    pub fn new(date: Date, price: f64) -> Result<Self, PriceError> {
        if !price.is_finite() || price <= 0.0 {
            return Err(PriceError::NonPositive { date, price });
        }
        Ok(Self { date, price })
    }

    /// Parse a `YYYY-MM-DD` date string
    pub fn parse(date: &str, price: f64) -> Result<Self, PriceError> {
        let date: Date = date
            .parse()
            .map_err(|_| PriceError::InvalidDate(date.to_string()))?;
        Self::new(date, price)
    }

    pub fn month(&self) -> YearMonth {
        YearMonth::of(self.date)
    }
}

/// Points falling inside the inclusive calendar range `[start, end]`, in the
/// order given.
///
/// This is the range query the storage layer performs before handing a series
/// to the simulator: whole months, first day of `start` through the last day
/// of `end`.
pub fn within(prices: &[PricePoint], start: YearMonth, end: YearMonth) -> Vec<PricePoint> {
    let (from, to) = (start.first_day(), end.last_day());
    prices
        .iter()
        .filter(|p| p.date >= from && p.date <= to)
        .copied()
        .collect()
}

/// Earliest observation date, regardless of slice order
pub fn earliest_date(prices: &[PricePoint]) -> Option<Date> {
    prices.iter().map(|p| p.date).min()
}

/// Whether the series is strictly ascending by date (sorted, no duplicates)
pub fn is_strictly_ascending(prices: &[PricePoint]) -> bool {
    prices.windows(2).all(|w| w[0].date < w[1].date)
}
