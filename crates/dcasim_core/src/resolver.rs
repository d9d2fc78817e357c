//! Monthly price resolution.
//!
//! Picks the single observation used for a month's purchase from a sparse,
//! possibly irregular series. Resolution walks an ordered chain of stages and
//! the first stage with any candidate wins:
//!
//! 1. [`ResolutionTier::InMonth`] - latest point inside the month
//! 2. [`ResolutionTier::Prior`] - latest point before the month's first day
//! 3. [`ResolutionTier::Future`] - earliest point after the month's last day
//!
//! Every stage scans the whole slice, so the series need not be sorted.

use serde::{Deserialize, Serialize};

use crate::model::{PricePoint, YearMonth};

/// Which stage of the chain produced a price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResolutionTier {
    InMonth,
    Prior,
    Future,
}

/// A resolved price and the stage that found it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'a> {
    pub point: &'a PricePoint,
    pub tier: ResolutionTier,
}

impl Resolution<'_> {
    pub fn price(&self) -> f64 {
        self.point.price
    }
}

/// Strategy for choosing a month's purchase price.
///
/// The simulator is generic over this so tests and callers can substitute
/// their own lookup.
pub trait PriceResolver {
    fn resolve<'a>(&self, prices: &'a [PricePoint], month: YearMonth) -> Option<Resolution<'a>>;
}

#[derive(Debug, Clone, Copy)]
enum Pick {
    Latest,
    Earliest,
}

struct Stage {
    tier: ResolutionTier,
    accepts: fn(&PricePoint, YearMonth) -> bool,
    pick: Pick,
}

impl Stage {
    fn apply<'a>(&self, prices: &'a [PricePoint], month: YearMonth) -> Option<&'a PricePoint> {
        let candidates = prices.iter().filter(|p| (self.accepts)(p, month));
        // max_by_key keeps the last of equal maxima, min_by_key the first of equal minima
        match self.pick {
            Pick::Latest => candidates.max_by_key(|p| p.date),
            Pick::Earliest => candidates.min_by_key(|p| p.date),
        }
    }
}

fn is_in_month(p: &PricePoint, month: YearMonth) -> bool {
    month.contains(p.date)
}

fn is_before_month(p: &PricePoint, month: YearMonth) -> bool {
    p.date < month.first_day()
}

fn is_after_month(p: &PricePoint, month: YearMonth) -> bool {
    p.date > month.last_day()
}

const CHAIN: [Stage; 3] = [
    Stage {
        tier: ResolutionTier::InMonth,
        accepts: is_in_month,
        pick: Pick::Latest,
    },
    Stage {
        tier: ResolutionTier::Prior,
        accepts: is_before_month,
        pick: Pick::Latest,
    },
    Stage {
        tier: ResolutionTier::Future,
        accepts: is_after_month,
        pick: Pick::Earliest,
    },
];

/// In-month, then prior, then future.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestPriceResolver;

impl PriceResolver for NearestPriceResolver {
    fn resolve<'a>(&self, prices: &'a [PricePoint], month: YearMonth) -> Option<Resolution<'a>> {
        CHAIN.iter().find_map(|stage| {
            stage
                .apply(prices, month)
                .map(|point| Resolution { point, tier: stage.tier })
        })
    }
}

/// Resolve with [`NearestPriceResolver`], dropping the tier.
pub fn resolve(prices: &[PricePoint], month: YearMonth) -> Option<&PricePoint> {
    NearestPriceResolver
        .resolve(prices, month)
        .map(|resolution| resolution.point)
}

/// Latest point inside `month`
pub fn in_month(prices: &[PricePoint], month: YearMonth) -> Option<&PricePoint> {
    CHAIN[0].apply(prices, month)
}

/// Latest point strictly before the first day of `month`
pub fn prior(prices: &[PricePoint], month: YearMonth) -> Option<&PricePoint> {
    CHAIN[1].apply(prices, month)
}

/// Earliest point strictly after the last day of `month`
pub fn future(prices: &[PricePoint], month: YearMonth) -> Option<&PricePoint> {
    CHAIN[2].apply(prices, month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn p(y: i16, m: i8, d: i8, price: f64) -> PricePoint {
        PricePoint::new(date(y, m, d), price).unwrap()
    }

    fn ym(y: i16, m: i8) -> YearMonth {
        YearMonth::new(y, m).unwrap()
    }

    #[test]
    fn test_stages_independently() {
        let series = [p(2020, 1, 15, 1.0), p(2020, 2, 5, 2.0), p(2020, 3, 10, 3.0)];
        assert_eq!(in_month(&series, ym(2020, 2)), Some(&series[1]));
        assert_eq!(prior(&series, ym(2020, 2)), Some(&series[0]));
        assert_eq!(future(&series, ym(2020, 2)), Some(&series[2]));

        assert_eq!(in_month(&series, ym(2020, 4)), None);
        assert_eq!(prior(&series, ym(2020, 1)), None);
        assert_eq!(future(&series, ym(2020, 3)), None);
    }

    #[test]
    fn test_tier_reported() {
        let series = [p(2020, 1, 15, 1.0), p(2020, 3, 10, 3.0)];
        let r = NearestPriceResolver.resolve(&series, ym(2020, 1)).unwrap();
        assert_eq!(r.tier, ResolutionTier::InMonth);
        let r = NearestPriceResolver.resolve(&series, ym(2020, 2)).unwrap();
        assert_eq!(r.tier, ResolutionTier::Prior);
        assert_eq!(r.price(), 1.0);
        let r = NearestPriceResolver.resolve(&series, ym(2019, 12)).unwrap();
        assert_eq!(r.tier, ResolutionTier::Future);
        assert_eq!(r.price(), 1.0);
    }

    #[test]
    fn test_empty_series() {
        assert!(NearestPriceResolver.resolve(&[], ym(2020, 1)).is_none());
        assert!(resolve(&[], ym(2020, 1)).is_none());
    }

    #[test]
    fn test_last_day_of_month_is_in_month() {
        // Day 29-31 observations belong to their own month, not the future stage
        let series = [p(2020, 1, 31, 7.0)];
        let r = NearestPriceResolver.resolve(&series, ym(2020, 1)).unwrap();
        assert_eq!(r.tier, ResolutionTier::InMonth);
    }
}
