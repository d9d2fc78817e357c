//! Invariants that hold for any valid run
//!
//! Each property is checked over a handful of price shapes: rising, falling,
//! oscillating, and sparse series with gaps.

use super::{input, monthly_series, now, price};
use crate::model::{DcaInput, PricePoint};
use crate::simulation::simulate_at;

fn shapes() -> Vec<(&'static str, Vec<PricePoint>)> {
    let rising = monthly_series("2010-01", "2019-12", |i| 50.0 + i as f64);
    let falling = monthly_series("2010-01", "2019-12", |i| 200.0 - i as f64);
    let oscillating =
        monthly_series("2010-01", "2019-12", |i| 100.0 + 40.0 * (i as f64 / 6.0).sin());
    // Every third month missing
    let sparse: Vec<PricePoint> = oscillating
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 3 != 1)
        .map(|(_, p)| *p)
        .collect();
    vec![
        ("rising", rising),
        ("falling", falling),
        ("oscillating", oscillating),
        ("sparse", sparse),
    ]
}

fn plans() -> Vec<DcaInput> {
    vec![
        input(0.0, 100.0, "2010-01", "2019-12"),
        input(5000.0, 250.0, "2012-06", "2018-03"),
        input(0.0, 1.5, "2010-01", "2010-02"),
    ]
}

#[test]
fn test_shares_non_decreasing() {
    for (name, prices) in shapes() {
        for plan in plans() {
            let result = simulate_at(&plan, &prices, now()).unwrap();
            for pair in result.trajectory.windows(2) {
                assert!(
                    pair[1].shares_owned >= pair[0].shares_owned,
                    "{name}: shares fell from {} to {} in {}",
                    pair[0].shares_owned,
                    pair[1].shares_owned,
                    pair[1].month
                );
            }
        }
    }
}

#[test]
fn test_cost_accounting() {
    for (name, prices) in shapes() {
        for plan in plans() {
            let result = simulate_at(&plan, &prices, now()).unwrap();
            let contributed = result.diagnostics.months_contributed as f64;
            let expected = plan.initial_investment + plan.monthly_contribution * contributed;

            let last = result.last_point().unwrap();
            assert!(
                (last.total_investment - expected).abs() < 1e-6,
                "{name}: expected {expected}, got {}",
                last.total_investment
            );
            assert_eq!(result.total_investment, last.total_investment);
            assert_eq!(result.trajectory.len(), result.diagnostics.months_contributed);
        }
    }
}

#[test]
fn test_trajectory_chronological_and_within_range() {
    for (_, prices) in shapes() {
        for plan in plans() {
            let result = simulate_at(&plan, &prices, now()).unwrap();
            assert!(result.trajectory.windows(2).all(|w| w[0].month < w[1].month));
            assert!(result.trajectory.iter().all(|p| {
                p.month >= plan.start_month && p.month <= plan.end_month
            }));
            assert_eq!(result.summary.investment_period_months, plan.month_count());
        }
    }
}

#[test]
fn test_cagr_sign_follows_gain() {
    for (name, prices) in shapes() {
        for plan in plans() {
            let result = simulate_at(&plan, &prices, now()).unwrap();
            if result.total_gain > 1e-6 {
                assert!(result.annualized_return > 0.0, "{name}: gain without positive CAGR");
            } else if result.total_gain < -1e-6 {
                assert!(result.annualized_return < 0.0, "{name}: loss without negative CAGR");
            }
        }
    }
}

#[test]
fn test_cagr_zero_when_value_equals_cost() {
    let prices = monthly_series("2015-01", "2016-12", |_| 42.0);
    let result = simulate_at(&input(300.0, 75.0, "2015-01", "2016-12"), &prices, now()).unwrap();
    assert!((result.final_value - result.total_investment).abs() < 1e-9);
    assert!(result.annualized_return.abs() < 1e-9);
}

#[test]
fn test_idempotent() {
    for (_, prices) in shapes() {
        for plan in plans() {
            let first = simulate_at(&plan, &prices, now()).unwrap();
            let second = simulate_at(&plan, &prices, now()).unwrap();
            assert_eq!(first, second);
            assert_eq!(first.final_value.to_bits(), second.final_value.to_bits());
            assert_eq!(
                first.annualized_return.to_bits(),
                second.annualized_return.to_bits()
            );
        }
    }
}

#[test]
fn test_final_value_uses_last_series_price() {
    let prices = [
        price("2020-01-31", 10.0),
        price("2020-02-28", 10.0),
        price("2020-03-31", 10.0),
    ];
    let result = simulate_at(&input(0.0, 100.0, "2020-01", "2020-03"), &prices, now()).unwrap();
    assert_eq!(
        result.final_value,
        result.summary.total_shares * result.summary.final_share_price
    );
    assert_eq!(result.total_gain, result.final_value - result.total_investment);
}
