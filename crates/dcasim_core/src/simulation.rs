use crate::date_math::months_inclusive;
use crate::error::{Result, SimulationError};
use crate::metrics::{SimulationDiagnostics, annualized_return, average_purchase_price};
use crate::model::{ChartDataPoint, DcaInput, DcaResult, DcaSummary, PricePoint, YearMonth};
use crate::resolver::{NearestPriceResolver, PriceResolver};
use crate::validation::validate_at;

/// Run a simulation, validating against the current calendar month.
pub fn simulate(input: &DcaInput, prices: &[PricePoint]) -> Result<DcaResult> {
    simulate_at(input, prices, YearMonth::current())
}

/// Run a simulation with an explicit "now" for validation.
pub fn simulate_at(input: &DcaInput, prices: &[PricePoint], current: YearMonth) -> Result<DcaResult> {
    simulate_with(input, prices, &NearestPriceResolver, current)
}

/// Fully explicit form: caller picks the resolver and the clock.
///
/// `prices` is the asset's series for the requested range. The lump sum is
/// bought at the series' first point and the holding is valued at its last
/// point, whatever months those fall in.
pub fn simulate_with<R: PriceResolver + ?Sized>(
    input: &DcaInput,
    prices: &[PricePoint],
    resolver: &R,
    current: YearMonth,
) -> Result<DcaResult> {
    validate_at(input, current)?;

    let (Some(first), Some(last)) = (prices.first(), prices.last()) else {
        return Err(SimulationError::NoData {
            asset: input.asset.clone(),
        });
    };

    let mut total_shares = 0.0;
    let mut total_cost = 0.0;

    if input.initial_investment > 0.0 {
        total_shares += input.initial_investment / first.price;
        total_cost += input.initial_investment;
    }

    let months = months_inclusive(input.start_month, input.end_month);
    let mut trajectory = Vec::with_capacity(months.len());
    let mut diagnostics = SimulationDiagnostics::new();

    for month in months {
        let Some(resolution) = resolver.resolve(prices, month) else {
            tracing::debug!(asset = %input.asset, %month, "no price available, skipping month");
            diagnostics.record_skipped(month);
            continue;
        };
        let price = resolution.price();

        total_cost += input.monthly_contribution;
        total_shares += input.monthly_contribution / price;
        diagnostics.record_resolved(resolution.tier);

        tracing::trace!(%month, price, tier = ?resolution.tier, total_shares, "monthly purchase");

        trajectory.push(ChartDataPoint {
            month,
            total_value: total_shares * price,
            total_investment: total_cost,
            price_used: price,
            shares_owned: total_shares,
        });
    }

    let latest_price = last.price;
    let final_value = total_shares * latest_price;
    let investment_period_months = diagnostics.months_enumerated;
    let investment_period_years = investment_period_months as f64 / 12.0;

    let summary = DcaSummary {
        investment_period_months,
        investment_period_years,
        average_purchase_price: average_purchase_price(total_cost, total_shares),
        final_share_price: latest_price,
        total_shares,
    };

    Ok(DcaResult {
        final_value,
        total_investment: total_cost,
        total_gain: final_value - total_cost,
        annualized_return: annualized_return(final_value, total_cost, investment_period_years),
        trajectory,
        summary,
        diagnostics,
    })
}
