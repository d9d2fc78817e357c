//! Plain-text rendering of simulation results

use std::fmt::Write;

use dcasim_core::api::ApiResponse;
use dcasim_core::assets::AssetMetadata;
use dcasim_core::chart::downsample;
use dcasim_core::model::{DcaInput, DcaResult};
use dcasim_core::scenarios::ScenarioOutcome;

use crate::util::format::{format_compact_currency, format_currency, format_percent, format_shares};

/// Headline numbers followed by the (thinned) trajectory table
pub fn render_result(input: &DcaInput, result: &DcaResult, max_points: usize) -> String {
    let mut out = String::new();
    let summary = &result.summary;

    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "{} from {} to {}: {} up front, {} per month",
        input.asset,
        input.start_month,
        input.end_month,
        format_currency(input.initial_investment),
        format_currency(input.monthly_contribution)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "  Final value:        {}", format_currency(result.final_value));
    let _ = writeln!(out, "  Total invested:     {}", format_currency(result.total_investment));
    let _ = writeln!(out, "  Total gain:         {}", format_currency(result.total_gain));
    let _ = writeln!(out, "  Annualized return:  {}", format_percent(result.annualized_return));
    let _ = writeln!(
        out,
        "  Period:             {} months ({:.1} years)",
        summary.investment_period_months, summary.investment_period_years
    );
    let average = summary
        .average_purchase_price
        .map(format_currency)
        .unwrap_or_else(|| "n/a".to_string());
    let _ = writeln!(out, "  Avg purchase price: {average}");
    let _ = writeln!(out, "  Final share price:  {}", format_currency(summary.final_share_price));
    let _ = writeln!(out, "  Shares owned:       {}", format_shares(summary.total_shares));

    let diagnostics = &result.diagnostics;
    if diagnostics.skipped_count() > 0 {
        let skipped: Vec<String> = diagnostics.skipped_months.iter().map(|m| m.to_string()).collect();
        let _ = writeln!(out, "  Skipped months:     {}", skipped.join(", "));
    }
    if diagnostics.fallback_count() > 0 {
        let _ = writeln!(
            out,
            "  Borrowed prices:    {} prior, {} future",
            diagnostics.prior_fallback, diagnostics.future_fallback
        );
    }

    if !result.trajectory.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "  {:<8} {:>12} {:>12} {:>12} {:>14}",
            "Month", "Price", "Invested", "Value", "Shares"
        );
        for point in downsample(&result.trajectory, max_points) {
            let _ = writeln!(
                out,
                "  {:<8} {:>12} {:>12} {:>12} {:>14}",
                point.month.to_string(),
                format_currency(point.price_used),
                format_compact_currency(point.total_investment),
                format_compact_currency(point.total_value),
                format_shares(point.shares_owned)
            );
        }
    }

    out
}

/// One line per scenario
pub fn render_outcomes(outcomes: &[ScenarioOutcome]) -> String {
    let mut out = String::new();
    for outcome in outcomes {
        let _ = match &outcome.result {
            Ok(r) => writeln!(
                out,
                "{:<28} final {:>16}  invested {:>14}  gain {:>16}  CAGR {:>8}  ({:.1} years)",
                outcome.id,
                format_currency(r.final_value),
                format_currency(r.total_investment),
                format_currency(r.total_gain),
                format_percent(r.annualized_return),
                r.summary.investment_period_years
            ),
            Err(e) => writeln!(out, "{:<28} failed: {e}", outcome.id),
        };
    }
    out
}

pub fn render_assets(assets: &[AssetMetadata]) -> String {
    let mut out = String::new();
    for meta in assets {
        let earliest = meta
            .earliest_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "no data".to_string());
        let _ = writeln!(
            out,
            "{:<6} {:<24} {:<6} {}",
            meta.asset.symbol,
            meta.asset.name,
            format!("{:?}", meta.asset.kind).to_lowercase(),
            earliest
        );
    }
    out
}

/// JSON envelope for a batch: one entry per scenario, keyed by id
pub fn outcomes_json(outcomes: &[ScenarioOutcome]) -> serde_json::Value {
    let entries = outcomes
        .iter()
        .map(|o| {
            let response = match &o.result {
                Ok(r) => ApiResponse::ok(r, "DCA calculation completed successfully"),
                Err(e) => ApiResponse::failure(e.to_string()),
            };
            (o.id.clone(), serde_json::to_value(response).unwrap_or_default())
        })
        .collect();
    serde_json::Value::Object(entries)
}
