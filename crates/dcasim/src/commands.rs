//! Subcommand implementations

use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use dcasim_core::api::{ApiResponse, respond};
use dcasim_core::assets::{SUPPORTED_ASSETS, find_asset};
use dcasim_core::model::{DcaInput, DcaResult, PricePoint, YearMonth, within};
use dcasim_core::scenarios::{Scenario, ScenarioOutcome, builtin_scenarios, run_scenarios};
use dcasim_core::simulation::simulate_at;
use std::collections::HashMap;

use crate::data::{DataDirectory, load_price_file, load_scenarios};
use crate::report;
use crate::util::io::atomic_write;

/// Output destination and format shared by the subcommands
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    pub json: bool,
    pub output: Option<PathBuf>,
}

impl OutputOptions {
    fn emit(&self, text: &str) -> color_eyre::Result<()> {
        match &self.output {
            Some(path) => atomic_write(path, text)
                .wrap_err_with(|| format!("failed to write {}", path.display())),
            None => {
                print!("{text}");
                Ok(())
            }
        }
    }
}

/// Price source for a single run: an explicit file, or the data directory
pub enum PriceSource<'a> {
    File(&'a Path),
    Store(&'a DataDirectory),
}

impl PriceSource<'_> {
    fn load(&self, input: &DcaInput) -> color_eyre::Result<Vec<PricePoint>> {
        match self {
            PriceSource::File(path) => {
                let series = load_price_file(path)
                    .wrap_err_with(|| format!("failed to load prices from {}", path.display()))?;
                Ok(within(&series, input.start_month, input.end_month))
            }
            PriceSource::Store(store) => Ok(store.prices_between(
                &input.asset,
                input.start_month,
                input.end_month,
            )?),
        }
    }
}

/// Run one simulation and print it.
///
/// Engine failures are reported in the chosen format and returned as an error
/// so the process exits non-zero.
pub fn simulate(
    input: &DcaInput,
    prices: PriceSource<'_>,
    current: YearMonth,
    max_points: usize,
    out: &OutputOptions,
) -> color_eyre::Result<DcaResult> {
    if find_asset(&input.asset).is_none() {
        tracing::warn!(asset = %input.asset, "asset is not in the supported catalog");
    }

    // Validate before touching price storage
    dcasim_core::validation::validate_at(input, current)?;

    let series = prices.load(input)?;
    tracing::info!(asset = %input.asset, points = series.len(), "running simulation");
    let outcome = simulate_at(input, &series, current);

    if out.json {
        let (status, response) = respond(outcome.clone());
        tracing::debug!(status, "calculation finished");
        out.emit(&format!("{}\n", serde_json::to_string_pretty(&response)?))?;
    } else if let Ok(result) = &outcome {
        out.emit(&report::render_result(input, result, max_points))?;
    }

    Ok(outcome?)
}

/// Run a scenario list (built-in unless `file` is given) against the store
pub fn scenarios(
    file: Option<&Path>,
    store: &DataDirectory,
    current: YearMonth,
    out: &OutputOptions,
) -> color_eyre::Result<Vec<ScenarioOutcome>> {
    let scenarios: Vec<Scenario> = match file {
        Some(path) => load_scenarios(path)
            .wrap_err_with(|| format!("failed to load scenarios from {}", path.display()))?,
        None => builtin_scenarios(),
    };

    // Load each asset once up front so the batch itself does no I/O
    let mut series_by_asset: HashMap<String, Vec<PricePoint>> = HashMap::new();
    for scenario in &scenarios {
        let asset = &scenario.input.asset;
        if series_by_asset.contains_key(asset) {
            continue;
        }
        let series = match store.load_prices(asset) {
            Ok(series) => series,
            Err(e) => {
                tracing::warn!(asset = %asset, error = %e, "no usable prices");
                Vec::new()
            }
        };
        series_by_asset.insert(asset.clone(), series);
    }

    tracing::info!(count = scenarios.len(), "running scenarios");
    let outcomes = run_scenarios(
        &scenarios,
        |s| {
            series_by_asset
                .get(&s.input.asset)
                .map(|series| within(series, s.input.start_month, s.input.end_month))
                .unwrap_or_default()
        },
        current,
    );

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed > 0 {
        tracing::warn!(failed, "some scenarios failed");
    }

    if out.json {
        out.emit(&format!(
            "{}\n",
            serde_json::to_string_pretty(&report::outcomes_json(&outcomes))?
        ))?;
    } else {
        out.emit(&report::render_outcomes(&outcomes))?;
    }

    Ok(outcomes)
}

/// List the supported assets with the first stored date for each
pub fn assets(store: &DataDirectory, out: &OutputOptions) -> color_eyre::Result<()> {
    let metadata = store.assets_metadata(&SUPPORTED_ASSETS);
    if out.json {
        let response = ApiResponse::ok(&metadata, "Assets metadata retrieved successfully");
        out.emit(&format!("{}\n", serde_json::to_string_pretty(&response)?))
    } else {
        out.emit(&report::render_assets(&metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ym(s: &str) -> YearMonth {
        s.parse().unwrap()
    }

    fn store_with_spy(dir: &TempDir) -> DataDirectory {
        let store = DataDirectory::new(dir.path().to_path_buf());
        let series = vec![
            PricePoint::parse("2020-01-31", 10.0).unwrap(),
            PricePoint::parse("2020-02-29", 20.0).unwrap(),
            PricePoint::parse("2020-03-31", 10.0).unwrap(),
        ];
        store.save_prices("SPY", &series).unwrap();
        store
    }

    #[test]
    fn test_simulate_from_store_writes_json() {
        let dir = TempDir::new().unwrap();
        let store = store_with_spy(&dir);
        let output = dir.path().join("result.json");
        let out = OutputOptions {
            json: true,
            output: Some(output.clone()),
        };
        let input = DcaInput::new("SPY", 0.0, 100.0, ym("2020-01"), ym("2020-03"));

        let result = simulate(&input, PriceSource::Store(&store), ym("2025-06"), 120, &out).unwrap();
        assert_eq!(result.final_value, 250.0);

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["success"], true);
        assert_eq!(written["data"]["totalGain"], -50.0);
    }

    #[test]
    fn test_simulate_missing_asset_is_no_data() {
        let dir = TempDir::new().unwrap();
        let store = store_with_spy(&dir);
        let out = OutputOptions {
            json: true,
            output: Some(dir.path().join("err.json")),
        };
        let input = DcaInput::new("QQQ", 0.0, 100.0, ym("2020-01"), ym("2020-03"));

        let err = simulate(&input, PriceSource::Store(&store), ym("2025-06"), 120, &out).unwrap_err();
        assert!(err.to_string().contains("No price data available for QQQ"));
    }

    #[test]
    fn test_scenarios_from_yaml_file() {
        let dir = TempDir::new().unwrap();
        let store = store_with_spy(&dir);
        let scenario_file = dir.path().join("scenarios.yaml");
        crate::data::save_scenarios(
            &scenario_file,
            &[
                Scenario::new(
                    "spy-q1",
                    DcaInput::new("SPY", 0.0, 100.0, ym("2020-01"), ym("2020-03")),
                ),
                Scenario::new(
                    "nvda-q1",
                    DcaInput::new("NVDA", 0.0, 100.0, ym("2020-01"), ym("2020-03")),
                ),
            ],
        )
        .unwrap();
        let out = OutputOptions {
            json: false,
            output: Some(dir.path().join("out.txt")),
        };

        let outcomes = scenarios(Some(&scenario_file), &store, ym("2025-06"), &out).unwrap();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].id, "spy-q1");
        assert_eq!(outcomes[0].result.as_ref().map(|r| r.final_value), Ok(250.0));
        assert!(!outcomes[1].is_ok());
    }
}
