//! Local price store
//!
//! Directory structure:
//! ~/.dcasim/
//!   dcasim.log
//!   prices/
//!     SPY.json           # [{"date": "YYYY-MM-DD", "adjustedClose": 123.4}, ...]
//!     QQQ.yaml           # same records as YAML
//!
//! The store plays the part of the storage collaborator: it hands the engine
//! an ascending, de-duplicated series for one asset and month range.

use std::fs;
use std::path::{Path, PathBuf};

use dcasim_core::assets::{Asset, AssetMetadata};
use dcasim_core::model::{PricePoint, YearMonth, earliest_date, within};

/// Error types for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("no price file for {0}")]
    NotFound(String),
}

/// Manages the data directory holding per-asset price files
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    /// Create a new DataDirectory instance
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.dcasim/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".dcasim")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the path to the prices directory
    pub fn prices_dir(&self) -> PathBuf {
        self.root.join("prices")
    }

    /// Existing price file for `symbol`, JSON preferred over YAML
    fn price_path(&self, symbol: &str) -> Option<PathBuf> {
        let stem = sanitize_symbol(symbol);
        ["json", "yaml", "yml"]
            .iter()
            .map(|ext| self.prices_dir().join(format!("{stem}.{ext}")))
            .find(|p| p.exists())
    }

    /// Initialize the data directory structure
    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(self.prices_dir())
            .map_err(|e| StorageError::Io(format!("Failed to create prices directory: {}", e)))
    }

    /// Load the full stored series for `symbol`, sorted ascending with
    /// duplicate dates collapsed to the last record.
    pub fn load_prices(&self, symbol: &str) -> Result<Vec<PricePoint>, StorageError> {
        let path = self
            .price_path(symbol)
            .ok_or_else(|| StorageError::NotFound(symbol.to_string()))?;
        let series = load_price_file(&path)?;
        tracing::debug!(symbol, points = series.len(), path = %path.display(), "Loaded prices");
        Ok(series)
    }

    /// Stored series for `symbol` restricted to whole months `[start, end]`.
    ///
    /// A missing file yields an empty series, which the engine reports as
    /// no data.
    pub fn prices_between(
        &self,
        symbol: &str,
        start: YearMonth,
        end: YearMonth,
    ) -> Result<Vec<PricePoint>, StorageError> {
        match self.load_prices(symbol) {
            Ok(series) => Ok(within(&series, start, end)),
            Err(StorageError::NotFound(_)) => {
                tracing::warn!(symbol, "No price file found");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Write a series for `symbol` as JSON
    pub fn save_prices(&self, symbol: &str, prices: &[PricePoint]) -> Result<(), StorageError> {
        self.init()?;
        let json = serde_json::to_string_pretty(prices)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize prices: {}", e)))?;
        let path = self
            .prices_dir()
            .join(format!("{}.json", sanitize_symbol(symbol)));
        crate::util::io::atomic_write(&path, &json)
            .map_err(|e| StorageError::Io(format!("Failed to write prices: {}", e)))
    }

    /// Catalog entry plus first stored date for each asset
    pub fn assets_metadata(&self, assets: &[Asset]) -> Vec<AssetMetadata> {
        assets
            .iter()
            .map(|asset| {
                let earliest = match self.load_prices(asset.symbol) {
                    Ok(series) => earliest_date(&series),
                    Err(StorageError::NotFound(_)) => None,
                    Err(e) => {
                        tracing::warn!(symbol = asset.symbol, error = %e, "Failed to read prices");
                        None
                    }
                };
                AssetMetadata {
                    asset: *asset,
                    earliest_date: earliest,
                }
            })
            .collect()
    }
}

/// Read a JSON or YAML price file (by extension) into an ascending series
pub fn load_price_file(path: &Path) -> Result<Vec<PricePoint>, StorageError> {
    let content = fs::read_to_string(path)
        .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    let is_yaml = path
        .extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml");
    let mut series: Vec<PricePoint> = if is_yaml {
        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse YAML: {}", e)))?
    } else {
        serde_json::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse JSON: {}", e)))?
    };

    normalize(&mut series);
    Ok(series)
}

/// Sort ascending and keep the last record for any repeated date
fn normalize(series: &mut Vec<PricePoint>) {
    // Stable sort keeps file order among equal dates
    series.sort_by_key(|p| p.date);
    let mut deduped: Vec<PricePoint> = Vec::with_capacity(series.len());
    for point in series.drain(..) {
        match deduped.last_mut() {
            Some(last) if last.date == point.date => *last = point,
            _ => deduped.push(point),
        }
    }
    *series = deduped;
}

/// Sanitize a ticker for use as a filename
fn sanitize_symbol(symbol: &str) -> String {
    symbol
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}
