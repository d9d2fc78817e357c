//! Catalog of assets the calculator offers

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Index,
    Stock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Asset {
    pub symbol: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: AssetKind,
}

pub const SUPPORTED_ASSETS: [Asset; 7] = [
    Asset {
        symbol: "SPY",
        name: "S&P 500 ETF",
        kind: AssetKind::Index,
    },
    Asset {
        symbol: "QQQ",
        name: "NASDAQ 100 ETF",
        kind: AssetKind::Index,
    },
    Asset {
        symbol: "AAPL",
        name: "Apple Inc.",
        kind: AssetKind::Stock,
    },
    Asset {
        symbol: "MSFT",
        name: "Microsoft Corporation",
        kind: AssetKind::Stock,
    },
    Asset {
        symbol: "GOOGL",
        name: "Alphabet Inc.",
        kind: AssetKind::Stock,
    },
    Asset {
        symbol: "AMZN",
        name: "Amazon.com Inc.",
        kind: AssetKind::Stock,
    },
    Asset {
        symbol: "NVDA",
        name: "NVIDIA Corporation",
        kind: AssetKind::Stock,
    },
];

pub const DEFAULT_ASSET: &str = "SPY";
pub const DEFAULT_MONTHLY_CONTRIBUTION: f64 = 100.0;
/// `YYYY-MM` of the default start month
pub const DEFAULT_START_MONTH: &str = "2020-01";
/// Earliest month the price store is expected to cover
pub const EARLIEST_SUPPORTED_MONTH: &str = "2000-01";

/// Case-insensitive lookup in [`SUPPORTED_ASSETS`]
pub fn find_asset(symbol: &str) -> Option<&'static Asset> {
    SUPPORTED_ASSETS
        .iter()
        .find(|a| a.symbol.eq_ignore_ascii_case(symbol.trim()))
}

/// An asset together with the first date the price store has for it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMetadata {
    #[serde(flatten)]
    pub asset: Asset,
    pub earliest_date: Option<Date>,
}
