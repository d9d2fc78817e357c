use thiserror::Error;

use crate::model::YearMonth;

/// Errors produced while parsing or constructing calendar values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("invalid year-month {0:?}, expected YYYY-MM")]
    Malformed(String),
    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(i8),
    #[error("year {0} is outside the supported calendar range")]
    YearOutOfRange(i16),
}

/// Errors produced while constructing price observations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceError {
    #[error("price {price} on {date} must be a positive finite number")]
    NonPositive { date: jiff::civil::Date, price: f64 },
    #[error("invalid price date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Input rejected before any computation takes place.
///
/// Messages match the text shown to users by the request layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Asset symbol is required")]
    MissingAsset,
    #[error("Missing required fields: {0}")]
    MissingField(&'static str),
    #[error("Initial investment cannot be negative")]
    NegativeInitialInvestment,
    #[error("Monthly contribution cannot be negative")]
    NegativeMonthlyContribution,
    #[error("Either initial investment or monthly contribution must be greater than 0")]
    NothingInvested,
    #[error("Invalid date format. Use YYYY-MM format")]
    InvalidDate(#[source] DateError),
    #[error("Start date must be before end date")]
    StartNotBeforeEnd { start: YearMonth, end: YearMonth },
    #[error("End date cannot be in the future")]
    EndInFuture { end: YearMonth, current: YearMonth },
    #[error("Investment period must be at least 1 month")]
    PeriodTooShort,
}

impl From<DateError> for ValidationError {
    fn from(err: DateError) -> Self {
        ValidationError::InvalidDate(err)
    }
}

/// Failure of a single simulation run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("No price data available for {asset} in the specified date range")]
    NoData { asset: String },
}

impl SimulationError {
    /// HTTP status the request layer reports for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            SimulationError::Validation(_) => 400,
            SimulationError::NoData { .. } => 404,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, SimulationError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
