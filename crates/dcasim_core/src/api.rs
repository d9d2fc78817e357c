//! Response envelope used on the calculation boundary.
//!
//! The engine does not serve HTTP; these types pin down the JSON shapes and
//! status mapping a request layer reports, so front ends agree on them.

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::model::{DcaRequest, DcaResult, PricePoint, YearMonth};
use crate::simulation::simulate_at;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: Some(message.into()),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }
}

pub const STATUS_OK: u16 = 200;

/// Handle a calculation request end to end: parse, simulate, wrap.
///
/// `prices` is the asset's stored series for the requested range; the
/// storage lookup itself belongs to the caller.
pub fn calculate(
    request: &DcaRequest,
    prices: &[PricePoint],
    current: YearMonth,
) -> (u16, ApiResponse<DcaResult>) {
    let outcome = request
        .parse()
        .map_err(SimulationError::from)
        .and_then(|input| simulate_at(&input, prices, current));

    respond(outcome)
}

/// Map a run's outcome to a status code and envelope
pub fn respond(outcome: Result<DcaResult, SimulationError>) -> (u16, ApiResponse<DcaResult>) {
    match outcome {
        Ok(result) => (
            STATUS_OK,
            ApiResponse::ok(result, "DCA calculation completed successfully"),
        ),
        Err(e) => {
            tracing::debug!(error = %e, "calculation rejected");
            (e.status_code(), ApiResponse::failure(e.to_string()))
        }
    }
}
