//! Simulation input parameters

use serde::{Deserialize, Serialize};

use super::YearMonth;
use crate::error::ValidationError;

/// Parameters of one dollar-cost-averaging run.
///
/// Construction does not validate; see [`crate::validation::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DcaInput {
    pub asset: String,
    /// Lump sum bought at the first available price
    pub initial_investment: f64,
    pub monthly_contribution: f64,
    #[serde(rename = "startDate")]
    pub start_month: YearMonth,
    #[serde(rename = "endDate")]
    pub end_month: YearMonth,
}

impl DcaInput {
    pub fn new(
        asset: impl Into<String>,
        initial_investment: f64,
        monthly_contribution: f64,
        start_month: YearMonth,
        end_month: YearMonth,
    ) -> Self {
        Self {
            asset: asset.into(),
            initial_investment,
            monthly_contribution,
            start_month,
            end_month,
        }
    }

    /// Number of calendar months the run enumerates, both ends inclusive
    pub fn month_count(&self) -> usize {
        (self.start_month.months_until(self.end_month) + 1).max(0) as usize
    }
}

/// Raw request body as received on the calculation boundary.
///
/// Dates are still strings and any field may be absent; [`DcaRequest::parse`]
/// turns it into a [`DcaInput`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DcaRequest {
    #[serde(default)]
    pub asset: Option<String>,
    #[serde(default)]
    pub initial_investment: Option<f64>,
    #[serde(default)]
    pub monthly_contribution: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl DcaRequest {
    /// Check required fields and parse the month strings.
    ///
    /// Missing amounts count as zero. Amount and range invariants are left
    /// to [`crate::validation::validate`].
    pub fn parse(&self) -> Result<DcaInput, ValidationError> {
        let asset = self.asset.as_deref().unwrap_or_default();
        let (Some(start), Some(end)) = (self.start_date.as_deref(), self.end_date.as_deref())
        else {
            return Err(ValidationError::MissingField("asset, startDate, endDate"));
        };
        if asset.is_empty() {
            return Err(ValidationError::MissingField("asset, startDate, endDate"));
        }

        Ok(DcaInput {
            asset: asset.to_string(),
            initial_investment: self.initial_investment.unwrap_or(0.0),
            monthly_contribution: self.monthly_contribution.unwrap_or(0.0),
            start_month: start.parse()?,
            end_month: end.parse()?,
        })
    }
}

impl From<&DcaInput> for DcaRequest {
    fn from(input: &DcaInput) -> Self {
        Self {
            asset: Some(input.asset.clone()),
            initial_investment: Some(input.initial_investment),
            monthly_contribution: Some(input.monthly_contribution),
            start_date: Some(input.start_month.to_string()),
            end_date: Some(input.end_month.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DateError;

    #[test]
    fn test_input_wire_names() {
        let json = r#"{
            "asset": "SPY",
            "initialInvestment": 100,
            "monthlyContribution": 500,
            "startDate": "2005-07",
            "endDate": "2025-06"
        }"#;
        let input: DcaInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.asset, "SPY");
        assert_eq!(input.initial_investment, 100.0);
        assert_eq!(input.monthly_contribution, 500.0);
        assert_eq!(input.start_month.to_string(), "2005-07");
        assert_eq!(input.month_count(), 240);

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["startDate"], "2005-07");
        assert_eq!(value["monthlyContribution"], 500.0);
    }

    #[test]
    fn test_request_missing_fields() {
        let request = DcaRequest {
            asset: Some("SPY".to_string()),
            start_date: Some("2020-01".to_string()),
            ..Default::default()
        };
        assert_eq!(
            request.parse(),
            Err(ValidationError::MissingField("asset, startDate, endDate"))
        );

        let request = DcaRequest {
            asset: Some(String::new()),
            start_date: Some("2020-01".to_string()),
            end_date: Some("2020-03".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            request.parse(),
            Err(ValidationError::MissingField(_))
        ));
    }

    #[test]
    fn test_request_bad_date() {
        let request = DcaRequest {
            asset: Some("SPY".to_string()),
            start_date: Some("2020-1".to_string()),
            end_date: Some("2020-03".to_string()),
            ..Default::default()
        };
        assert_eq!(
            request.parse(),
            Err(ValidationError::InvalidDate(DateError::Malformed(
                "2020-1".to_string()
            )))
        );
    }

    #[test]
    fn test_request_defaults_amounts_to_zero() {
        let request: DcaRequest =
            serde_json::from_str(r#"{"asset":"QQQ","startDate":"2020-01","endDate":"2020-06"}"#)
                .unwrap();
        let input = request.parse().unwrap();
        assert_eq!(input.initial_investment, 0.0);
        assert_eq!(input.monthly_contribution, 0.0);
        assert_eq!(DcaRequest::from(&input).start_date.as_deref(), Some("2020-01"));
    }
}
