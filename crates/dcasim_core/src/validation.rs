//! Input validation
//!
//! Runs before the price series is looked at. Checks are ordered so the first
//! failing rule is the one reported.

use crate::error::ValidationError;
use crate::model::{DcaInput, YearMonth};

/// Validate against the current calendar month.
pub fn validate(input: &DcaInput) -> Result<(), ValidationError> {
    validate_at(input, YearMonth::current())
}

/// Validate with an explicit "now", for deterministic callers and tests.
pub fn validate_at(input: &DcaInput, current: YearMonth) -> Result<(), ValidationError> {
    if input.asset.trim().is_empty() {
        return Err(ValidationError::MissingAsset);
    }

    // NaN fails both `>= 0.0` checks, so it is reported as negative
    if !(input.initial_investment >= 0.0 && input.initial_investment.is_finite()) {
        return Err(ValidationError::NegativeInitialInvestment);
    }
    if !(input.monthly_contribution >= 0.0 && input.monthly_contribution.is_finite()) {
        return Err(ValidationError::NegativeMonthlyContribution);
    }
    if input.initial_investment == 0.0 && input.monthly_contribution == 0.0 {
        return Err(ValidationError::NothingInvested);
    }

    let (start, end) = (input.start_month, input.end_month);
    if start >= end {
        return Err(ValidationError::StartNotBeforeEnd { start, end });
    }
    if end > current {
        return Err(ValidationError::EndInFuture { end, current });
    }
    if start.months_until(end) < 1 {
        return Err(ValidationError::PeriodTooShort);
    }

    Ok(())
}
