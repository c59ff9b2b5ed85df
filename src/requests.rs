//! Wire shapes for the create-loan and apply-payment operations.
//!
//! Values arrive from an untrusted transport layer; `validate` turns them into
//! core types and rejects anything out of range with a field-named error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate, MONEY_SCALE};
use crate::errors::{LedgerError, Result};
use crate::types::LoanId;

/// body of `POST create-loan`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanRequest {
    pub principal: Decimal,
    #[serde(alias = "interestRate")]
    pub annual_rate_percent: Decimal,
    pub tenure_months: i64,
}

/// create-loan input after validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanApplication {
    pub principal: Money,
    pub annual_rate: Rate,
    pub tenure_months: u32,
}

impl CreateLoanRequest {
    pub fn validate(&self) -> Result<LoanApplication> {
        let principal = exact_money("principal", self.principal)?;
        if !principal.is_positive() {
            return Err(LedgerError::validation(
                "principal",
                format!("must be greater than 0, got {}", self.principal),
            ));
        }

        if self.annual_rate_percent < Decimal::ZERO {
            return Err(LedgerError::validation(
                "annualRatePercent",
                format!("cannot be negative, got {}", self.annual_rate_percent),
            ));
        }

        let tenure_months = u32::try_from(self.tenure_months)
            .ok()
            .filter(|months| *months > 0)
            .ok_or_else(|| {
                LedgerError::validation(
                    "tenureMonths",
                    format!("must be a positive number of months, got {}", self.tenure_months),
                )
            })?;

        Ok(LoanApplication {
            principal,
            annual_rate: Rate::from_percent(self.annual_rate_percent),
            tenure_months,
        })
    }
}

/// body of `POST apply-payment`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyPaymentRequest {
    /// loan the client believes it is paying; rejected if stale
    #[serde(default)]
    pub loan_id: Option<LoanId>,
    pub amount: Decimal,
}

impl ApplyPaymentRequest {
    pub fn validate(&self) -> Result<Money> {
        let amount = exact_money("amount", self.amount)?;
        if !amount.is_positive() {
            return Err(LedgerError::validation(
                "amount",
                format!("must be greater than 0, got {}", self.amount),
            ));
        }
        Ok(amount)
    }
}

/// amounts finer than a minor unit are rejected, never rounded
fn exact_money(field: &'static str, value: Decimal) -> Result<Money> {
    if value.normalize().scale() > MONEY_SCALE {
        return Err(LedgerError::validation(
            field,
            format!("at most {} decimal places allowed, got {}", MONEY_SCALE, value),
        ));
    }
    Ok(Money::from_decimal(value))
}
