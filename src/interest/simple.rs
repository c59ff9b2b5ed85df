use rust_decimal::Decimal;

use crate::config::MAX_TENURE_MONTHS;
use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};

use super::LoanTerms;

const MONTHS_PER_YEAR: u32 = 12;

/// simple-interest calculator: flat interest on the original principal,
/// repaid in equal monthly installments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleInterestCalculator {
    max_tenure_months: u32,
}

impl Default for SimpleInterestCalculator {
    fn default() -> Self {
        Self::new(MAX_TENURE_MONTHS)
    }
}

impl SimpleInterestCalculator {
    pub fn new(max_tenure_months: u32) -> Self {
        Self { max_tenure_months }
    }

    pub fn max_tenure_months(&self) -> u32 {
        self.max_tenure_months
    }

    /// check inputs without computing anything
    pub fn validate(&self, principal: Money, annual_rate: Rate, tenure_months: u32) -> Result<()> {
        if !principal.is_positive() {
            return Err(LedgerError::validation(
                "principal",
                format!("must be greater than 0, got {}", principal),
            ));
        }

        if annual_rate.is_negative() {
            return Err(LedgerError::validation(
                "annualRatePercent",
                format!("cannot be negative, got {}", annual_rate),
            ));
        }

        if tenure_months == 0 || tenure_months > self.max_tenure_months {
            return Err(LedgerError::validation(
                "tenureMonths",
                format!(
                    "must be between 1 and {} months, got {}",
                    self.max_tenure_months, tenure_months
                ),
            ));
        }

        Ok(())
    }

    /// derive interest, total payable and EMI.
    ///
    /// Intermediates stay unrounded; only the three persisted figures are
    /// rounded half-up to whole currency units. The total is formed from the
    /// rounded interest so `total == principal + interest` holds exactly.
    pub fn compute(&self, principal: Money, annual_rate: Rate, tenure_months: u32) -> Result<LoanTerms> {
        self.validate(principal, annual_rate, tenure_months)?;

        let p = principal.as_decimal();
        let months = Decimal::from(tenure_months);

        // p * rate * (months / 12), multiplied out before dividing
        let raw_interest = p
            .checked_mul(annual_rate.as_decimal())
            .and_then(|v| v.checked_mul(months))
            .and_then(|v| v.checked_div(Decimal::from(MONTHS_PER_YEAR)))
            .ok_or_else(|| LedgerError::validation("principal", "amount too large to compute interest on"))?;

        let raw_total = p
            .checked_add(raw_interest)
            .ok_or_else(|| LedgerError::validation("principal", "amount too large to compute total on"))?;
        let raw_emi = raw_total / months;

        let interest_amount = Money::from_decimal_units(raw_interest);
        let total_amount = principal + interest_amount;
        let emi_amount = Money::from_decimal_units(raw_emi);

        Ok(LoanTerms {
            principal,
            annual_rate,
            tenure_months,
            interest_amount,
            total_amount,
            emi_amount,
        })
    }
}
