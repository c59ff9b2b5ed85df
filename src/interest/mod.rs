pub mod schedule;
pub mod simple;

use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::Result;

pub use schedule::{add_months, installment_due_date, Installment, InstallmentSchedule};
pub use simple::SimpleInterestCalculator;

/// fixed repayment terms derived at loan creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanTerms {
    pub principal: Money,
    pub annual_rate: Rate,
    pub tenure_months: u32,
    pub interest_amount: Money,
    pub total_amount: Money,
    pub emi_amount: Money,
}

impl LoanTerms {
    /// gap between the sum of all EMIs and the total payable
    pub fn rounding_gap(&self) -> Money {
        (self.emi_amount * rust_decimal::Decimal::from(self.tenure_months) - self.total_amount).abs()
    }
}

/// compute terms with the default tenure ceiling
pub fn compute(principal: Money, annual_rate: Rate, tenure_months: u32) -> Result<LoanTerms> {
    SimpleInterestCalculator::default().compute(principal, annual_rate, tenure_months)
}
