pub mod plan;

use chrono::{DateTime, Utc};

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::state::Loan;
use crate::types::{LoanId, LoanStatus};

pub use plan::PaymentPlan;

/// payment request against a loan
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub loan_id: LoanId,
    pub amount: Money,
    pub applied_at: DateTime<Utc>,
}

/// the slice of loan state a payment is validated against
#[derive(Debug, Clone)]
pub struct PaymentContext {
    pub loan_id: LoanId,
    pub status: LoanStatus,
    pub remaining_amount: Money,
    pub remaining_emis: u32,
    pub emi_amount: Money,
}

impl PaymentContext {
    pub fn from_loan(loan: &Loan) -> Self {
        Self {
            loan_id: loan.loan_id,
            status: loan.status,
            remaining_amount: loan.remaining_amount,
            remaining_emis: loan.remaining_emis,
            emi_amount: loan.emi_amount,
        }
    }

    /// preconditions in order: loan open, amount positive, amount within balance
    pub fn validate_payment(&self, amount: Money) -> Result<()> {
        if !self.status.is_open() || self.remaining_amount.is_zero() {
            return Err(LedgerError::ClosedLoan { loan_id: self.loan_id });
        }

        if !amount.is_positive() {
            return Err(LedgerError::validation(
                "amount",
                format!("must be greater than 0, got {}", amount),
            ));
        }

        if amount > self.remaining_amount {
            return Err(LedgerError::Overpayment {
                remaining: self.remaining_amount,
                requested: amount,
            });
        }

        Ok(())
    }

    /// EMIs a payment consumes: whole multiples of the EMI, capped at what is left
    pub fn installments_covered(&self, amount: Money) -> u32 {
        amount
            .whole_multiples_of(self.emi_amount)
            .min(self.remaining_emis)
    }
}
