use chrono::NaiveDate;
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::interest::installment_due_date;
use crate::state::{Loan, PaymentRecord};
use crate::types::LoanStatus;

use super::{PaymentContext, PaymentRequest};

/// fully computed effect of a payment, built before anything is mutated so a
/// failure leaves the loan untouched
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentPlan {
    pub record: PaymentRecord,
    pub remaining_amount: Money,
    pub remaining_emis: u32,
    pub next_due_date: NaiveDate,
    /// EMIs the payment moved the schedule forward by
    pub installments_advanced: u32,
    pub closes_loan: bool,
}

impl PaymentPlan {
    pub fn build(loan: &Loan, request: &PaymentRequest) -> Result<Self> {
        if request.loan_id != loan.loan_id {
            return Err(LedgerError::validation(
                "loanId",
                format!("{} is not the borrower's current loan", request.loan_id),
            ));
        }

        let context = PaymentContext::from_loan(loan);
        context.validate_payment(request.amount)?;

        let remaining_amount = context.remaining_amount - request.amount;
        let closes_loan = remaining_amount.is_zero();

        let installments_advanced = context.installments_covered(request.amount);
        let remaining_emis = context.remaining_emis - installments_advanced;

        let next_due_date = if installments_advanced == 0 {
            loan.next_due_date
        } else {
            // never past the final installment
            let next_installment = (loan.tenure_months - remaining_emis + 1).min(loan.tenure_months);
            installment_due_date(loan.start_date(), loan.first_due_offset_months, next_installment)?
        };

        let record = PaymentRecord {
            payment_id: Uuid::new_v4(),
            sequence: loan.payment_count() + 1,
            amount: request.amount,
            applied_at: request.applied_at,
            balance_after: remaining_amount,
            installments_covered: installments_advanced,
        };

        Ok(Self {
            record,
            remaining_amount,
            remaining_emis,
            next_due_date,
            installments_advanced,
            closes_loan,
        })
    }

    /// apply the plan to the loan it was built from
    pub fn commit(self, loan: &mut Loan) -> PaymentRecord {
        loan.remaining_amount = self.remaining_amount;
        loan.remaining_emis = self.remaining_emis;
        loan.next_due_date = self.next_due_date;

        if self.closes_loan {
            loan.status = LoanStatus::Closed;
            loan.closed_at = Some(self.record.applied_at);
        }

        loan.payments.push(self.record.clone());
        loan.version += 1;

        self.record
    }
}
