use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};

use super::LoanTerms;

/// one installment in a repayment schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    pub number: u32,
    pub due_date: NaiveDate,
    pub amount: Money,
    pub balance_after: Money,
}

/// installment-by-installment repayment plan for a set of terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentSchedule {
    pub terms: LoanTerms,
    pub start_date: NaiveDate,
    pub installments: Vec<Installment>,
}

impl InstallmentSchedule {
    /// lay out the schedule. every installment is one EMI except where the
    /// remaining balance is smaller; the final installment takes whatever is
    /// left, so the amounts always sum to the total payable.
    pub fn generate(terms: &LoanTerms, start_date: NaiveDate, first_due_offset_months: u32) -> Result<Self> {
        let mut installments = Vec::with_capacity(terms.tenure_months as usize);
        let mut balance = terms.total_amount;

        for number in 1..=terms.tenure_months {
            let amount = if number == terms.tenure_months {
                balance
            } else {
                terms.emi_amount.min(balance)
            };
            balance -= amount;

            installments.push(Installment {
                number,
                due_date: installment_due_date(start_date, first_due_offset_months, number)?,
                amount,
                balance_after: balance,
            });
        }

        Ok(Self {
            terms: *terms,
            start_date,
            installments,
        })
    }

    /// get installment by 1-based number
    pub fn get(&self, number: u32) -> Option<&Installment> {
        number
            .checked_sub(1)
            .and_then(|idx| self.installments.get(idx as usize))
    }

    pub fn total(&self) -> Money {
        self.installments.iter().map(|i| i.amount).sum()
    }

    /// due date of the last installment
    pub fn maturity_date(&self) -> Option<NaiveDate> {
        self.installments.last().map(|i| i.due_date)
    }
}

/// add calendar months, clamping to the end of shorter months
pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| LedgerError::InvalidDate {
            message: format!("{} + {} months is out of range", date, months),
        })
}

/// due date of the 1-based installment `number`, always measured from the
/// start date so month-end clamping never accumulates
pub fn installment_due_date(start_date: NaiveDate, first_due_offset_months: u32, number: u32) -> Result<NaiveDate> {
    let months = first_due_offset_months + number.saturating_sub(1);
    add_months(start_date, months)
}
