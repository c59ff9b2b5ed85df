use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::LedgerConfig;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::interest::{installment_due_date, LoanTerms};
use crate::types::{BorrowerId, LoanId, LoanStatus, PaymentId};

/// immutable record of one applied payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub payment_id: PaymentId,
    /// 1-based position in the loan's payment history
    pub sequence: u32,
    pub amount: Money,
    pub applied_at: DateTime<Utc>,
    pub balance_after: Money,
    pub installments_covered: u32,
}

/// a borrower's loan: fixed terms plus the moving balance and schedule position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    // identification
    pub loan_id: LoanId,
    pub borrower_id: BorrowerId,

    // fixed terms
    /// ISO code the amounts are denominated in
    pub currency: String,
    pub principal: Money,
    pub annual_rate: Rate,
    pub tenure_months: u32,
    pub interest_amount: Money,
    pub total_amount: Money,
    pub emi_amount: Money,

    // running position
    pub remaining_amount: Money,
    pub remaining_emis: u32,
    pub next_due_date: NaiveDate,

    // dates
    pub created_at: DateTime<Utc>,
    pub maturity_date: NaiveDate,
    pub closed_at: Option<DateTime<Utc>>,
    pub first_due_offset_months: u32,

    pub status: LoanStatus,
    /// bumped on every committed mutation
    pub version: u64,

    pub payments: Vec<PaymentRecord>,
}

impl Loan {
    /// open a new loan from computed terms
    pub fn new(
        loan_id: LoanId,
        borrower_id: BorrowerId,
        terms: &LoanTerms,
        created_at: DateTime<Utc>,
        config: &LedgerConfig,
    ) -> Result<Self> {
        let first_due_offset_months = config.first_due_offset_months;
        let start = created_at.date_naive();
        let next_due_date = installment_due_date(start, first_due_offset_months, 1)?;
        let maturity_date = installment_due_date(start, first_due_offset_months, terms.tenure_months)?;

        Ok(Self {
            loan_id,
            borrower_id,
            currency: config.currency.clone(),
            principal: terms.principal,
            annual_rate: terms.annual_rate,
            tenure_months: terms.tenure_months,
            interest_amount: terms.interest_amount,
            total_amount: terms.total_amount,
            emi_amount: terms.emi_amount,
            remaining_amount: terms.total_amount,
            remaining_emis: terms.tenure_months,
            next_due_date,
            created_at,
            maturity_date,
            closed_at: None,
            first_due_offset_months,
            status: LoanStatus::Open,
            version: 0,
            payments: Vec::new(),
        })
    }

    pub fn terms(&self) -> LoanTerms {
        LoanTerms {
            principal: self.principal,
            annual_rate: self.annual_rate,
            tenure_months: self.tenure_months,
            interest_amount: self.interest_amount,
            total_amount: self.total_amount,
            emi_amount: self.emi_amount,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    pub fn paid_amount(&self) -> Money {
        self.total_amount - self.remaining_amount
    }

    /// whole percent of the total repaid, rounded half-up
    pub fn percent_paid(&self) -> u32 {
        self.paid_amount().percent_of(self.total_amount)
    }

    pub fn start_date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    pub fn last_payment(&self) -> Option<&PaymentRecord> {
        self.payments.last()
    }

    pub fn payment_count(&self) -> u32 {
        self.payments.len() as u32
    }

    /// check every ledger invariant
    pub fn invariants_hold(&self) -> bool {
        let paid: Money = self.payments.iter().map(|p| p.amount).sum();

        !self.remaining_amount.is_negative()
            && self.remaining_amount <= self.total_amount
            && self.remaining_emis <= self.tenure_months
            && self.total_amount == self.principal + self.interest_amount
            && paid <= self.total_amount
            && paid == self.paid_amount()
            && self.status.is_open() == self.remaining_amount.is_positive()
    }
}
