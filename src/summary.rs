//! read-side projections of a loan for display

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::state::Loan;
use crate::types::{BorrowerId, LoanId, LoanStatus};

/// snapshot of a loan plus the derived repayment progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanSummary {
    pub loan_id: LoanId,
    pub borrower_id: BorrowerId,
    pub status: LoanStatus,
    pub currency: String,
    pub principal: Money,
    pub annual_rate_percent: Decimal,
    pub tenure_months: u32,
    pub interest_amount: Money,
    pub total_amount: Money,
    pub emi_amount: Money,
    pub remaining_amount: Money,
    pub remaining_emis: u32,
    pub next_due_date: NaiveDate,
    pub maturity_date: NaiveDate,
    pub paid_amount: Money,
    pub percent_paid: u32,
    pub payment_count: u32,
    pub last_payment: Option<LastPayment>,
    pub suggested_payments: Option<SuggestedPayments>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastPayment {
    pub amount: Money,
    pub applied_at: DateTime<Utc>,
}

/// quick-pay amounts offered next to the payment form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedPayments {
    /// one EMI, or the balance if that is smaller
    pub next_installment: Money,
    /// settles the loan
    pub payoff: Money,
}

impl SuggestedPayments {
    /// None once the loan is closed
    pub fn for_loan(loan: &Loan) -> Option<Self> {
        if !loan.is_open() {
            return None;
        }

        let next_installment = if loan.emi_amount.is_positive() {
            loan.emi_amount.min(loan.remaining_amount)
        } else {
            loan.remaining_amount
        };

        Some(Self {
            next_installment,
            payoff: loan.remaining_amount,
        })
    }
}

impl LoanSummary {
    pub fn from_loan(loan: &Loan) -> Self {
        LoanSummary {
            loan_id: loan.loan_id,
            borrower_id: loan.borrower_id.clone(),
            status: loan.status,
            currency: loan.currency.clone(),
            principal: loan.principal,
            annual_rate_percent: loan.annual_rate.as_percentage(),
            tenure_months: loan.tenure_months,
            interest_amount: loan.interest_amount,
            total_amount: loan.total_amount,
            emi_amount: loan.emi_amount,
            remaining_amount: loan.remaining_amount,
            remaining_emis: loan.remaining_emis,
            next_due_date: loan.next_due_date,
            maturity_date: loan.maturity_date,
            paid_amount: loan.paid_amount(),
            percent_paid: loan.percent_paid(),
            payment_count: loan.payment_count(),
            last_payment: loan.last_payment().map(|p| LastPayment {
                amount: p.amount,
                applied_at: p.applied_at,
            }),
            suggested_payments: SuggestedPayments::for_loan(loan),
            created_at: loan.created_at,
            closed_at: loan.closed_at,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.status == LoanStatus::Closed
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LedgerConfig;
    use crate::decimal::Rate;
    use crate::interest::compute;
    use crate::payments::{PaymentPlan, PaymentRequest};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn loan_with_payment(amount: Option<i64>) -> Loan {
        let terms = compute(Money::from_major(100_000), Rate::from_percent(dec!(10)), 12).unwrap();
        let created = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let mut loan = Loan::new(Uuid::new_v4(), BorrowerId::from("b-7"), &terms, created, &LedgerConfig::default()).unwrap();

        if let Some(amount) = amount {
            let request = PaymentRequest {
                loan_id: loan.loan_id,
                amount: Money::from_major(amount),
                applied_at: created + chrono::Duration::days(30),
            };
            PaymentPlan::build(&loan, &request).unwrap().commit(&mut loan);
        }
        loan
    }

    #[test]
    fn test_summary_progress() {
        let loan = loan_with_payment(Some(9167));
        let summary = LoanSummary::from_loan(&loan);

        assert_eq!(summary.paid_amount, Money::from_major(9167));
        assert_eq!(summary.remaining_amount, Money::from_major(100_833));
        assert_eq!(summary.percent_paid, 8);
        assert_eq!(summary.annual_rate_percent, dec!(10));
        assert_eq!(summary.payment_count, 1);
        assert_eq!(summary.last_payment.as_ref().unwrap().amount, Money::from_major(9167));
        assert!(!summary.is_closed());

        let quick = summary.suggested_payments.unwrap();
        assert_eq!(quick.next_installment, Money::from_major(9167));
        assert_eq!(quick.payoff, Money::from_major(100_833));
    }

    #[test]
    fn test_summary_of_closed_loan() {
        let loan = loan_with_payment(Some(110_000));
        let summary = LoanSummary::from_loan(&loan);

        assert!(summary.is_closed());
        assert_eq!(summary.remaining_amount, Money::ZERO);
        assert_eq!(summary.percent_paid, 100);
        assert!(summary.suggested_payments.is_none());
        assert!(summary.closed_at.is_some());
    }

    #[test]
    fn test_suggestion_capped_by_balance() {
        let loan = loan_with_payment(Some(105_000));
        let quick = SuggestedPayments::for_loan(&loan).unwrap();

        assert_eq!(quick.next_installment, Money::from_major(5_000));
        assert_eq!(quick.payoff, Money::from_major(5_000));
    }

    #[test]
    fn test_summary_json() {
        let summary = LoanSummary::from_loan(&loan_with_payment(None));
        let json = summary.to_json_pretty().unwrap();

        assert!(json.contains("\"percentPaid\": 0"));
        assert!(json.contains("\"emiAmount\": \"9167\""));
        assert!(json.contains("\"lastPayment\": null"));
        assert!(json.contains("\"currency\": \"INR\""));
    }
}
