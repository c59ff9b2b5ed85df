//! Per-borrower loan ledger shared across request handlers.
//!
//! Loan accounts sit behind their own lock inside a borrower index. Payments
//! take the index read lock only long enough to find the account, then hold
//! the account write lock for the whole validate-and-commit step, so two
//! payments on one loan are linearized while other borrowers proceed in
//! parallel. Summaries take the account read lock and never see a partial
//! update.
//!
//! A closed loan is moved to the borrower's archive when a new loan replaces
//! it, so payment history is never dropped. Lock order is index, then
//! account, then archive.

use std::collections::HashMap;
use std::sync::Arc;

use hourglass_rs::SafeTimeProvider;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::config::LedgerConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::events::Event;
use crate::interest::{InstallmentSchedule, LoanTerms, SimpleInterestCalculator};
use crate::loan::LoanAccount;
use crate::requests::{ApplyPaymentRequest, CreateLoanRequest};
use crate::state::{Loan, PaymentRecord};
use crate::summary::LoanSummary;
use crate::types::BorrowerId;

type SharedAccount = Arc<RwLock<LoanAccount>>;

/// the payment ledger: at most one current loan per borrower
#[derive(Debug)]
pub struct PaymentLedger {
    config: LedgerConfig,
    accounts: RwLock<HashMap<BorrowerId, SharedAccount>>,
    /// closed loans replaced by a newer one, oldest first
    archive: RwLock<HashMap<BorrowerId, Vec<Loan>>>,
}

impl Default for PaymentLedger {
    fn default() -> Self {
        Self {
            config: LedgerConfig::default(),
            accounts: RwLock::new(HashMap::new()),
            archive: RwLock::new(HashMap::new()),
        }
    }
}

impl PaymentLedger {
    pub fn new(config: LedgerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            accounts: RwLock::new(HashMap::new()),
            archive: RwLock::new(HashMap::new()),
        })
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// pure term preview; no state is touched
    pub fn preview(&self, principal: Money, annual_rate: Rate, tenure_months: u32) -> Result<LoanTerms> {
        SimpleInterestCalculator::new(self.config.max_tenure_months).compute(principal, annual_rate, tenure_months)
    }

    /// create a loan with system time
    pub fn create_loan_now(
        &self,
        borrower_id: &BorrowerId,
        principal: Money,
        annual_rate: Rate,
        tenure_months: u32,
    ) -> Result<Loan> {
        let time = SafeTimeProvider::new(hourglass_rs::TimeSource::System);
        self.create_loan(borrower_id, principal, annual_rate, tenure_months, &time)
    }

    /// open a loan for a borrower with no active loan. a closed loan is
    /// archived and replaced by the new one.
    pub fn create_loan(
        &self,
        borrower_id: &BorrowerId,
        principal: Money,
        annual_rate: Rate,
        tenure_months: u32,
        time_provider: &SafeTimeProvider,
    ) -> Result<Loan> {
        let mut accounts = self.accounts.write();

        let mut retired = None;
        if let Some(existing) = accounts.get(borrower_id) {
            let existing = existing.read();
            if existing.loan().is_open() {
                warn!(
                    borrower_id = %borrower_id,
                    loan_id = %existing.loan().loan_id,
                    "rejected loan creation: borrower already has an active loan"
                );
                return Err(LedgerError::Conflict {
                    borrower_id: borrower_id.clone(),
                    loan_id: existing.loan().loan_id,
                });
            }
            retired = Some(existing.loan().clone());
        }

        let account = LoanAccount::originate(
            borrower_id.clone(),
            principal,
            annual_rate,
            tenure_months,
            &self.config,
            time_provider,
        )?;
        let loan = account.loan().clone();

        if let Some(closed) = retired {
            debug!(
                borrower_id = %borrower_id,
                loan_id = %closed.loan_id,
                "archiving closed loan"
            );
            self.archive.write().entry(borrower_id.clone()).or_default().push(closed);
        }
        accounts.insert(borrower_id.clone(), Arc::new(RwLock::new(account)));

        Ok(loan)
    }

    /// create a loan from a raw transport payload
    pub fn create_loan_from_request(
        &self,
        borrower_id: &BorrowerId,
        request: &CreateLoanRequest,
        time_provider: &SafeTimeProvider,
    ) -> Result<Loan> {
        let application = request.validate()?;
        self.create_loan(
            borrower_id,
            application.principal,
            application.annual_rate,
            application.tenure_months,
            time_provider,
        )
    }

    /// apply a payment with system time
    pub fn apply_payment_now(&self, borrower_id: &BorrowerId, amount: Money) -> Result<Loan> {
        let time = SafeTimeProvider::new(hourglass_rs::TimeSource::System);
        self.apply_payment(borrower_id, amount, &time)
    }

    /// apply a payment to the borrower's loan, returning the updated loan
    pub fn apply_payment(
        &self,
        borrower_id: &BorrowerId,
        amount: Money,
        time_provider: &SafeTimeProvider,
    ) -> Result<Loan> {
        self.with_account_mut(borrower_id, |account| {
            account.apply_payment(amount, time_provider)?;
            Ok(account.loan().clone())
        })
    }

    /// apply a payment from a raw transport payload
    pub fn apply_payment_from_request(
        &self,
        borrower_id: &BorrowerId,
        request: &ApplyPaymentRequest,
        time_provider: &SafeTimeProvider,
    ) -> Result<Loan> {
        let amount = request.validate()?;

        self.with_account_mut(borrower_id, |account| {
            if let Some(loan_id) = request.loan_id {
                if loan_id != account.loan().loan_id {
                    return Err(LedgerError::validation(
                        "loanId",
                        format!("{} is not the borrower's current loan", loan_id),
                    ));
                }
            }
            account.apply_payment(amount, time_provider)?;
            Ok(account.loan().clone())
        })
    }

    pub fn get_summary(&self, borrower_id: &BorrowerId) -> Result<LoanSummary> {
        self.with_account(borrower_id, |account| account.summary())
    }

    pub fn get_loan(&self, borrower_id: &BorrowerId) -> Result<Loan> {
        self.with_account(borrower_id, |account| account.loan().clone())
    }

    /// payment history, oldest first
    pub fn get_payments(&self, borrower_id: &BorrowerId) -> Result<Vec<PaymentRecord>> {
        self.with_account(borrower_id, |account| account.loan().payments.clone())
    }

    /// closed loans this borrower has since replaced, oldest first
    pub fn get_closed_loans(&self, borrower_id: &BorrowerId) -> Vec<Loan> {
        self.archive.read().get(borrower_id).cloned().unwrap_or_default()
    }

    pub fn get_schedule(&self, borrower_id: &BorrowerId) -> Result<InstallmentSchedule> {
        self.with_account(borrower_id, |account| account.schedule())?
    }

    /// drain events collected for a borrower's loan
    pub fn take_events(&self, borrower_id: &BorrowerId) -> Result<Vec<Event>> {
        let account = self.account(borrower_id)?;
        let mut account = account.write();
        Ok(account.take_events())
    }

    /// number of borrowers holding a loan, open or closed
    pub fn len(&self) -> usize {
        self.accounts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.read().is_empty()
    }

    fn account(&self, borrower_id: &BorrowerId) -> Result<SharedAccount> {
        self.accounts
            .read()
            .get(borrower_id)
            .cloned()
            .ok_or_else(|| LedgerError::NotFound {
                borrower_id: borrower_id.clone(),
            })
    }

    fn with_account<T>(&self, borrower_id: &BorrowerId, f: impl FnOnce(&LoanAccount) -> T) -> Result<T> {
        let account = self.account(borrower_id)?;
        let account = account.read();
        Ok(f(&account))
    }

    fn with_account_mut<T>(
        &self,
        borrower_id: &BorrowerId,
        f: impl FnOnce(&mut LoanAccount) -> Result<T>,
    ) -> Result<T> {
        let account = self.account(borrower_id).map_err(|e| {
            warn!(borrower_id = %borrower_id, "rejected payment: no loan");
            e
        })?;
        let mut account = account.write();

        f(&mut account).map_err(|e| {
            warn!(
                borrower_id = %borrower_id,
                loan_id = %account.loan().loan_id,
                error = %e,
                "rejected payment"
            );
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::types::LoanStatus;
    use chrono::{Duration, TimeZone, Utc};
    use hourglass_rs::TimeSource;
    use proptest::prelude::*;
    use std::thread;

    fn time() -> SafeTimeProvider {
        SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        ))
    }

    fn borrower(id: &str) -> BorrowerId {
        BorrowerId::from(id)
    }

    fn ledger_with_reference_loan(time: &SafeTimeProvider) -> PaymentLedger {
        let ledger = PaymentLedger::default();
        ledger
            .create_loan(
                &borrower("alice"),
                Money::from_major(100_000),
                Rate::from_percentage(10),
                12,
                time,
            )
            .unwrap();
        ledger
    }

    #[test]
    fn test_create_loan_reference_terms() {
        let time = time();
        let ledger = ledger_with_reference_loan(&time);
        let loan = ledger.get_loan(&borrower("alice")).unwrap();

        assert_eq!(loan.interest_amount, Money::from_major(10_000));
        assert_eq!(loan.total_amount, Money::from_major(110_000));
        assert_eq!(loan.emi_amount, Money::from_major(9167));
        assert_eq!(loan.remaining_amount, loan.total_amount);
        assert_eq!(loan.remaining_emis, 12);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_single_emi_payment() {
        let time = time();
        let ledger = ledger_with_reference_loan(&time);

        let loan = ledger
            .apply_payment(&borrower("alice"), Money::from_major(9167), &time)
            .unwrap();

        assert_eq!(loan.remaining_amount, Money::from_major(100_833));
        assert_eq!(loan.remaining_emis, 11);
        assert_eq!(loan.payments.len(), 1);
    }

    #[test]
    fn test_full_payment_closes_loan() {
        let time = time();
        let ledger = ledger_with_reference_loan(&time);

        let loan = ledger
            .apply_payment(&borrower("alice"), Money::from_major(110_000), &time)
            .unwrap();
        assert_eq!(loan.remaining_amount, Money::ZERO);
        assert_eq!(loan.status, LoanStatus::Closed);

        let err = ledger
            .apply_payment(&borrower("alice"), Money::ONE, &time)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ClosedLoan);

        // closed loans stay readable
        let summary = ledger.get_summary(&borrower("alice")).unwrap();
        assert!(summary.is_closed());
        assert_eq!(summary.remaining_amount, Money::ZERO);
    }

    #[test]
    fn test_zero_tenure_creates_nothing() {
        let time = time();
        let ledger = PaymentLedger::default();

        let err = ledger
            .create_loan(&borrower("bob"), Money::from_major(5_000), Rate::from_percentage(8), 0, &time)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.field(), Some("tenureMonths"));
        assert!(ledger.is_empty());
        assert_eq!(
            ledger.get_summary(&borrower("bob")).unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_second_active_loan_conflicts() {
        let time = time();
        let ledger = ledger_with_reference_loan(&time);
        let original = ledger.get_loan(&borrower("alice")).unwrap();

        let err = ledger
            .create_loan(&borrower("alice"), Money::from_major(1_000), Rate::ZERO, 6, &time)
            .unwrap_err();
        assert!(matches!(err, LedgerError::Conflict { loan_id, .. } if loan_id == original.loan_id));

        // untouched
        assert_eq!(ledger.get_loan(&borrower("alice")).unwrap(), original);
    }

    #[test]
    fn test_new_loan_after_closure() {
        let time = time();
        let ledger = ledger_with_reference_loan(&time);
        let first = ledger
            .apply_payment(&borrower("alice"), Money::from_major(110_000), &time)
            .unwrap();

        let second = ledger
            .create_loan(&borrower("alice"), Money::from_major(20_000), Rate::from_percentage(12), 10, &time)
            .unwrap();

        assert_ne!(first.loan_id, second.loan_id);
        assert_eq!(ledger.get_summary(&borrower("alice")).unwrap().loan_id, second.loan_id);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_replaced_loan_keeps_history() {
        let time = time();
        let ledger = ledger_with_reference_loan(&time);
        let alice = borrower("alice");
        ledger.apply_payment(&alice, Money::from_major(9167), &time).unwrap();
        let first = ledger.apply_payment(&alice, Money::from_major(100_833), &time).unwrap();
        assert!(ledger.get_closed_loans(&alice).is_empty());

        // a failed creation archives nothing
        assert!(ledger.create_loan(&alice, Money::ZERO, Rate::ZERO, 6, &time).is_err());
        assert!(ledger.get_closed_loans(&alice).is_empty());

        let second = ledger
            .create_loan(&alice, Money::from_major(5_000), Rate::ZERO, 5, &time)
            .unwrap();
        ledger.apply_payment(&alice, Money::from_major(5_000), &time).unwrap();
        ledger
            .create_loan(&alice, Money::from_major(1_000), Rate::ZERO, 2, &time)
            .unwrap();

        let closed = ledger.get_closed_loans(&alice);
        assert_eq!(closed.len(), 2);
        assert_eq!(closed[0], first);
        assert_eq!(closed[0].payments.len(), 2);
        assert_eq!(closed[0].payments[1].balance_after, Money::ZERO);
        assert_eq!(closed[1].loan_id, second.loan_id);
        assert!(ledger.get_payments(&alice).unwrap().is_empty());
        assert!(ledger.get_closed_loans(&borrower("nobody")).is_empty());
    }

    #[test]
    fn test_closing_payment_counts_whole_emis_only() {
        let time = time();
        let ledger = ledger_with_reference_loan(&time);

        let loan = ledger
            .apply_payment(&borrower("alice"), Money::from_major(110_000), &time)
            .unwrap();

        assert_eq!(loan.status, LoanStatus::Closed);
        assert_eq!(loan.remaining_emis, 1);
        assert_eq!(loan.payments[0].installments_covered, 11);
        assert_eq!(loan.next_due_date, loan.maturity_date);
    }

    #[test]
    fn test_sub_minor_unit_payment_rejected() {
        let time = time();
        let ledger = PaymentLedger::default();
        let hana = borrower("hana");
        ledger.create_loan(&hana, Money::from_major(100), Rate::ZERO, 1, &time).unwrap();

        let request = ApplyPaymentRequest {
            loan_id: None,
            amount: rust_decimal_macros::dec!(100.004),
        };
        let err = ledger.apply_payment_from_request(&hana, &request, &time).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.field(), Some("amount"));

        let loan = ledger.get_loan(&hana).unwrap();
        assert!(loan.is_open());
        assert_eq!(loan.remaining_amount, Money::from_major(100));
        assert!(loan.payments.is_empty());
    }

    #[test]
    fn test_configured_currency_reaches_summary_and_events() {
        let time = time();
        let ledger = PaymentLedger::new(LedgerConfig::default().with_currency("USD")).unwrap();
        let ivan = borrower("ivan");
        ledger.create_loan(&ivan, Money::from_major(1_200), Rate::ZERO, 12, &time).unwrap();

        assert_eq!(ledger.get_summary(&ivan).unwrap().currency, "USD");
        let events = ledger.take_events(&ivan).unwrap();
        assert!(matches!(&events[0], Event::LoanCreated { currency, .. } if currency == "USD"));
    }

    #[test]
    fn test_overpayment_rejected_without_change() {
        let time = time();
        let ledger = ledger_with_reference_loan(&time);
        ledger
            .apply_payment(&borrower("alice"), Money::from_major(10_000), &time)
            .unwrap();

        let err = ledger
            .apply_payment(&borrower("alice"), Money::from_major(100_001), &time)
            .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Overpayment { remaining, requested }
                if remaining == Money::from_major(100_000) && requested == Money::from_major(100_001)
        ));

        let loan = ledger.get_loan(&borrower("alice")).unwrap();
        assert_eq!(loan.remaining_amount, Money::from_major(100_000));
        assert_eq!(loan.payments.len(), 1);
    }

    #[test]
    fn test_unknown_borrower() {
        let time = time();
        let ledger = PaymentLedger::default();

        let err = ledger.apply_payment(&borrower("nobody"), Money::ONE, &time).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(ledger.get_payments(&borrower("nobody")).unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(ledger.take_events(&borrower("nobody")).unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_requests_round_through_ledger() {
        let time = time();
        let ledger = PaymentLedger::default();
        let carol = borrower("carol");

        let create: CreateLoanRequest = serde_json::from_str(
            r#"{ "principal": "60000", "interestRate": "12", "tenureMonths": 12 }"#,
        )
        .unwrap();
        let loan = ledger.create_loan_from_request(&carol, &create, &time).unwrap();
        assert_eq!(loan.total_amount, Money::from_major(67_200));
        assert_eq!(loan.emi_amount, Money::from_major(5_600));

        let stale = ApplyPaymentRequest {
            loan_id: Some(uuid::Uuid::new_v4()),
            amount: rust_decimal_macros::dec!(5600),
        };
        let err = ledger.apply_payment_from_request(&carol, &stale, &time).unwrap_err();
        assert_eq!(err.field(), Some("loanId"));

        let pay = ApplyPaymentRequest {
            loan_id: Some(loan.loan_id),
            amount: rust_decimal_macros::dec!(11200),
        };
        let loan = ledger.apply_payment_from_request(&carol, &pay, &time).unwrap();
        assert_eq!(loan.remaining_emis, 10);

        let too_long = CreateLoanRequest {
            principal: rust_decimal_macros::dec!(1000),
            annual_rate_percent: rust_decimal_macros::dec!(5),
            tenure_months: 361,
        };
        let err = ledger
            .create_loan_from_request(&borrower("dave"), &too_long, &time)
            .unwrap_err();
        assert_eq!(err.field(), Some("tenureMonths"));
    }

    #[test]
    fn test_events_drained_per_borrower() {
        let time = time();
        let control = time.test_control().unwrap();
        let ledger = ledger_with_reference_loan(&time);

        control.advance(Duration::days(31));
        ledger
            .apply_payment(&borrower("alice"), Money::from_major(110_000), &time)
            .unwrap();

        let events = ledger.take_events(&borrower("alice")).unwrap();
        assert!(matches!(events.first(), Some(Event::LoanCreated { .. })));
        assert!(matches!(events.last(), Some(Event::LoanClosed { .. })));
        assert!(ledger.take_events(&borrower("alice")).unwrap().is_empty());
    }

    #[test]
    fn test_preview_and_schedule() {
        let time = time();
        let ledger = ledger_with_reference_loan(&time);

        let terms = ledger
            .preview(Money::from_major(100_000), Rate::from_percentage(10), 12)
            .unwrap();
        assert_eq!(terms, ledger.get_loan(&borrower("alice")).unwrap().terms());
        assert_eq!(ledger.len(), 1);

        let schedule = ledger.get_schedule(&borrower("alice")).unwrap();
        assert_eq!(schedule.installments.len(), 12);
        assert_eq!(schedule.total(), Money::from_major(110_000));
    }

    #[test]
    fn test_config_tenure_ceiling() {
        let time = time();
        let ledger = PaymentLedger::new(LedgerConfig::default().with_max_tenure(12)).unwrap();

        assert!(ledger.preview(Money::from_major(1_000), Rate::ZERO, 13).is_err());
        assert!(ledger
            .create_loan(&borrower("erin"), Money::from_major(1_000), Rate::ZERO, 13, &time)
            .is_err());
        assert!(PaymentLedger::new(LedgerConfig::default().with_max_tenure(0)).is_err());
    }

    #[test]
    fn test_concurrent_half_payments() {
        let ledger = Arc::new(PaymentLedger::default());
        let start = time();
        ledger
            .create_loan(&borrower("frank"), Money::from_major(100_000), Rate::from_percentage(10), 12, &start)
            .unwrap();
        let half = Money::from_major(55_000);

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let ledger = Arc::clone(&ledger);
                thread::spawn(move || {
                    let time = SafeTimeProvider::new(TimeSource::Test(
                        Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap(),
                    ));
                    ledger.apply_payment(&BorrowerId::from("frank"), half, &time)
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        let loan = ledger.get_loan(&borrower("frank")).unwrap();
        assert_eq!(loan.remaining_amount, Money::ZERO);
        assert_eq!(loan.payments.len(), 2);
        assert_eq!(loan.status, LoanStatus::Closed);
        assert!(loan.invariants_hold());
    }

    #[test]
    fn test_concurrent_payments_never_overdraw() {
        let ledger = Arc::new(PaymentLedger::default());
        let start = time();
        ledger
            .create_loan(&borrower("gina"), Money::from_major(10_000), Rate::ZERO, 10, &start)
            .unwrap();

        // 16 threads racing for a 10,000 balance in 1,000 steps
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let ledger = Arc::clone(&ledger);
                thread::spawn(move || {
                    let time = SafeTimeProvider::new(TimeSource::Test(
                        Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap(),
                    ));
                    ledger.apply_payment(&BorrowerId::from("gina"), Money::from_major(1_000), &time)
                })
            })
            .collect();

        let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let accepted = outcomes.iter().filter(|r| r.is_ok()).count();
        assert_eq!(accepted, 10);
        assert!(outcomes
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| e.kind() == ErrorKind::ClosedLoan));

        let loan = ledger.get_loan(&borrower("gina")).unwrap();
        assert_eq!(loan.remaining_amount, Money::ZERO);
        assert_eq!(loan.payments.len(), 10);
        let sequences: Vec<u32> = loan.payments.iter().map(|p| p.sequence).collect();
        assert_eq!(sequences, (1..=10).collect::<Vec<_>>());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_balance_monotone_and_closes_once(
            payments in proptest::collection::vec(1i64..40_000, 1..40),
        ) {
            let time = time();
            let ledger = ledger_with_reference_loan(&time);
            let alice = borrower("alice");

            let mut previous = ledger.get_loan(&alice).unwrap().remaining_amount;
            let mut closures = 0;

            for amount in payments {
                let amount = Money::from_major(amount);
                match ledger.apply_payment(&alice, amount, &time) {
                    Ok(loan) => {
                        prop_assert!(loan.remaining_amount <= previous);
                        prop_assert!(!loan.remaining_amount.is_negative());
                        prop_assert!(loan.invariants_hold());
                        if !loan.is_open() {
                            closures += 1;
                        }
                        previous = loan.remaining_amount;
                    }
                    Err(e) => {
                        let loan = ledger.get_loan(&alice).unwrap();
                        prop_assert_eq!(loan.remaining_amount, previous);
                        if amount > previous && previous.is_positive() {
                            prop_assert_eq!(e.kind(), ErrorKind::Overpayment);
                        }
                        if previous.is_zero() {
                            prop_assert_eq!(e.kind(), ErrorKind::ClosedLoan);
                        }
                    }
                }
            }

            // drive any leftover balance to zero
            if previous.is_positive() {
                let loan = ledger.apply_payment(&alice, previous, &time).unwrap();
                prop_assert!(!loan.is_open());
                closures += 1;
            }
            prop_assert_eq!(closures, 1);
        }
    }
}
