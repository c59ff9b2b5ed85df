use hourglass_rs::SafeTimeProvider;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::LedgerConfig;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::events::{Event, EventStore};
use crate::interest::{InstallmentSchedule, SimpleInterestCalculator};
use crate::payments::{PaymentPlan, PaymentRequest};
use crate::state::{Loan, PaymentRecord};
use crate::summary::LoanSummary;
use crate::types::BorrowerId;

/// one borrower's loan together with the events its operations produced
#[derive(Debug)]
pub struct LoanAccount {
    loan: Loan,
    events: EventStore,
}

impl LoanAccount {
    /// compute terms and open a new loan
    pub fn originate(
        borrower_id: BorrowerId,
        principal: Money,
        annual_rate: Rate,
        tenure_months: u32,
        config: &LedgerConfig,
        time_provider: &SafeTimeProvider,
    ) -> Result<Self> {
        let calculator = SimpleInterestCalculator::new(config.max_tenure_months);
        let terms = calculator.compute(principal, annual_rate, tenure_months)?;
        let now = time_provider.now();

        let loan = Loan::new(
            Uuid::new_v4(),
            borrower_id,
            &terms,
            now,
            config,
        )?;

        let mut events = EventStore::new();
        events.emit(Event::LoanCreated {
            loan_id: loan.loan_id,
            borrower_id: loan.borrower_id.clone(),
            currency: loan.currency.clone(),
            principal: loan.principal,
            annual_rate: loan.annual_rate,
            tenure_months: loan.tenure_months,
            total_amount: loan.total_amount,
            emi_amount: loan.emi_amount,
            first_due_date: loan.next_due_date,
            timestamp: now,
        });

        info!(
            loan_id = %loan.loan_id,
            borrower_id = %loan.borrower_id,
            currency = %loan.currency,
            principal = %loan.principal,
            total = %loan.total_amount,
            emi = %loan.emi_amount,
            tenure_months = loan.tenure_months,
            "loan created"
        );

        Ok(Self { loan, events })
    }

    /// apply a payment with system time
    pub fn apply_payment_now(&mut self, amount: Money) -> Result<PaymentRecord> {
        let time = SafeTimeProvider::new(hourglass_rs::TimeSource::System);
        self.apply_payment(amount, &time)
    }

    /// validate and apply a payment; on error the loan is unchanged
    pub fn apply_payment(&mut self, amount: Money, time_provider: &SafeTimeProvider) -> Result<PaymentRecord> {
        let now = time_provider.now();
        let request = PaymentRequest {
            loan_id: self.loan.loan_id,
            amount,
            applied_at: now,
        };

        let plan = PaymentPlan::build(&self.loan, &request)?;
        let advanced = plan.installments_advanced;
        let closes = plan.closes_loan;
        let record = plan.commit(&mut self.loan);

        debug!(
            loan_id = %self.loan.loan_id,
            amount = %record.amount,
            remaining = %self.loan.remaining_amount,
            remaining_emis = self.loan.remaining_emis,
            "payment applied"
        );

        self.events.emit(Event::PaymentApplied {
            loan_id: self.loan.loan_id,
            payment_id: record.payment_id,
            amount: record.amount,
            remaining_amount: record.balance_after,
            timestamp: now,
        });

        if advanced > 0 {
            self.events.emit(Event::InstallmentsAdvanced {
                loan_id: self.loan.loan_id,
                installments: advanced,
                remaining_emis: self.loan.remaining_emis,
                next_due_date: self.loan.next_due_date,
                timestamp: now,
            });
        }

        if closes {
            info!(
                loan_id = %self.loan.loan_id,
                borrower_id = %self.loan.borrower_id,
                payments = self.loan.payment_count(),
                "loan closed"
            );

            self.events.emit(Event::LoanClosed {
                loan_id: self.loan.loan_id,
                total_paid: self.loan.paid_amount(),
                payment_count: self.loan.payment_count(),
                timestamp: now,
            });
        }

        Ok(record)
    }

    pub fn loan(&self) -> &Loan {
        &self.loan
    }

    pub fn summary(&self) -> LoanSummary {
        LoanSummary::from_loan(&self.loan)
    }

    /// the full installment plan this loan was written on
    pub fn schedule(&self) -> Result<InstallmentSchedule> {
        InstallmentSchedule::generate(
            &self.loan.terms(),
            self.loan.start_date(),
            self.loan.first_due_offset_months,
        )
    }

    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    /// drain collected events
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }
}
