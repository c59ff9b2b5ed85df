use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::{BorrowerId, LoanId, PaymentId};

/// all events that can be emitted by a loan account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    LoanCreated {
        loan_id: LoanId,
        borrower_id: BorrowerId,
        currency: String,
        principal: Money,
        annual_rate: Rate,
        tenure_months: u32,
        total_amount: Money,
        emi_amount: Money,
        first_due_date: NaiveDate,
        timestamp: DateTime<Utc>,
    },
    PaymentApplied {
        loan_id: LoanId,
        payment_id: PaymentId,
        amount: Money,
        remaining_amount: Money,
        timestamp: DateTime<Utc>,
    },
    InstallmentsAdvanced {
        loan_id: LoanId,
        installments: u32,
        remaining_emis: u32,
        next_due_date: NaiveDate,
        timestamp: DateTime<Utc>,
    },
    LoanClosed {
        loan_id: LoanId,
        total_paid: Money,
        payment_count: u32,
        timestamp: DateTime<Utc>,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}
