pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod interest;
pub mod ledger;
pub mod loan;
pub mod payments;
pub mod requests;
pub mod state;
pub mod summary;
pub mod types;

// re-export key types
pub use config::{LedgerConfig, MAX_TENURE_MONTHS};
pub use decimal::{Money, Rate};
pub use errors::{ErrorKind, LedgerError, Result};
pub use events::{Event, EventStore};
pub use interest::{compute, Installment, InstallmentSchedule, LoanTerms, SimpleInterestCalculator};
pub use ledger::PaymentLedger;
pub use loan::LoanAccount;
pub use requests::{ApplyPaymentRequest, CreateLoanRequest, LoanApplication};
pub use state::{Loan, PaymentRecord};
pub use summary::{LastPayment, LoanSummary, SuggestedPayments};
pub use types::{BorrowerId, LoanId, LoanStatus, PaymentId};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
