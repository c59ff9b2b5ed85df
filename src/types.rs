use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// unique identifier for a loan
pub type LoanId = Uuid;

/// unique identifier for a payment record
pub type PaymentId = Uuid;

/// authenticated borrower identity, supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BorrowerId(String);

impl BorrowerId {
    pub fn new(id: impl Into<String>) -> Self {
        BorrowerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BorrowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BorrowerId {
    fn from(s: &str) -> Self {
        BorrowerId(s.to_string())
    }
}

impl From<String> for BorrowerId {
    fn from(s: String) -> Self {
        BorrowerId(s)
    }
}

/// loan status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    /// balance outstanding, payments accepted
    Open,
    /// fully repaid, no further payments
    Closed,
}

impl LoanStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, LoanStatus::Open)
    }
}
