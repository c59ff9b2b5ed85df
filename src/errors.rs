use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decimal::Money;
use crate::types::{BorrowerId, LoanId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("borrower {borrower_id} already holds active loan {loan_id}")]
    Conflict {
        borrower_id: BorrowerId,
        loan_id: LoanId,
    },

    #[error("no loan found for borrower {borrower_id}")]
    NotFound {
        borrower_id: BorrowerId,
    },

    #[error("payment exceeds remaining balance: remaining {remaining}, requested {requested}")]
    Overpayment {
        remaining: Money,
        requested: Money,
    },

    #[error("loan {loan_id} is closed")]
    ClosedLoan {
        loan_id: LoanId,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },
}

impl LedgerError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        LedgerError::Validation {
            field,
            message: message.into(),
        }
    }

    /// fieldless kind, for mapping onto transport status codes
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::Validation { .. } => ErrorKind::Validation,
            LedgerError::Conflict { .. } => ErrorKind::Conflict,
            LedgerError::NotFound { .. } => ErrorKind::NotFound,
            LedgerError::Overpayment { .. } => ErrorKind::Overpayment,
            LedgerError::ClosedLoan { .. } => ErrorKind::ClosedLoan,
            LedgerError::InvalidConfiguration { .. } | LedgerError::InvalidDate { .. } => {
                ErrorKind::Internal
            }
        }
    }

    /// whether the caller can correct its input (or pick another action) and retry
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Validation | ErrorKind::Conflict | ErrorKind::NotFound | ErrorKind::Overpayment
        )
    }

    /// the offending input field, for validation failures
    pub fn field(&self) -> Option<&'static str> {
        match self {
            LedgerError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// error category exposed across the transport boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    Overpayment,
    ClosedLoan,
    Internal,
}

pub type Result<T> = std::result::Result<T, LedgerError>;
