//! Error types for the Rust Wallet Engine
//!
//! Two families of errors live here:
//!
//! - [`AccountError`]: a rejected deposit or withdrawal. These are expected
//!   business outcomes and never leave the account partially updated.
//! - [`ReplayError`]: fatal problems in the CSV replay shell (missing file,
//!   I/O failures, malformed CSV structure).

use rust_decimal::Decimal;
use thiserror::Error;

/// A deposit or withdrawal rejected by the account rules
///
/// The variant is the authoritative signal for programmatic handling; the
/// `Display` output is the human-readable message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// Amount is zero or negative
    #[error("{amount}: amount must be a positive value")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// The deposit count limit has been reached
    #[error("Already reached the maximum of {max} daily deposits")]
    TooManyDeposits {
        /// Configured deposit limit
        max: usize,
    },

    /// The withdrawal would not leave a strictly positive balance
    #[error("Cannot withdraw more than {balance} $ (requested {requested})")]
    InsufficientBalance {
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// The withdrawal exceeds what is left of today's allowance
    #[error("Cannot withdraw more than $ {limit} per day, remaining: {remaining}")]
    DailyWithdrawalLimitExceeded {
        /// Configured daily limit
        limit: Decimal,
        /// Allowance left for the day
        remaining: Decimal,
    },

    /// Applying the amount would overflow the balance
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },
}

impl AccountError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        AccountError::InvalidAmount { amount }
    }

    /// Create a TooManyDeposits error
    pub fn too_many_deposits(max: usize) -> Self {
        AccountError::TooManyDeposits { max }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(balance: Decimal, requested: Decimal) -> Self {
        AccountError::InsufficientBalance { balance, requested }
    }

    /// Create a DailyWithdrawalLimitExceeded error
    pub fn daily_limit_exceeded(limit: Decimal, remaining: Decimal) -> Self {
        AccountError::DailyWithdrawalLimitExceeded { limit, remaining }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        AccountError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }
}

/// Fatal error in the CSV replay shell
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReplayError {
    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading input or writing the report
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The CSV structure itself could not be read
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for ReplayError {
    fn from(error: std::io::Error) -> Self {
        ReplayError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ReplayError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        ReplayError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}
