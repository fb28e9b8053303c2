//! Movement-related types for the Rust Wallet Engine
//!
//! This module defines the Movement record an account keeps for every
//! completed deposit or withdrawal, and the operation records read from input.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Direction of a movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementKind {
    /// Funds credited to the account
    Deposit,

    /// Funds debited from the account
    Withdrawal,
}

impl MovementKind {
    /// Lowercase name used in CSV input and output
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Deposit => "deposit",
            MovementKind::Withdrawal => "withdrawal",
        }
    }
}

/// A completed deposit or withdrawal
///
/// Movements are immutable once created. An account appends one for every
/// successful operation and never reorders or removes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    date: NaiveDate,
    kind: MovementKind,
    amount: Decimal,
}

impl Movement {
    /// Create a new movement
    ///
    /// No validation is performed here; the account checks amounts before
    /// recording a movement.
    pub fn new(date: NaiveDate, amount: Decimal, kind: MovementKind) -> Self {
        Movement { date, kind, amount }
    }

    /// Shorthand for a deposit movement
    pub fn deposit(date: NaiveDate, amount: Decimal) -> Self {
        Self::new(date, amount, MovementKind::Deposit)
    }

    /// Shorthand for a withdrawal movement
    pub fn withdrawal(date: NaiveDate, amount: Decimal) -> Self {
        Self::new(date, amount, MovementKind::Withdrawal)
    }

    /// Calendar date the movement occurred
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn is_deposit(&self) -> bool {
        self.kind == MovementKind::Deposit
    }

    pub fn is_withdrawal(&self) -> bool {
        self.kind == MovementKind::Withdrawal
    }

    /// Whether the movement was recorded on `date`
    pub fn was_made_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}

/// Requested operation as read from input
///
/// Unlike a [`Movement`], a record has not been validated: the amount may be
/// zero or negative, in which case the account rejects it.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    /// Deposit or withdrawal
    pub kind: MovementKind,

    /// Date the operation is applied on
    pub date: NaiveDate,

    /// Requested amount
    pub amount: Decimal,
}
