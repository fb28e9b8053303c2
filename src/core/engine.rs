//! Ledger engine
//!
//! This module provides the LedgerEngine, which applies dated operation
//! records to a single account. Each record carries its own date, so the
//! engine drives the account with a [`FixedClock`] moved to that date before
//! the operation is applied.

use crate::core::account::Account;
use crate::core::clock::FixedClock;
use crate::core::limits::AccountLimits;
use crate::types::{AccountError, MovementKind, OperationRecord};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Applies operation records to one account and keeps a tally
pub struct LedgerEngine {
    account: Account<FixedClock>,
    accepted: usize,
    rejected: usize,
}

impl LedgerEngine {
    /// Create an engine around a fresh account
    ///
    /// The clock starts at `NaiveDate::MIN`; it is moved to each record's
    /// date before the record is applied.
    pub fn new(initial_balance: Decimal, limits: AccountLimits) -> Self {
        let account = Account::with_clock(initial_balance, FixedClock::new(NaiveDate::MIN))
            .with_limits(limits);

        LedgerEngine {
            account,
            accepted: 0,
            rejected: 0,
        }
    }

    /// Apply a single operation record
    ///
    /// # Errors
    ///
    /// Returns the account's rejection unchanged. A rejected record leaves
    /// the account untouched and only bumps the rejected counter.
    pub fn process(&mut self, record: OperationRecord) -> Result<(), AccountError> {
        self.account.clock().set(record.date);

        let result = match record.kind {
            MovementKind::Deposit => self.account.deposit(record.amount),
            MovementKind::Withdrawal => self.account.withdraw(record.amount),
        };

        match result {
            Ok(()) => self.accepted += 1,
            Err(_) => self.rejected += 1,
        }

        result
    }

    pub fn account(&self) -> &Account<FixedClock> {
        &self.account
    }

    /// Number of records applied successfully
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Number of records the account rejected
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

impl Default for LedgerEngine {
    fn default() -> Self {
        Self::new(Decimal::ZERO, AccountLimits::default())
    }
}
