//! Account module
//!
//! This module provides the `Account` struct, which holds a balance and the
//! ordered log of movements that produced it, and enforces the deposit and
//! withdrawal rules.
//!
//! The Account is responsible for:
//! - Rejecting non-positive amounts
//! - Capping the number of deposits
//! - Refusing withdrawals that would not leave a positive balance
//! - Capping the total withdrawn per calendar date
//! - Recording a dated movement for every accepted operation
//!
//! Every operation either fully succeeds (balance updated and movement
//! appended) or fails without touching the account.

use crate::core::clock::SystemClock;
use crate::core::limits::AccountLimits;
use crate::core::traits::Clock;
use crate::types::{AccountError, Movement};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A single account with rule-checked deposits and withdrawals
///
/// The current date comes from the injected [`Clock`]; by default this is the
/// local wall-clock date.
///
/// `Account` is not synchronized. Callers sharing one across threads must
/// guard each whole `deposit`/`withdraw` call with their own lock.
///
/// # Examples
///
/// ```
/// use rust_wallet_engine::core::Account;
/// use rust_wallet_engine::types::AccountError;
/// use rust_decimal::Decimal;
///
/// let mut account = Account::new();
/// account.deposit(Decimal::new(100, 0)).unwrap();
/// assert_eq!(account.balance(), Decimal::new(100, 0));
///
/// let result = account.withdraw(Decimal::new(100, 0));
/// assert!(matches!(result, Err(AccountError::InsufficientBalance { .. })));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Account<C = SystemClock> {
    balance: Decimal,
    movements: Vec<Movement>,
    limits: AccountLimits,
    clock: C,
}

impl Account<SystemClock> {
    /// Create an account with a zero balance
    pub fn new() -> Self {
        Self::with_balance(Decimal::ZERO)
    }

    /// Create an account with an initial balance
    ///
    /// The initial balance is not recorded as a movement.
    pub fn with_balance(initial_balance: Decimal) -> Self {
        Self::with_clock(initial_balance, SystemClock)
    }
}

impl Default for Account<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Account<C> {
    /// Create an account with an initial balance and a custom date source
    pub fn with_clock(initial_balance: Decimal, clock: C) -> Self {
        Account {
            balance: initial_balance,
            movements: Vec::new(),
            limits: AccountLimits::default(),
            clock,
        }
    }

    /// Create an account from a pre-populated movement history
    ///
    /// Intended for test fixtures. Neither the movements nor the balance are
    /// validated: the caller is responsible for `balance` being consistent
    /// with `movements`.
    pub fn from_movements(balance: Decimal, movements: Vec<Movement>, clock: C) -> Self {
        Account {
            balance,
            movements,
            limits: AccountLimits::default(),
            clock,
        }
    }

    /// Replace the business limits
    pub fn with_limits(mut self, limits: AccountLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Recorded movements in insertion order
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    pub fn limits(&self) -> &AccountLimits {
        &self.limits
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Total number of recorded movements (deposits and withdrawals)
    pub fn movement_count(&self) -> usize {
        self.movements.len()
    }

    /// Number of recorded deposits, across all dates
    pub fn deposit_count(&self) -> usize {
        self.movements.iter().filter(|m| m.is_deposit()).count()
    }

    /// Deposit funds into the account
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `InvalidAmount` if `amount <= 0`
    /// - `TooManyDeposits` if the deposit limit has been reached
    /// - `ArithmeticOverflow` if the balance cannot hold the result
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if !self.is_valid_amount(amount) {
            return Err(AccountError::invalid_amount(amount));
        }

        if self.has_reached_max_deposits() {
            return Err(AccountError::too_many_deposits(self.limits.max_deposits));
        }

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow("deposit"))?;

        self.balance = new_balance;
        self.movements
            .push(Movement::deposit(self.clock.today(), amount));

        Ok(())
    }

    /// Withdraw funds from the account
    ///
    /// # Errors
    ///
    /// Checked in this order, the first failure is returned:
    /// - `InvalidAmount` if `amount <= 0`
    /// - `InsufficientBalance` if the balance left would be zero or negative
    /// - `DailyWithdrawalLimitExceeded` if `amount` is more than what remains
    ///   of today's allowance
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if !self.is_valid_amount(amount) {
            return Err(AccountError::invalid_amount(amount));
        }

        if !self.can_withdraw(amount) {
            return Err(AccountError::insufficient_balance(self.balance, amount));
        }

        let today = self.clock.today();
        let remaining = self.remaining_daily_limit(today);
        if amount > remaining {
            return Err(AccountError::daily_limit_exceeded(
                self.limits.daily_withdrawal_limit,
                remaining,
            ));
        }

        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow("withdrawal"))?;

        self.balance = new_balance;
        self.movements.push(Movement::withdrawal(today, amount));

        Ok(())
    }

    /// Sum of all withdrawals recorded on `date`
    ///
    /// Saturates at the `Decimal` bounds instead of overflowing, which only a
    /// history built with [`Account::from_movements`] can reach.
    pub fn withdrawn_amount_on(&self, date: NaiveDate) -> Decimal {
        self.movements
            .iter()
            .filter(|m| m.is_withdrawal() && m.was_made_on(date))
            .fold(Decimal::ZERO, |total, m| total.saturating_add(m.amount()))
    }

    /// Withdrawal allowance left for `date`
    ///
    /// Not clamped to zero: a history built with [`Account::from_movements`]
    /// can make this negative. Saturates at the `Decimal` bounds.
    pub fn remaining_daily_limit(&self, date: NaiveDate) -> Decimal {
        self.limits
            .daily_withdrawal_limit
            .saturating_sub(self.withdrawn_amount_on(date))
    }

    pub fn is_valid_amount(&self, amount: Decimal) -> bool {
        amount > Decimal::ZERO
    }

    pub fn has_reached_max_deposits(&self) -> bool {
        self.deposit_count() >= self.limits.max_deposits
    }

    /// Whether withdrawing `amount` would leave a strictly positive balance
    pub fn can_withdraw(&self, amount: Decimal) -> bool {
        self.balance
            .checked_sub(amount)
            .is_some_and(|remaining| remaining > Decimal::ZERO)
    }
}
