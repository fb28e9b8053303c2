//! Rust Wallet Engine Library
//! # Overview
//!
//! This library models a single account that enforces deposit and withdrawal
//! rules, plus a CSV replay shell that applies a file of dated operations to it.
//!
//! # Architecture
//!
//! - [`types`] - Movement records, operation records and error types
//! - [`core`] - Business logic components:
//!   - [`core::account`] - Account state and rule validation
//!   - [`core::clock`] - Date providers injected into the account
//!   - [`core::limits`] - Configurable business limits
//!   - [`core::engine`] - Applies dated operations to an account
//! - [`io`] - CSV input parsing and report output
//! - [`replay`] - Reader, engine and report wired together
//! - [`cli`] - CLI arguments parsing
//!
//! # Rules
//!
//! - Amounts must be strictly positive
//! - At most `max_deposits` deposits (3 by default) are accepted over the
//!   account's whole history
//! - A withdrawal must leave a strictly positive balance
//! - Withdrawals on one calendar date may not exceed `daily_withdrawal_limit`
//!   (1000 by default)
//!
//! Rejected operations leave the account unchanged.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod replay;
pub mod types;

pub use core::{Account, AccountLimits, Clock, FixedClock, LedgerEngine, SystemClock};
pub use replay::{replay, ReplayOptions, ReplayOutcome};
pub use types::{AccountError, Movement, MovementKind, OperationRecord, ReplayError};
