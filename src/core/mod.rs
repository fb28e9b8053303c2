//! Core business logic module
//!
//! This module contains the account rules and the components around them:
//! - `traits` - The `Clock` abstraction the account reads the date from
//! - `clock` - System and fixed clock implementations
//! - `limits` - Configurable business limits
//! - `account` - Account state and rule validation
//! - `engine` - Applies dated operation records to an account

pub mod account;
pub mod clock;
pub mod engine;
pub mod limits;
pub mod traits;

pub use account::Account;
pub use clock::{FixedClock, SystemClock};
pub use engine::LedgerEngine;
pub use limits::AccountLimits;
pub use traits::Clock;
