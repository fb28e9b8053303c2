//! Business rule limits for an account

use rust_decimal::Decimal;

/// Default number of deposits an account accepts
pub const DEFAULT_MAX_DEPOSITS: usize = 3;

/// Default withdrawal allowance per calendar date
pub const DEFAULT_DAILY_WITHDRAWAL_LIMIT: Decimal = Decimal::ONE_THOUSAND;

/// Limits enforced by [`Account`](crate::core::Account)
///
/// # Examples
///
/// ```
/// use rust_wallet_engine::core::AccountLimits;
/// use rust_decimal::Decimal;
///
/// let limits = AccountLimits::default();
/// assert_eq!(limits.max_deposits, 3);
/// assert_eq!(limits.daily_withdrawal_limit, Decimal::new(1000, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountLimits {
    /// Deposits accepted before `TooManyDeposits` is returned
    ///
    /// Counted over the whole movement history, not per date.
    pub max_deposits: usize,

    /// Maximum cumulative withdrawal amount per calendar date
    pub daily_withdrawal_limit: Decimal,
}

impl AccountLimits {
    /// Create limits, falling back to the defaults for a zero deposit count
    /// or a non-positive withdrawal limit
    pub fn new(max_deposits: usize, daily_withdrawal_limit: Decimal) -> Self {
        let max_deposits = if max_deposits == 0 {
            DEFAULT_MAX_DEPOSITS
        } else {
            max_deposits
        };
        let daily_withdrawal_limit = if daily_withdrawal_limit <= Decimal::ZERO {
            DEFAULT_DAILY_WITHDRAWAL_LIMIT
        } else {
            daily_withdrawal_limit
        };

        AccountLimits {
            max_deposits,
            daily_withdrawal_limit,
        }
    }
}

impl Default for AccountLimits {
    fn default() -> Self {
        AccountLimits {
            max_deposits: DEFAULT_MAX_DEPOSITS,
            daily_withdrawal_limit: DEFAULT_DAILY_WITHDRAWAL_LIMIT,
        }
    }
}
