use crate::core::limits::{AccountLimits, DEFAULT_DAILY_WITHDRAWAL_LIMIT, DEFAULT_MAX_DEPOSITS};
use crate::replay::ReplayOptions;
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Replay deposits and withdrawals against a rule-checked account
#[derive(Parser, Debug)]
#[command(name = "rust-wallet-engine")]
#[command(about = "Replay deposits and withdrawals against a rule-checked account", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing operation records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file (type,date,amount)")]
    pub input_file: PathBuf,

    /// Balance the account starts with
    #[arg(
        long = "initial-balance",
        value_name = "AMOUNT",
        default_value = "0",
        help = "Starting balance of the account"
    )]
    pub initial_balance: Decimal,

    /// Maximum number of deposits the account accepts
    #[arg(
        long = "max-deposits",
        value_name = "COUNT",
        help = "Maximum number of deposits (default: 3)"
    )]
    pub max_deposits: Option<usize>,

    /// Maximum cumulative withdrawal amount per calendar date
    #[arg(
        long = "daily-limit",
        value_name = "AMOUNT",
        help = "Maximum withdrawn per day (default: 1000)"
    )]
    pub daily_limit: Option<Decimal>,

    /// Report written after replaying all operations
    #[arg(
        long = "report",
        value_name = "REPORT",
        default_value = "summary",
        help = "Report: 'summary' for the final balance or 'movements' for the movement log"
    )]
    pub report: ReportFormat,
}

/// Available output reports
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Summary,
    Movements,
}

impl CliArgs {
    /// Build the account limits from CLI arguments
    ///
    /// Missing values use the defaults. Invalid values (zero deposits, a
    /// non-positive limit) also fall back to the defaults.
    pub fn to_limits(&self) -> AccountLimits {
        if self.max_deposits.is_some() || self.daily_limit.is_some() {
            AccountLimits::new(
                self.max_deposits.unwrap_or(DEFAULT_MAX_DEPOSITS),
                self.daily_limit.unwrap_or(DEFAULT_DAILY_WITHDRAWAL_LIMIT),
            )
        } else {
            AccountLimits::default()
        }
    }

    /// Build the full replay options from CLI arguments
    pub fn to_replay_options(&self) -> ReplayOptions {
        ReplayOptions {
            initial_balance: self.initial_balance,
            limits: self.to_limits(),
            report: self.report,
        }
    }
}
