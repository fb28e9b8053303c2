//! Replay of an operations CSV against a single account
//!
//! Orchestrates the flow between the `SyncReader` (CSV input), the
//! `LedgerEngine` (account rules) and the csv_format writers (report output).
//!
//! Rejected operations and malformed rows are logged and skipped; only
//! failures to open the input or write the report abort the replay.

use crate::cli::ReportFormat;
use crate::core::{AccountLimits, LedgerEngine};
use crate::io::csv_format::{write_movements_csv, write_summary_csv};
use crate::io::sync_reader::SyncReader;
use crate::types::ReplayError;
use rust_decimal::Decimal;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// Settings for a replay run
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayOptions {
    /// Balance the account starts with
    pub initial_balance: Decimal,

    /// Limits the account enforces
    pub limits: AccountLimits,

    /// Report written once all records are applied
    pub report: ReportFormat,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        ReplayOptions {
            initial_balance: Decimal::ZERO,
            limits: AccountLimits::default(),
            report: ReportFormat::Summary,
        }
    }
}

/// Counters describing a finished replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayOutcome {
    /// Operations the account accepted
    pub accepted: usize,

    /// Operations the account rejected
    pub rejected: usize,

    /// Rows that could not be parsed
    pub malformed: usize,
}

/// Apply every operation in `input_path` and write the report to `output`
///
/// # Errors
///
/// Returns an error if the input cannot be opened or the report cannot be
/// written. Rejections and malformed rows are counted, not returned.
///
/// # Examples
///
/// ```no_run
/// use rust_wallet_engine::replay::{replay, ReplayOptions};
/// use std::path::Path;
///
/// let mut output = std::io::stdout();
/// let outcome = replay(Path::new("operations.csv"), &ReplayOptions::default(), &mut output)
///     .expect("Replay failed");
/// println!("{} accepted, {} rejected", outcome.accepted, outcome.rejected);
/// ```
pub fn replay(
    input_path: &Path,
    options: &ReplayOptions,
    output: &mut dyn Write,
) -> Result<ReplayOutcome, ReplayError> {
    let mut engine = LedgerEngine::new(options.initial_balance, options.limits);
    let reader = SyncReader::new(input_path)?;
    let mut malformed = 0;

    info!(input = %input_path.display(), "replaying operations");

    for result in reader {
        match result {
            Ok(record) => {
                let kind = record.kind.as_str();
                let date = record.date;
                let amount = record.amount;

                match engine.process(record) {
                    Ok(()) => debug!(kind, %date, %amount, "operation applied"),
                    Err(e) => warn!(kind, %date, %amount, error = %e, "operation rejected"),
                }
            }
            Err(e) => {
                malformed += 1;
                warn!(error = %e, "skipping malformed row");
            }
        }
    }

    let account = engine.account();
    match options.report {
        ReportFormat::Summary => write_summary_csv(account, output)?,
        ReportFormat::Movements => write_movements_csv(account.movements(), output)?,
    }

    let outcome = ReplayOutcome {
        accepted: engine.accepted(),
        rejected: engine.rejected(),
        malformed,
    };
    info!(
        accepted = outcome.accepted,
        rejected = outcome.rejected,
        malformed = outcome.malformed,
        balance = %account.balance(),
        "replay finished"
    );

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_replay_writes_summary() {
        let file = create_temp_csv(
            "type,date,amount\n\
             deposit,2024-01-15,100\n\
             deposit,2024-01-15,200\n\
             withdrawal,2024-01-16,50\n",
        );
        let mut output = Vec::new();

        let outcome = replay(file.path(), &ReplayOptions::default(), &mut output).unwrap();

        assert_eq!(
            outcome,
            ReplayOutcome {
                accepted: 3,
                rejected: 0,
                malformed: 0
            }
        );
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "balance,movements,deposits,withdrawals\n250.00,3,2,1\n"
        );
    }

    #[test]
    fn test_replay_writes_movements() {
        let file = create_temp_csv(
            "type,date,amount\n\
             deposit,2024-01-15,100\n\
             withdrawal,2024-01-15,100\n",
        );
        let options = ReplayOptions {
            report: ReportFormat::Movements,
            ..ReplayOptions::default()
        };
        let mut output = Vec::new();

        let outcome = replay(file.path(), &options, &mut output).unwrap();

        assert_eq!(outcome.rejected, 1);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "date,type,amount\n2024-01-15,deposit,100.00\n"
        );
    }

    #[test]
    fn test_replay_continues_past_rejections_and_malformed_rows() {
        let file = create_temp_csv(
            "type,date,amount\n\
             deposit,2024-01-15,-5\n\
             refund,2024-01-15,5\n\
             deposit,2024-01-15,5\n",
        );
        let options = ReplayOptions {
            initial_balance: Decimal::new(10, 0),
            ..ReplayOptions::default()
        };
        let mut output = Vec::new();

        let outcome = replay(file.path(), &options, &mut output).unwrap();

        assert_eq!(
            outcome,
            ReplayOutcome {
                accepted: 1,
                rejected: 1,
                malformed: 1
            }
        );
        assert!(String::from_utf8(output).unwrap().contains("15.00,1,1,0"));
    }

    #[test]
    fn test_replay_missing_file() {
        let mut output = Vec::new();

        let result = replay(
            Path::new("does-not-exist.csv"),
            &ReplayOptions::default(),
            &mut output,
        );

        assert!(matches!(result, Err(ReplayError::FileNotFound { .. })));
        assert!(output.is_empty());
    }
}
