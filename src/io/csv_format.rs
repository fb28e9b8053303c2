//! CSV format handling for operation records and account reports
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Summary and movement report serialization
//!
//! Input columns are `type,date,amount`, for example:
//!
//! ```text
//! type,date,amount
//! deposit,2024-01-15,100.00
//! withdrawal,2024-01-15,40
//! ```

use crate::core::{Account, Clock};
use crate::types::{Movement, MovementKind, OperationRecord, ReplayError};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Date format accepted in the `date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// CSV record structure for deserialization
///
/// Fields are kept as strings so that a bad value produces a precise
/// conversion error instead of a generic deserialization failure.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub op_type: String,
    pub date: String,
    pub amount: Option<String>,
}

/// Convert a CsvRecord to an OperationRecord
///
/// This function:
/// - Parses the operation type (case-insensitive)
/// - Parses the ISO date
/// - Parses the amount, which is required
///
/// Zero and negative amounts are accepted here; the account rejects them.
///
/// # Returns
///
/// * `Ok(OperationRecord)` - Successfully converted record
/// * `Err(String)` - Error message describing the conversion failure
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<OperationRecord, String> {
    let kind = match csv_record.op_type.to_lowercase().as_str() {
        "deposit" => MovementKind::Deposit,
        "withdrawal" => MovementKind::Withdrawal,
        _ => {
            return Err(format!("Invalid operation type: '{}'", csv_record.op_type))
        }
    };

    let date = NaiveDate::parse_from_str(csv_record.date.trim(), DATE_FORMAT)
        .map_err(|e| format!("Invalid date '{}': {}", csv_record.date, e))?;

    let amount = match csv_record.amount {
        Some(amount_str) if !amount_str.trim().is_empty() => {
            match Decimal::from_str(amount_str.trim()) {
                Ok(decimal) => decimal,
                Err(_) => {
                    return Err(format!(
                        "Invalid amount '{}' for {} on {}",
                        amount_str,
                        kind.as_str(),
                        date
                    ))
                }
            }
        }
        _ => return Err(format!("{} on {} requires an amount", kind.as_str(), date)),
    };

    Ok(OperationRecord { kind, date, amount })
}

/// Write the account summary as a single CSV row
///
/// Columns: `balance,movements,deposits,withdrawals`. The balance is
/// rendered with two decimal places.
pub fn write_summary_csv<C: Clock>(
    account: &Account<C>,
    output: &mut dyn Write,
) -> Result<(), ReplayError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["balance", "movements", "deposits", "withdrawals"])?;

    let deposits = account.deposit_count();
    writer.write_record(&[
        format!("{:.2}", account.balance()),
        account.movement_count().to_string(),
        deposits.to_string(),
        (account.movement_count() - deposits).to_string(),
    ])?;

    writer.flush()?;

    Ok(())
}

/// Write movements as CSV, one row per movement in insertion order
///
/// Columns: `date,type,amount`.
pub fn write_movements_csv(
    movements: &[Movement],
    output: &mut dyn Write,
) -> Result<(), ReplayError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["date", "type", "amount"])?;

    for movement in movements {
        writer.write_record(&[
            movement.date().format(DATE_FORMAT).to_string(),
            movement.kind().as_str().to_string(),
            format!("{:.2}", movement.amount()),
        ])?;
    }

    writer.flush()?;

    Ok(())
}
