//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over operation records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! ```no_run
//! use rust_wallet_engine::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("operations.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Applying operation: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record parsing errors are yielded as Err variants in the iterator
//! - Line numbers are included in error messages for debugging

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{OperationRecord, ReplayError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Synchronous CSV reader
///
/// Reads one record at a time; the file is never loaded whole.
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl SyncReader {
    /// Open a CSV file for streaming iteration
    ///
    /// The CSV reader trims whitespace from all fields and allows a missing
    /// trailing amount column, which is then reported per record.
    ///
    /// # Errors
    ///
    /// * `ReplayError::FileNotFound` if the path does not exist
    /// * `ReplayError::IoError` for any other open failure
    pub fn new(path: &Path) -> Result<Self, ReplayError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ReplayError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ReplayError::from(e),
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<OperationRecord, String>;

    /// Get the next operation record from the CSV file
    ///
    /// Line numbers in error messages count the header as line 1.
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();

        let result = deserializer.next()?;
        self.line_num += 1;

        match result {
            Ok(csv_record) => Some(
                convert_csv_record(csv_record)
                    .map_err(|e| format!("Line {}: {}", self.line_num + 1, e)),
            ),
            Err(e) => Some(Err(format!(
                "Line {}: CSV parse error: {}",
                self.line_num + 1,
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MovementKind;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
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
    fn test_sync_reader_new_fails_on_missing_file() {
        let result = SyncReader::new(Path::new("nonexistent.csv"));

        assert_eq!(
            result.unwrap_err(),
            ReplayError::FileNotFound {
                path: "nonexistent.csv".to_string()
            }
        );
    }

    #[test]
    fn test_sync_reader_iterates_records_in_order() {
        let file = create_temp_csv(
            "type,date,amount\n\
             deposit,2024-01-15,100.0\n\
             withdrawal,2024-01-16,25.5\n",
        );

        let records: Vec<_> = SyncReader::new(file.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(
            records,
            vec![
                OperationRecord {
                    kind: MovementKind::Deposit,
                    date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                    amount: Decimal::new(1000, 1),
                },
                OperationRecord {
                    kind: MovementKind::Withdrawal,
                    date: NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
                    amount: Decimal::new(255, 1),
                },
            ]
        );
    }

    #[test]
    fn test_sync_reader_trims_whitespace() {
        let file = create_temp_csv("type, date, amount\n deposit , 2024-01-15 , 10 \n");

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 1);
        assert!(records[0].is_ok());
    }

    #[test]
    fn test_sync_reader_reports_line_numbers_and_continues() {
        let file = create_temp_csv(
            "type,date,amount\n\
             deposit,2024-01-15,100.0\n\
             deposit,not-a-date,5\n\
             withdrawal,2024-01-15,10\n",
        );

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        let error = records[1].as_ref().unwrap_err();
        assert!(error.starts_with("Line 3:"), "unexpected error: {}", error);
        assert!(records[2].is_ok());
    }

    #[test]
    fn test_sync_reader_missing_amount_column() {
        let file = create_temp_csv("type,date,amount\nwithdrawal,2024-01-15\n");

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 1);
        assert!(records[0].as_ref().unwrap_err().contains("requires an amount"));
    }

    #[test]
    fn test_sync_reader_empty_file_yields_nothing() {
        let file = create_temp_csv("type,date,amount\n");

        let reader = SyncReader::new(file.path()).unwrap();

        assert_eq!(reader.count(), 0);
    }
}
