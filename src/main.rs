//! Rust Wallet Engine CLI
//!
//! Command-line interface for replaying dated deposits and withdrawals
//! against a single rule-checked account.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- operations.csv > summary.csv
//! cargo run -- --initial-balance 2000 operations.csv
//! cargo run -- --report movements --max-deposits 5 --daily-limit 500 operations.csv
//! ```
//!
//! The report goes to stdout. Rejected operations are logged to stderr;
//! set `RUST_LOG=debug` to also see accepted ones.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, file not readable, report not writable)

use rust_wallet_engine::cli;
use rust_wallet_engine::replay::replay;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();
    let options = args.to_replay_options();

    let mut output = std::io::stdout();
    if let Err(e) = replay(&args.input_file, &options, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
