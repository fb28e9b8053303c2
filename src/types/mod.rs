//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `movement`: Movement records and requested operations
//! - `error`: Error types for account rules and the replay shell

pub mod error;
pub mod movement;

pub use error::{AccountError, ReplayError};
pub use movement::{Movement, MovementKind, OperationRecord};
