//! Error types for the orgperf engine.
//!
//! None of these are raised while profiling a program: malformed lines are
//! dropped silently. They only surface when a caller explicitly asks for a
//! validated value (an [`InstructionWord`](crate::InstructionWord) or an
//! [`Organization`](crate::Organization) parsed from text).

use thiserror::Error;

/// Errors produced when validating a single instruction word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    /// The text is not exactly 32 characters long.
    #[error("Instruction word must be 32 bits wide, got {0} characters")]
    InvalidLength(usize),

    /// The text contains something other than `0` or `1`.
    #[error("Invalid bit {found:?} at position {position}")]
    InvalidBit { position: usize, found: char },
}

/// Errors produced at the organization configuration boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Empty organization entry in {0:?}")]
    EmptyEntry(String),

    #[error("Expected `key=value`, got {0:?}")]
    MissingValue(String),

    #[error("Unknown organization key: {0}")]
    UnknownKey(String),

    #[error("Invalid number for {key}: {value:?}")]
    InvalidNumber { key: String, value: String },

    #[error("{key} must not be negative, got {value}")]
    Negative { key: String, value: String },

    #[error("Clock period must be a finite number, got {0}")]
    NonFiniteClock(f64),
}

/// Result type for configuration parsing.
pub type Result<T> = std::result::Result<T, ConfigError>;
