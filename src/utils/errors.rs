/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the utils module

use thiserror::Error;

/// Errors that can occur in the utils module
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    /// Sample and abscissa arrays do not line up
    #[error("Length mismatch: {values} values for {abscissae} abscissae")]
    LengthMismatch { values: usize, abscissae: usize },

    /// Math-related errors
    #[error("Math error: {0}")]
    Math(String),
}

/// A specialized Result type for utils operations
pub type Result<T> = std::result::Result<T, UtilsError>;
