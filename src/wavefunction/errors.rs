/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for wavefunction evaluation

use thiserror::Error;

/// Result type for wavefunction operations
pub type Result<T> = std::result::Result<T, WavefunctionError>;

/// Error type for wavefunction-related operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WavefunctionError {
    /// A quantum number outside the tabulated closed forms
    #[error("Invalid quantum number: {name} = {value}, valid range is {valid}")]
    InvalidQuantumNumber {
        /// Which quantum number ("n", "l", "m_l" or "p")
        name: &'static str,
        /// The offending value
        value: i64,
        /// Human-readable description of the valid range
        valid: String,
    },

    /// An orbital name that is not in the table
    #[error("Unknown orbital '{0}', expected one of 1s, 2s, 3s, 2pz, 3pz, 3dz2, 4fz3")]
    UnknownOrbital(String),

    /// A physical parameter (Z, a0, box length, ...) that is not usable
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl WavefunctionError {
    pub(crate) fn quantum_number(name: &'static str, value: i64, valid: impl Into<String>) -> Self {
        Self::InvalidQuantumNumber {
            name,
            value,
            valid: valid.into(),
        }
    }
}
