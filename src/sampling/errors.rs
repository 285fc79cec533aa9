/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for rejection sampling

use thiserror::Error;

/// Result type for sampling operations
pub type Result<T> = std::result::Result<T, SamplingError>;

/// Error type for sampling operations
#[derive(Error, Debug)]
pub enum SamplingError {
    /// The proposal budget ran out before enough points were accepted
    #[error("Sampling gave up after {proposals} proposals with {accepted} of {requested} points accepted")]
    Timeout {
        accepted: usize,
        requested: usize,
        proposals: usize,
    },

    /// Sampling domain or configuration that cannot be used
    #[error("Invalid sampling parameter: {0}")]
    InvalidParameter(String),

    /// Accepted points could not be packed into an array
    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// Propagation of error from the wavefunction module
    #[error("Wavefunction error: {0}")]
    Wavefunction(#[from] crate::wavefunction::WavefunctionError),
}
