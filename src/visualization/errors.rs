/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for plot series generation

use thiserror::Error;

/// Result type for visualization helpers
pub type Result<T> = std::result::Result<T, VisualizationError>;

/// Error type for visualization helpers
#[derive(Error, Debug)]
pub enum VisualizationError {
    /// Grid size, step or range that cannot be used
    #[error("Invalid plot parameter: {0}")]
    InvalidParameter(String),

    /// Propagation of error from the wavefunction module
    #[error("Wavefunction error: {0}")]
    Wavefunction(#[from] crate::wavefunction::WavefunctionError),

    /// Propagation of error from the sampling module
    #[error("Sampling error: {0}")]
    Sampling(#[from] crate::sampling::SamplingError),
}
