/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for radial integration

use thiserror::Error;

/// Result type for integration operations
pub type Result<T> = std::result::Result<T, IntegrationError>;

/// Error type for integration operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntegrationError {
    /// Bounds that are not 0 ≤ r1 < r2 < ∞
    #[error("Invalid integration bounds [{r1}, {r2}]: expected 0 <= r1 < r2")]
    InvalidBounds { r1: f64, r2: f64 },

    /// Fewer than two grid points
    #[error("Invalid resolution: {0} points, at least 2 are needed")]
    InvalidResolution(usize),

    /// Propagation of error from the wavefunction module
    #[error("Wavefunction error: {0}")]
    Wavefunction(#[from] crate::wavefunction::WavefunctionError),

    /// Propagation of error from the utils module
    #[error("Utils error: {0}")]
    Utils(#[from] crate::utils::UtilsError),
}
