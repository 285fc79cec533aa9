/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Utility functions shared by the wavefunction, sampling and integration modules
//!
//! This module provides the physical constants, unit conversions and the small
//! numerical toolbox (uniform grids, trapezoidal quadrature) used throughout the crate.

pub mod constants;
pub mod conversions;
pub mod errors;
pub mod math;

pub use conversions::{angstrom_to_meter, joule_to_ev};
pub use errors::{Result, UtilsError};
pub use math::{integrate_trapezoid, linspace, trapezoid};
