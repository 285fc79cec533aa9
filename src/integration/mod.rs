/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Integration of the radial probability density
//!
//! The probability of finding the electron in the spherical shell [r1, r2] is
//! ∫ r² R(r)² dr, computed with the composite trapezoidal rule on a uniform grid.

mod errors;

pub use errors::{IntegrationError, Result};

use crate::utils::{integrate_trapezoid, linspace, trapezoid};
use crate::wavefunction::{HydrogenicParams, RadialKind};
use log::debug;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Grid points used when the caller has no preference
pub const DEFAULT_NPTS: usize = 400;

/// Probability of a radial shell together with the density curve it was computed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationResult {
    /// Inner radius
    pub r1: f64,
    /// Outer radius
    pub r2: f64,
    /// ∫ r² R² dr over [r1, r2]
    pub probability: f64,
    /// Uniform grid on [r1, r2]
    pub radii: Array1<f64>,
    /// r² R(r)² on the grid
    pub density: Array1<f64>,
}

fn check_bounds(r1: f64, r2: f64, npts: usize) -> Result<()> {
    if !(r1.is_finite() && r2.is_finite() && r1 >= 0.0 && r1 < r2) {
        return Err(IntegrationError::InvalidBounds { r1, r2 });
    }
    if npts < 2 {
        return Err(IntegrationError::InvalidResolution(npts));
    }
    Ok(())
}

/// Integrate r² R(r)² over [r1, r2] for an arbitrary radial function
///
/// # Arguments
///
/// * `radial_fn` - R(r)
/// * `r1` - Inner radius, non-negative
/// * `r2` - Outer radius, larger than `r1`
/// * `npts` - Number of grid points, at least 2
pub fn integrate_radial_density<F>(radial_fn: F, r1: f64, r2: f64, npts: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    check_bounds(r1, r2, npts)?;

    let density = |r: f64| {
        let value = radial_fn(r);
        r * r * value * value
    };
    Ok(integrate_trapezoid(density, r1, r2, npts - 1)?)
}

/// Probability of finding the electron between r1 and r2 for a tabulated radial function
pub fn integrate_density(
    kind: RadialKind,
    r1: f64,
    r2: f64,
    npts: usize,
    params: &HydrogenicParams,
) -> Result<IntegrationResult> {
    check_bounds(r1, r2, npts)?;
    params.validate()?;

    let radii = linspace(r1, r2, npts);
    let density = radii.mapv(|r| kind.density(r, params));
    let probability = trapezoid(density.view(), radii.view())?;

    debug!(
        "P({} in [{:.3}, {:.3}]) = {:.6} with {} points",
        kind, r1, r2, probability, npts
    );

    Ok(IntegrationResult {
        r1,
        r2,
        probability,
        radii,
        density,
    })
}
