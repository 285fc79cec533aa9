/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Particle in a one-dimensional infinite potential well
//!
//! Eigenfunctions φ_p(x) = √(2/L) sin(pπx/L) on [0, L] and energies
//! ε_p = h²p²/(8mL²).

use crate::utils::constants::{ELECTRON_MASS, PLANCK};
use crate::utils::{angstrom_to_meter, joule_to_ev};
use crate::wavefunction::{Result, WavefunctionError};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Check that the well quantum number is at least 1
pub fn check_quantum_number(p: u32) -> Result<()> {
    if p < 1 {
        return Err(WavefunctionError::quantum_number("p", p as i64, "[1, +inf)"));
    }
    Ok(())
}

fn check_length(length: f64) -> Result<()> {
    if !(length.is_finite() && length > 0.0) {
        return Err(WavefunctionError::InvalidParameter(format!(
            "well length must be positive, got L = {}",
            length
        )));
    }
    Ok(())
}

/// Wavefunction φ_p(x), zero outside [0, L]
///
/// Assumes `p ≥ 1` and `length > 0`; use [`InfiniteWell`] for checked access.
pub fn phi(x: f64, p: u32, length: f64) -> f64 {
    if !(0.0..=length).contains(&x) {
        return 0.0;
    }
    (2.0 / length).sqrt() * (p as f64 * PI * x / length).sin()
}

/// Energy ε_p in eV
///
/// # Arguments
///
/// * `p` - Quantum number, at least 1
/// * `mass` - Particle mass in kg
/// * `length` - Width of the well in metres
pub fn epsilon(p: u32, mass: f64, length: f64) -> Result<f64> {
    check_quantum_number(p)?;
    check_length(length)?;
    if !(mass.is_finite() && mass > 0.0) {
        return Err(WavefunctionError::InvalidParameter(format!(
            "particle mass must be positive, got m = {}",
            mass
        )));
    }

    let p = p as f64;
    Ok(joule_to_ev(
        PLANCK * PLANCK * p * p / (8.0 * mass * length * length),
    ))
}

/// An infinite well of width `length` (Angstroms)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InfiniteWell {
    length: f64,
}

impl InfiniteWell {
    /// Create a well of the given width in Angstroms
    pub fn new(length: f64) -> Result<Self> {
        check_length(length)?;
        Ok(Self { length })
    }

    /// Width of the well in Angstroms
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Largest value of φ_p² over the well, the same for every p
    pub fn density_bound(&self) -> f64 {
        2.0 / self.length
    }

    /// φ_p(x)
    pub fn wavefunction(&self, x: f64, p: u32) -> Result<f64> {
        check_quantum_number(p)?;
        Ok(phi(x, p, self.length))
    }

    /// Probability density φ_p(x)²
    pub fn density(&self, x: f64, p: u32) -> Result<f64> {
        let value = self.wavefunction(x, p)?;
        Ok(value * value)
    }

    /// φ_p on every point of `x`
    pub fn wavefunction_array(&self, x: &Array1<f64>, p: u32) -> Result<Array1<f64>> {
        check_quantum_number(p)?;
        Ok(x.mapv(|xi| phi(xi, p, self.length)))
    }

    /// Energy of an electron in state `p`, in eV
    pub fn energy_ev(&self, p: u32) -> Result<f64> {
        epsilon(p, ELECTRON_MASS, angstrom_to_meter(self.length))
    }

    /// Interior nodes x = iL/p, i = 1..p-1
    pub fn nodes(&self, p: u32) -> Result<Vec<f64>> {
        check_quantum_number(p)?;
        Ok((1..p)
            .map(|i| i as f64 * self.length / p as f64)
            .collect())
    }

    /// Cumulative distribution of φ_p², used to check samples
    pub fn cdf(&self, x: f64, p: u32) -> Result<f64> {
        check_quantum_number(p)?;
        let x = x.clamp(0.0, self.length);
        let k = 2.0 * p as f64 * PI;
        Ok(x / self.length - (k * x / self.length).sin() / k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_phi() {
        assert_relative_eq!(phi(0.5, 1, 1.0), 2f64.sqrt(), epsilon = 1e-12);
        assert!(phi(0.0, 3, 2.0).abs() < 1e-12);
        assert_eq!(phi(-0.1, 1, 1.0), 0.0);
        assert_eq!(phi(1.5, 1, 1.0), 0.0);
    }

    #[test]
    fn test_invalid_quantum_number() {
        let well = InfiniteWell::new(1.0).unwrap();
        assert!(matches!(
            well.wavefunction(0.5, 0),
            Err(WavefunctionError::InvalidQuantumNumber { name: "p", value: 0, .. })
        ));
        assert!(epsilon(0, ELECTRON_MASS, 1e-10).is_err());
    }

    #[test]
    fn test_invalid_length() {
        assert!(InfiniteWell::new(0.0).is_err());
        assert!(InfiniteWell::new(-2.0).is_err());
    }

    #[test]
    fn test_energy_scaling() {
        let well = InfiniteWell::new(1.0).unwrap();
        let e1 = well.energy_ev(1).unwrap();
        // electron in a 1 Å box: about 37.6 eV
        assert_relative_eq!(e1, 37.6, max_relative = 1e-2);
        assert_relative_eq!(well.energy_ev(3).unwrap(), 9.0 * e1, max_relative = 1e-12);
    }

    #[test]
    fn test_nodes() {
        let well = InfiniteWell::new(2.0).unwrap();
        assert!(well.nodes(1).unwrap().is_empty());
        let nodes = well.nodes(4).unwrap();
        assert_eq!(nodes.len(), 3);
        for x in nodes {
            assert!(well.wavefunction(x, 4).unwrap().abs() < 1e-12);
        }
    }

    #[test]
    fn test_cdf_bounds() {
        let well = InfiniteWell::new(3.0).unwrap();
        assert_relative_eq!(well.cdf(0.0, 2).unwrap(), 0.0);
        assert_relative_eq!(well.cdf(3.0, 2).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(well.cdf(1.5, 2).unwrap(), 0.5, epsilon = 1e-12);
    }
}
