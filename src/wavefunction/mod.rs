/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Closed-form wavefunctions of hydrogen-like atoms
//!
//! This module provides the radial parts R_{n,l}(r), the real angular parts
//! derived from spherical harmonics, and the seven tabulated atomic orbitals
//! built from their products. All evaluators are pure functions; physical
//! parameters are passed explicitly through [`HydrogenicParams`].

pub mod angular;
mod errors;
pub mod harmonics;
pub mod orbital;
mod params;
pub mod radial;

pub use angular::{angular, AngularKind, L_MAX};
pub use errors::{Result, WavefunctionError};
pub use harmonics::{complex_harmonic, real_from_complex};
pub use orbital::{evaluate_orbital, nodal_geometry, NodalGeometry, Orbital};
pub use params::HydrogenicParams;
pub use radial::{radial, RadialKind, N_MAX};

use serde::{Deserialize, Serialize};

/// Quantum numbers (n, l, m_l) of a hydrogen-like state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantumNumbers {
    /// Principal quantum number
    pub n: u32,
    /// Angular momentum quantum number
    pub l: u32,
    /// Magnetic quantum number
    pub m_l: i32,
}

impl QuantumNumbers {
    /// Validate (n, l, m_l) against the general hydrogenic rules and the tabulated range
    pub fn new(n: u32, l: u32, m_l: i32) -> Result<Self> {
        if !(1..=N_MAX).contains(&n) {
            return Err(WavefunctionError::quantum_number(
                "n",
                n as i64,
                format!("[1, {}]", N_MAX),
            ));
        }
        let l_max = (n - 1).min(L_MAX);
        if l > l_max {
            return Err(WavefunctionError::quantum_number(
                "l",
                l as i64,
                format!("[0, {}]", l_max),
            ));
        }
        if m_l.unsigned_abs() > l {
            return Err(WavefunctionError::quantum_number(
                "m_l",
                m_l as i64,
                format!("[-{}, {}]", l, l),
            ));
        }

        Ok(Self { n, l, m_l })
    }

    /// Tabulated radial function for (n, l)
    pub fn radial_kind(&self) -> Result<RadialKind> {
        RadialKind::from_quantum_numbers(self.n, self.l)
    }

    /// Tabulated real angular function for (l, m_l)
    pub fn angular_kind(&self) -> Result<AngularKind> {
        AngularKind::from_quantum_numbers(self.l, self.m_l)
    }

    /// Evaluate R_{n,l}(r) · Y(θ, φ) for any tabulated radial/angular pair
    ///
    /// Unlike [`Orbital`], this covers combinations without a named orbital,
    /// such as 3dxz.
    pub fn evaluate(&self, r: f64, theta: f64, phi: f64, params: &HydrogenicParams) -> Result<f64> {
        let radial = self.radial_kind()?;
        let angular = self.angular_kind()?;
        Ok(radial.evaluate(r, params) * angular.evaluate(theta, phi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantum_numbers() {
        assert!(QuantumNumbers::new(1, 0, 0).is_ok());
        assert!(QuantumNumbers::new(2, 1, -1).is_ok());
        assert!(QuantumNumbers::new(4, 3, 3).is_ok());

        assert!(QuantumNumbers::new(0, 0, 0).is_err());
        assert!(QuantumNumbers::new(5, 0, 0).is_err());
        assert!(QuantumNumbers::new(2, 2, 0).is_err());
        assert!(QuantumNumbers::new(2, 1, 2).is_err());
    }

    #[test]
    fn test_untabulated_combination() {
        let params = HydrogenicParams::default();
        let state = QuantumNumbers::new(3, 2, 2).unwrap();
        assert!(state.evaluate(1.0, 0.5, 0.0, &params).is_err());

        let state = QuantumNumbers::new(3, 2, 1).unwrap();
        assert!(state.evaluate(1.0, 0.5, 0.0, &params).is_ok());
    }
}
