/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Physical parameters of a hydrogen-like atom

use super::errors::{Result, WavefunctionError};
use crate::utils::constants::BOHR_RADIUS;
use serde::{Deserialize, Serialize};

/// Nuclear charge and length scale of a hydrogen-like atom
///
/// Radii passed to the evaluators are in the same unit as `a0`
/// (Angstroms with the default).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HydrogenicParams {
    /// Atomic number
    pub z: f64,
    /// Bohr radius
    pub a0: f64,
}

impl Default for HydrogenicParams {
    fn default() -> Self {
        Self {
            z: 1.0,
            a0: BOHR_RADIUS,
        }
    }
}

impl HydrogenicParams {
    /// Create parameters for atomic number `z` with the default Bohr radius
    pub fn with_z(z: f64) -> Self {
        Self {
            z,
            ..Self::default()
        }
    }

    /// Check that both parameters are positive and finite
    pub fn validate(&self) -> Result<()> {
        if !(self.z.is_finite() && self.z > 0.0) {
            return Err(WavefunctionError::InvalidParameter(format!(
                "atomic number must be positive, got Z = {}",
                self.z
            )));
        }
        if !(self.a0.is_finite() && self.a0 > 0.0) {
            return Err(WavefunctionError::InvalidParameter(format!(
                "Bohr radius must be positive, got a0 = {}",
                self.a0
            )));
        }
        Ok(())
    }

    /// Reduced radius ρ = Z·r/a0
    #[inline]
    pub fn rho(&self, r: f64) -> f64 {
        self.z * r / self.a0
    }

    /// Common prefactor (Z/a0)^{3/2}
    #[inline]
    pub fn prefactor(&self) -> f64 {
        (self.z / self.a0).powf(1.5)
    }
}
