/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Full atomic orbitals ψ(r, θ, φ) = R_{n,l}(r) · Y(θ, φ)
//!
//! The seven tabulated orbitals carry the static data needed to draw them:
//! a radius bounding the sampled cloud and the exact nodal geometry.

use super::angular::AngularKind;
use super::errors::{Result, WavefunctionError};
use super::params::HydrogenicParams;
use super::radial::RadialKind;
use ndarray::{Array1, Zip};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The tabulated atomic orbitals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orbital {
    #[serde(rename = "1s")]
    S1,
    #[serde(rename = "2s")]
    S2,
    #[serde(rename = "3s")]
    S3,
    #[serde(rename = "2pz")]
    Pz2,
    #[serde(rename = "3pz")]
    Pz3,
    #[serde(rename = "3dz2")]
    Dz2,
    #[serde(rename = "4fz3")]
    Fz3,
}

/// Nodal surfaces of an orbital as seen in the (x, z) plane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodalGeometry {
    /// Polar angles of the angular nodes (lines through the origin)
    pub angles: Vec<f64>,
    /// Radii of the radial nodes (circles)
    pub radii: Vec<f64>,
}

impl Orbital {
    /// All tabulated orbitals
    pub const ALL: [Orbital; 7] = [
        Orbital::S1,
        Orbital::S2,
        Orbital::S3,
        Orbital::Pz2,
        Orbital::Pz3,
        Orbital::Dz2,
        Orbital::Fz3,
    ];

    /// Radial factor
    pub fn radial(self) -> RadialKind {
        match self {
            Orbital::S1 => RadialKind::R1s,
            Orbital::S2 => RadialKind::R2s,
            Orbital::S3 => RadialKind::R3s,
            Orbital::Pz2 => RadialKind::R2p,
            Orbital::Pz3 => RadialKind::R3p,
            Orbital::Dz2 => RadialKind::R3d,
            Orbital::Fz3 => RadialKind::R4f,
        }
    }

    /// Angular factor
    pub fn angular(self) -> AngularKind {
        match self {
            Orbital::S1 | Orbital::S2 | Orbital::S3 => AngularKind::S,
            Orbital::Pz2 | Orbital::Pz3 => AngularKind::Pz,
            Orbital::Dz2 => AngularKind::Dz2,
            Orbital::Fz3 => AngularKind::Fz3,
        }
    }

    /// Look up the orbital with quantum numbers (n, l, m_l)
    pub fn from_quantum_numbers(n: u32, l: u32, m_l: i32) -> Result<Self> {
        let radial = RadialKind::from_quantum_numbers(n, l)?;
        let angular = AngularKind::from_quantum_numbers(l, m_l)?;

        Orbital::ALL
            .into_iter()
            .find(|orbital| orbital.radial() == radial && orbital.angular() == angular)
            .ok_or_else(|| {
                WavefunctionError::quantum_number(
                    "m_l",
                    m_l as i64,
                    "[0, 0] (only m_l = 0 orbitals are tabulated)",
                )
            })
    }

    /// Half-width in Angstroms of the square sampling domain
    pub fn rmax(self) -> f64 {
        match self {
            Orbital::S1 => 3.0,
            Orbital::S2 | Orbital::Pz2 => 10.0,
            Orbital::S3 | Orbital::Pz3 | Orbital::Dz2 | Orbital::Fz3 => 15.0,
        }
    }

    /// Polar angles where the angular factor vanishes
    pub fn nodal_angles(self) -> Vec<f64> {
        self.angular().nodal_angles()
    }

    /// Radii where the radial factor vanishes
    pub fn nodal_radii(self, params: &HydrogenicParams) -> Vec<f64> {
        self.radial().nodes(params)
    }

    /// Both kinds of nodes for the given atom
    pub fn nodal_geometry(self, params: &HydrogenicParams) -> NodalGeometry {
        NodalGeometry {
            angles: self.nodal_angles(),
            radii: self.nodal_radii(params),
        }
    }

    /// Evaluate ψ(r, θ, φ)
    pub fn evaluate(self, r: f64, theta: f64, phi: f64, params: &HydrogenicParams) -> f64 {
        self.radial().evaluate(r, params) * self.angular().evaluate(theta, phi)
    }

    /// Probability density |ψ|²
    pub fn density(self, r: f64, theta: f64, phi: f64, params: &HydrogenicParams) -> f64 {
        let psi = self.evaluate(r, theta, phi, params);
        psi * psi
    }

    /// Evaluate ψ on paired arrays of radii and polar angles at fixed φ
    pub fn evaluate_array(
        self,
        r: &Array1<f64>,
        theta: &Array1<f64>,
        phi: f64,
        params: &HydrogenicParams,
    ) -> Result<Array1<f64>> {
        if r.len() != theta.len() {
            return Err(WavefunctionError::InvalidParameter(format!(
                "{} radii for {} angles",
                r.len(),
                theta.len()
            )));
        }

        Ok(Zip::from(r)
            .and(theta)
            .map_collect(|&ri, &ti| self.evaluate(ri, ti, phi, params)))
    }

    /// Orbital name, e.g. "3dz2"
    pub fn name(self) -> &'static str {
        match self {
            Orbital::S1 => "1s",
            Orbital::S2 => "2s",
            Orbital::S3 => "3s",
            Orbital::Pz2 => "2pz",
            Orbital::Pz3 => "3pz",
            Orbital::Dz2 => "3dz2",
            Orbital::Fz3 => "4fz3",
        }
    }
}

impl fmt::Display for Orbital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Orbital {
    type Err = WavefunctionError;

    fn from_str(s: &str) -> Result<Self> {
        Orbital::ALL
            .into_iter()
            .find(|orbital| orbital.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WavefunctionError::UnknownOrbital(s.to_string()))
    }
}

/// Evaluate the orbital ψ at (r, θ, φ)
pub fn evaluate_orbital(
    orbital: Orbital,
    r: f64,
    theta: f64,
    phi: f64,
    params: &HydrogenicParams,
) -> f64 {
    orbital.evaluate(r, theta, phi, params)
}

/// Nodal angles and radii of the orbital for a hydrogen atom
pub fn nodal_geometry(orbital: Orbital) -> NodalGeometry {
    orbital.nodal_geometry(&HydrogenicParams::default())
}
