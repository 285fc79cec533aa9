/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Radial part of the hydrogen-like atomic orbitals
//!
//! Closed forms of R_{n,l}(r) from 1s to 4f, written with the reduced radius
//! ρ = Z·r/a0. Every function is normalized so that ∫ r² R² dr = 1.

use super::errors::{Result, WavefunctionError};
use super::params::HydrogenicParams;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest principal quantum number with a tabulated radial function
pub const N_MAX: u32 = 4;

/// The tabulated radial functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RadialKind {
    #[serde(rename = "1s")]
    R1s,
    #[serde(rename = "2s")]
    R2s,
    #[serde(rename = "2p")]
    R2p,
    #[serde(rename = "3s")]
    R3s,
    #[serde(rename = "3p")]
    R3p,
    #[serde(rename = "3d")]
    R3d,
    #[serde(rename = "4f")]
    R4f,
}

impl RadialKind {
    /// All tabulated radial functions, ordered by (n, l)
    pub const ALL: [RadialKind; 7] = [
        RadialKind::R1s,
        RadialKind::R2s,
        RadialKind::R2p,
        RadialKind::R3s,
        RadialKind::R3p,
        RadialKind::R3d,
        RadialKind::R4f,
    ];

    /// Select the radial function for the (n, l) pair
    ///
    /// For n = 4 only the 4f function is tabulated.
    pub fn from_quantum_numbers(n: u32, l: u32) -> Result<Self> {
        if !(1..=N_MAX).contains(&n) {
            return Err(WavefunctionError::quantum_number(
                "n",
                n as i64,
                format!("[1, {}]", N_MAX),
            ));
        }
        if l >= n {
            return Err(WavefunctionError::quantum_number(
                "l",
                l as i64,
                format!("[0, {}]", n - 1),
            ));
        }

        match (n, l) {
            (1, 0) => Ok(RadialKind::R1s),
            (2, 0) => Ok(RadialKind::R2s),
            (2, 1) => Ok(RadialKind::R2p),
            (3, 0) => Ok(RadialKind::R3s),
            (3, 1) => Ok(RadialKind::R3p),
            (3, 2) => Ok(RadialKind::R3d),
            (4, 3) => Ok(RadialKind::R4f),
            (_, l) => Err(WavefunctionError::quantum_number(
                "l",
                l as i64,
                "[3, 3] (only 4f is tabulated for n = 4)",
            )),
        }
    }

    /// Principal quantum number
    pub fn n(self) -> u32 {
        match self {
            RadialKind::R1s => 1,
            RadialKind::R2s | RadialKind::R2p => 2,
            RadialKind::R3s | RadialKind::R3p | RadialKind::R3d => 3,
            RadialKind::R4f => 4,
        }
    }

    /// Angular momentum quantum number
    pub fn l(self) -> u32 {
        match self {
            RadialKind::R1s | RadialKind::R2s | RadialKind::R3s => 0,
            RadialKind::R2p | RadialKind::R3p => 1,
            RadialKind::R3d => 2,
            RadialKind::R4f => 3,
        }
    }

    /// Evaluate R_{n,l}(r)
    pub fn evaluate(self, r: f64, params: &HydrogenicParams) -> f64 {
        let rho = params.rho(r);
        let a = params.prefactor();

        match self {
            RadialKind::R1s => 2.0 * a * (-rho).exp(),
            RadialKind::R2s => {
                1.0 / (2.0 * 2f64.sqrt()) * a * (2.0 - rho) * (-rho / 2.0).exp()
            }
            RadialKind::R2p => 1.0 / (2.0 * 6f64.sqrt()) * a * rho * (-rho / 2.0).exp(),
            RadialKind::R3s => {
                2.0 / (81.0 * 3f64.sqrt())
                    * a
                    * (27.0 - 18.0 * rho + 2.0 * rho * rho)
                    * (-rho / 3.0).exp()
            }
            RadialKind::R3p => {
                4.0 / (81.0 * 6f64.sqrt()) * a * (6.0 * rho - rho * rho) * (-rho / 3.0).exp()
            }
            RadialKind::R3d => 4.0 / (81.0 * 30f64.sqrt()) * a * rho * rho * (-rho / 3.0).exp(),
            RadialKind::R4f => {
                1.0 / (768.0 * 35f64.sqrt()) * a * rho.powi(3) * (-rho / 4.0).exp()
            }
        }
    }

    /// Evaluate R_{n,l} on every radius of `r`
    pub fn evaluate_array(self, r: &Array1<f64>, params: &HydrogenicParams) -> Array1<f64> {
        r.mapv(|ri| self.evaluate(ri, params))
    }

    /// Radial probability density D(r) = r² R(r)²
    pub fn density(self, r: f64, params: &HydrogenicParams) -> f64 {
        let value = self.evaluate(r, params);
        r * r * value * value
    }

    /// Radii of the spherical nodes, from the closed-form roots of the polynomial factor
    pub fn nodes(self, params: &HydrogenicParams) -> Vec<f64> {
        let scale = params.a0 / params.z;
        match self {
            RadialKind::R2s => vec![2.0 * scale],
            RadialKind::R3s => {
                let root3 = 3f64.sqrt();
                vec![
                    3.0 * scale / 2.0 * (3.0 + root3),
                    3.0 * scale / 2.0 * (3.0 - root3),
                ]
            }
            RadialKind::R3p => vec![6.0 * scale],
            RadialKind::R1s | RadialKind::R2p | RadialKind::R3d | RadialKind::R4f => Vec::new(),
        }
    }

    /// Radii r > 0 where dR/dr = 0, from the closed-form roots in ρ
    ///
    /// Together with r = 0 and the end of a range these are the only candidates
    /// for the maximum of R² on that range.
    pub fn extrema(self, params: &HydrogenicParams) -> Vec<f64> {
        let scale = params.a0 / params.z;
        let rho: Vec<f64> = match self {
            RadialKind::R1s => Vec::new(),
            RadialKind::R2s => vec![4.0],
            RadialKind::R2p => vec![2.0],
            // ρ² − 15ρ + 81/2 = 0
            RadialKind::R3s => {
                let root = 63f64.sqrt();
                vec![(15.0 - root) / 2.0, (15.0 + root) / 2.0]
            }
            // ρ² − 12ρ + 18 = 0
            RadialKind::R3p => {
                let root = 3.0 * 2f64.sqrt();
                vec![6.0 - root, 6.0 + root]
            }
            RadialKind::R3d => vec![6.0],
            RadialKind::R4f => vec![12.0],
        };
        rho.into_iter().map(|rho| rho * scale).collect()
    }

    /// Largest R² on [0, r_end]
    pub fn max_square(self, r_end: f64, params: &HydrogenicParams) -> f64 {
        self.extrema(params)
            .into_iter()
            .filter(|&r| r <= r_end)
            .chain([0.0, r_end])
            .map(|r| self.evaluate(r, params).powi(2))
            .fold(0.0, f64::max)
    }

    /// Short label such as "2p"
    pub fn label(self) -> &'static str {
        match self {
            RadialKind::R1s => "1s",
            RadialKind::R2s => "2s",
            RadialKind::R2p => "2p",
            RadialKind::R3s => "3s",
            RadialKind::R3p => "3p",
            RadialKind::R3d => "3d",
            RadialKind::R4f => "4f",
        }
    }
}

impl fmt::Display for RadialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for RadialKind {
    type Err = WavefunctionError;

    fn from_str(s: &str) -> Result<Self> {
        RadialKind::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WavefunctionError::UnknownOrbital(s.to_string()))
    }
}

/// Evaluate the radial function `kind` at `r`
pub fn radial(kind: RadialKind, r: f64, params: &HydrogenicParams) -> f64 {
    kind.evaluate(r, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::BOHR_RADIUS;
    use approx::assert_relative_eq;

    #[test]
    fn test_selection() {
        assert_eq!(RadialKind::from_quantum_numbers(1, 0).unwrap(), RadialKind::R1s);
        assert_eq!(RadialKind::from_quantum_numbers(3, 2).unwrap(), RadialKind::R3d);
        assert_eq!(RadialKind::from_quantum_numbers(4, 3).unwrap(), RadialKind::R4f);

        for kind in RadialKind::ALL {
            assert_eq!(RadialKind::from_quantum_numbers(kind.n(), kind.l()).unwrap(), kind);
        }
    }

    #[test]
    fn test_invalid_selection() {
        match RadialKind::from_quantum_numbers(5, 0) {
            Err(WavefunctionError::InvalidQuantumNumber { name, value, .. }) => {
                assert_eq!(name, "n");
                assert_eq!(value, 5);
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert!(RadialKind::from_quantum_numbers(0, 0).is_err());
        assert!(RadialKind::from_quantum_numbers(2, 2).is_err());
        assert!(RadialKind::from_quantum_numbers(4, 1).is_err());
    }

    #[test]
    fn test_value_at_origin() {
        let params = HydrogenicParams::default();
        let expected = 2.0 * (1.0 / BOHR_RADIUS).powf(1.5);
        assert_relative_eq!(RadialKind::R1s.evaluate(0.0, &params), expected, epsilon = 1e-12);
        assert_eq!(RadialKind::R2p.evaluate(0.0, &params), 0.0);
    }

    #[test]
    fn test_nodes_are_roots() {
        let params = HydrogenicParams::with_z(2.0);
        for kind in RadialKind::ALL {
            for node in kind.nodes(&params) {
                assert!(kind.evaluate(node, &params).abs() < 1e-12, "{} at {}", kind, node);
            }
        }
    }

    #[test]
    fn test_extrema_are_local_maxima_of_square() {
        let params = HydrogenicParams::with_z(3.0);
        let h = 1e-4 * params.a0 / params.z;
        for kind in RadialKind::ALL {
            for r in kind.extrema(&params) {
                let peak = kind.evaluate(r, &params).powi(2);
                assert!(peak >= kind.evaluate(r - h, &params).powi(2), "{} at {}", kind, r);
                assert!(peak >= kind.evaluate(r + h, &params).powi(2), "{} at {}", kind, r);
            }
        }
    }

    #[test]
    fn test_max_square_clamps_to_range() {
        let params = HydrogenicParams::default();
        // 4f peaks at 12 a0; below that R² is increasing
        let r_end = 2.0;
        assert_relative_eq!(
            RadialKind::R4f.max_square(r_end, &params),
            RadialKind::R4f.evaluate(r_end, &params).powi(2)
        );
        let peak = RadialKind::R2p.evaluate(2.0 * params.a0, &params).powi(2);
        assert_relative_eq!(RadialKind::R2p.max_square(100.0, &params), peak);
    }

    #[test]
    fn test_parse() {
        assert_eq!("3d".parse::<RadialKind>().unwrap(), RadialKind::R3d);
        assert!("5g".parse::<RadialKind>().is_err());
    }
}
