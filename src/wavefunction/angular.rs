/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Real angular functions of the atomic orbitals
//!
//! Only real functions are used. For m_l ≠ 0 they are the linear combinations
//! (Y_l^{-1} − Y_l^{1})/√2 of complex spherical harmonics with the same l and
//! |m_l|, which gives the "xz"-type orbitals (px, dxz, fxz²).

use super::errors::{Result, WavefunctionError};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Largest angular momentum with a tabulated angular function
pub const L_MAX: u32 = 3;

/// The tabulated real angular functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngularKind {
    /// Y_0^0
    S,
    /// Y_1^0
    Pz,
    /// (Y_1^{-1} − Y_1^1)/√2
    Px,
    /// Y_2^0
    Dz2,
    /// (Y_2^{-1} − Y_2^1)/√2
    Dxz,
    /// Y_3^0
    Fz3,
    /// (Y_3^{-1} − Y_3^1)/√2
    Fxz2,
}

impl AngularKind {
    /// All tabulated angular functions, ordered by (l, |m_l|)
    pub const ALL: [AngularKind; 7] = [
        AngularKind::S,
        AngularKind::Pz,
        AngularKind::Px,
        AngularKind::Dz2,
        AngularKind::Dxz,
        AngularKind::Fz3,
        AngularKind::Fxz2,
    ];

    /// Select the real angular function for (l, m_l)
    ///
    /// The sign of m_l is ignored: both ±m_l map to the same real combination.
    pub fn from_quantum_numbers(l: u32, m_l: i32) -> Result<Self> {
        if l > L_MAX {
            return Err(WavefunctionError::quantum_number(
                "l",
                l as i64,
                format!("[0, {}]", L_MAX),
            ));
        }
        if m_l.unsigned_abs() > l {
            return Err(WavefunctionError::quantum_number(
                "m_l",
                m_l as i64,
                format!("[-{}, {}]", l, l),
            ));
        }

        match (l, m_l.unsigned_abs()) {
            (0, 0) => Ok(AngularKind::S),
            (1, 0) => Ok(AngularKind::Pz),
            (1, 1) => Ok(AngularKind::Px),
            (2, 0) => Ok(AngularKind::Dz2),
            (2, 1) => Ok(AngularKind::Dxz),
            (3, 0) => Ok(AngularKind::Fz3),
            (3, 1) => Ok(AngularKind::Fxz2),
            _ => Err(WavefunctionError::quantum_number(
                "m_l",
                m_l as i64,
                "[-1, 1] (only |m_l| <= 1 has a tabulated real function)",
            )),
        }
    }

    /// Angular momentum quantum number
    pub fn l(self) -> u32 {
        match self {
            AngularKind::S => 0,
            AngularKind::Pz | AngularKind::Px => 1,
            AngularKind::Dz2 | AngularKind::Dxz => 2,
            AngularKind::Fz3 | AngularKind::Fxz2 => 3,
        }
    }

    /// Absolute value of the magnetic quantum number
    pub fn m_l(self) -> u32 {
        match self {
            AngularKind::S | AngularKind::Pz | AngularKind::Dz2 | AngularKind::Fz3 => 0,
            AngularKind::Px | AngularKind::Dxz | AngularKind::Fxz2 => 1,
        }
    }

    /// Evaluate the angular function at (θ, φ)
    pub fn evaluate(self, theta: f64, phi: f64) -> f64 {
        let (sin_t, cos_t) = theta.sin_cos();

        match self {
            AngularKind::S => 1.0 / (4.0 * PI).sqrt(),
            AngularKind::Pz => (3.0 / (4.0 * PI)).sqrt() * cos_t,
            AngularKind::Px => (3.0 / (4.0 * PI)).sqrt() * sin_t * phi.cos(),
            AngularKind::Dz2 => (5.0 / (16.0 * PI)).sqrt() * (3.0 * cos_t * cos_t - 1.0),
            AngularKind::Dxz => (15.0 / (4.0 * PI)).sqrt() * sin_t * cos_t * phi.cos(),
            AngularKind::Fz3 => {
                (7.0 / (16.0 * PI)).sqrt() * (5.0 * cos_t.powi(3) - 3.0 * cos_t)
            }
            AngularKind::Fxz2 => {
                (21.0 / (32.0 * PI)).sqrt() * sin_t * (5.0 * cos_t * cos_t - 1.0) * phi.cos()
            }
        }
    }

    /// Evaluate the angular function on every θ of `theta` at fixed φ
    pub fn evaluate_array(self, theta: &Array1<f64>, phi: f64) -> Array1<f64> {
        theta.mapv(|t| self.evaluate(t, phi))
    }

    /// Polar angle in the (x, z) plane where |Y| is largest
    pub fn peak_angle(self) -> f64 {
        match self {
            AngularKind::S | AngularKind::Pz | AngularKind::Dz2 | AngularKind::Fz3 => 0.0,
            AngularKind::Px => PI / 2.0,
            AngularKind::Dxz => PI / 4.0,
            // sinθ (5cos²θ − 1) is extremal at sin²θ = 4/15
            AngularKind::Fxz2 => (4.0f64 / 15.0).sqrt().asin(),
        }
    }

    /// Largest Y² over the (x, z) plane
    pub fn max_square(self) -> f64 {
        self.evaluate(self.peak_angle(), 0.0).powi(2)
    }

    /// Polar angles of the nodal planes/cones seen in the (x, z) plane
    ///
    /// Negative angles denote the mirror cone below the xy plane.
    pub fn nodal_angles(self) -> Vec<f64> {
        match self {
            AngularKind::S => Vec::new(),
            AngularKind::Pz => vec![PI / 2.0],
            AngularKind::Px => vec![0.0],
            AngularKind::Dz2 => {
                let angle = (1.0 / 3f64.sqrt()).acos();
                vec![angle, -angle]
            }
            AngularKind::Dxz => vec![0.0, PI / 2.0],
            AngularKind::Fz3 => {
                let angle = (3.0f64 / 5.0).sqrt().acos();
                vec![PI / 2.0, angle, -angle]
            }
            AngularKind::Fxz2 => {
                let angle = (1.0f64 / 5.0).sqrt().acos();
                vec![0.0, angle, -angle]
            }
        }
    }

    /// Orbital-style label, e.g. "dxz"
    pub fn label(self) -> &'static str {
        match self {
            AngularKind::S => "s",
            AngularKind::Pz => "pz",
            AngularKind::Px => "px",
            AngularKind::Dz2 => "dz2",
            AngularKind::Dxz => "dxz",
            AngularKind::Fz3 => "fz3",
            AngularKind::Fxz2 => "fxz2",
        }
    }
}

impl fmt::Display for AngularKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for AngularKind {
    type Err = WavefunctionError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        // "pz" or "npz", nothing else
        AngularKind::ALL
            .into_iter()
            .find(|kind| {
                let label = kind.label();
                name.eq_ignore_ascii_case(label)
                    || (name.len() == label.len() + 1
                        && name.is_char_boundary(1)
                        && name[..1].eq_ignore_ascii_case("n")
                        && name[1..].eq_ignore_ascii_case(label))
            })
            .ok_or_else(|| WavefunctionError::UnknownOrbital(s.to_string()))
    }
}

/// Evaluate the angular function `kind` at (θ, φ)
pub fn angular(kind: AngularKind, theta: f64, phi: f64) -> f64 {
    kind.evaluate(theta, phi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_selection() {
        for kind in AngularKind::ALL {
            assert_eq!(
                AngularKind::from_quantum_numbers(kind.l(), kind.m_l() as i32).unwrap(),
                kind
            );
        }
        assert_eq!(AngularKind::from_quantum_numbers(2, -1).unwrap(), AngularKind::Dxz);
    }

    #[test]
    fn test_invalid_selection() {
        assert!(matches!(
            AngularKind::from_quantum_numbers(4, 0),
            Err(WavefunctionError::InvalidQuantumNumber { name: "l", value: 4, .. })
        ));
        assert!(matches!(
            AngularKind::from_quantum_numbers(1, 2),
            Err(WavefunctionError::InvalidQuantumNumber { name: "m_l", value: 2, .. })
        ));
        assert!(matches!(
            AngularKind::from_quantum_numbers(2, 2),
            Err(WavefunctionError::InvalidQuantumNumber { name: "m_l", .. })
        ));
    }

    #[test]
    fn test_nodal_angles_are_zeros() {
        for kind in AngularKind::ALL {
            for angle in kind.nodal_angles() {
                assert!(kind.evaluate(angle, 0.0).abs() < 1e-12, "{} at {}", kind, angle);
            }
        }
    }

    #[test]
    fn test_s_is_isotropic() {
        assert_relative_eq!(AngularKind::S.evaluate(0.3, 1.2), AngularKind::S.evaluate(2.0, 0.1));
    }

    #[test]
    fn test_max_square_bounds_scan() {
        for kind in AngularKind::ALL {
            let bound = kind.max_square();
            for i in 0..=20_000 {
                let theta = PI * i as f64 / 20_000.0;
                assert!(kind.evaluate(theta, 0.0).powi(2) <= bound * (1.0 + 1e-12), "{}", kind);
            }
        }
        assert_relative_eq!(AngularKind::Fxz2.max_square(), 56.0 / (45.0 * PI), epsilon = 1e-12);
    }

    #[test]
    fn test_parse() {
        assert_eq!("npz".parse::<AngularKind>().unwrap(), AngularKind::Pz);
        assert_eq!("fxz2".parse::<AngularKind>().unwrap(), AngularKind::Fxz2);
        assert_eq!("Ns".parse::<AngularKind>().unwrap(), AngularKind::S);
        assert!("dxy".parse::<AngularKind>().is_err());
        assert!("nnpz".parse::<AngularKind>().is_err());
        assert!("n".parse::<AngularKind>().is_err());
        assert!("xpz".parse::<AngularKind>().is_err());
    }
}
