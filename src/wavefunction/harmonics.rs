/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Complex spherical harmonics Y_l^m for l ≤ 3
//!
//! Closed forms with the Condon–Shortley phase. They are the basis the real
//! angular functions of [`AngularKind`](super::AngularKind) are built from.

use super::angular::{AngularKind, L_MAX};
use super::errors::{Result, WavefunctionError};
use num_complex::Complex64;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// Complex spherical harmonic Y_l^m(θ, φ)
///
/// # Arguments
///
/// * `l` - Angular momentum quantum number, at most 3
/// * `m` - Magnetic quantum number, |m| ≤ l
/// * `theta` - Polar angle in radians
/// * `phi` - Azimuthal angle in radians
pub fn complex_harmonic(l: u32, m: i32, theta: f64, phi: f64) -> Result<Complex64> {
    if l > L_MAX {
        return Err(WavefunctionError::quantum_number(
            "l",
            l as i64,
            format!("[0, {}]", L_MAX),
        ));
    }
    if m.unsigned_abs() > l {
        return Err(WavefunctionError::quantum_number(
            "m_l",
            m as i64,
            format!("[-{}, {}]", l, l),
        ));
    }

    let m_abs = m.unsigned_abs();
    let positive = Complex64::from_polar(associated_part(l, m_abs, theta), m_abs as f64 * phi);

    if m >= 0 {
        Ok(positive)
    } else {
        // Y_l^{-m} = (-1)^m conj(Y_l^m)
        let sign = if m_abs % 2 == 0 { 1.0 } else { -1.0 };
        Ok(sign * positive.conj())
    }
}

/// θ-dependent factor of Y_l^m for m ≥ 0, normalization and phase included
fn associated_part(l: u32, m: u32, theta: f64) -> f64 {
    let (s, c) = theta.sin_cos();

    match (l, m) {
        (0, 0) => 1.0 / (4.0 * PI).sqrt(),
        (1, 0) => (3.0 / (4.0 * PI)).sqrt() * c,
        (1, 1) => -(3.0 / (8.0 * PI)).sqrt() * s,
        (2, 0) => (5.0 / (16.0 * PI)).sqrt() * (3.0 * c * c - 1.0),
        (2, 1) => -(15.0 / (8.0 * PI)).sqrt() * s * c,
        (2, 2) => (15.0 / (32.0 * PI)).sqrt() * s * s,
        (3, 0) => (7.0 / (16.0 * PI)).sqrt() * (5.0 * c.powi(3) - 3.0 * c),
        (3, 1) => -(21.0 / (64.0 * PI)).sqrt() * s * (5.0 * c * c - 1.0),
        (3, 2) => (105.0 / (32.0 * PI)).sqrt() * s * s * c,
        (3, 3) => -(35.0 / (64.0 * PI)).sqrt() * s.powi(3),
        _ => unreachable!("(l, m) validated by the caller"),
    }
}

/// Rebuild a real angular function from complex harmonics
///
/// m_l = 0 functions are Y_l^0 itself; the others are (Y_l^{-1} − Y_l^1)/√2.
/// The imaginary part of the result vanishes up to rounding.
pub fn real_from_complex(kind: AngularKind, theta: f64, phi: f64) -> Result<Complex64> {
    let l = kind.l();
    if kind.m_l() == 0 {
        return complex_harmonic(l, 0, theta, phi);
    }

    let minus = complex_harmonic(l, -1, theta, phi)?;
    let plus = complex_harmonic(l, 1, theta, phi)?;
    Ok((minus - plus) * FRAC_1_SQRT_2)
}
