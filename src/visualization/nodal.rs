/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Nodal surfaces drawn in the (x, z) plane
//!
//! Radial nodes are spheres and show up as circles; angular nodes are planes
//! or cones through the nucleus and show up as lines through the origin.

use super::errors::{Result, VisualizationError};
use crate::utils::linspace;
use crate::wavefunction::{HydrogenicParams, Orbital};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Closed polyline of a radial node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodalCircle {
    pub radius: f64,
    pub x: Array1<f64>,
    pub z: Array1<f64>,
}

/// Segment of an angular node crossing the plotting square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodalLine {
    /// Polar angle of the node
    pub angle: f64,
    pub x: [f64; 2],
    pub z: [f64; 2],
}

/// One circle per nodal radius of the orbital
pub fn nodal_circles(orbital: Orbital, npts: usize, params: &HydrogenicParams) -> Result<Vec<NodalCircle>> {
    if npts < 3 {
        return Err(VisualizationError::InvalidParameter(format!(
            "a circle needs at least 3 points, got {}",
            npts
        )));
    }
    params.validate()?;

    let t = linspace(0.0, 2.0 * PI, npts);
    Ok(orbital
        .nodal_radii(params)
        .into_iter()
        .map(|radius| NodalCircle {
            radius,
            x: t.mapv(|ti| radius * ti.cos()),
            z: t.mapv(|ti| radius * ti.sin()),
        })
        .collect())
}

/// One segment per nodal angle, ending on the square of half-width `half_width`
pub fn nodal_lines(orbital: Orbital, half_width: f64) -> Result<Vec<NodalLine>> {
    if !(half_width.is_finite() && half_width > 0.0) {
        return Err(VisualizationError::InvalidParameter(format!(
            "half width must be positive, got {}",
            half_width
        )));
    }

    Ok(orbital
        .nodal_angles()
        .into_iter()
        .map(|angle| {
            let (sin_a, cos_a) = angle.sin_cos();
            let t = half_width / sin_a.abs().max(cos_a.abs());
            NodalLine {
                angle,
                x: [-t * sin_a, t * sin_a],
                z: [-t * cos_a, t * cos_a],
            }
        })
        .collect())
}
