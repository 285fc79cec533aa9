/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Line series: radial curves, polar angular curves and well densities

use super::errors::{Result, VisualizationError};
use crate::utils::linspace;
use crate::wavefunction::{AngularKind, HydrogenicParams, RadialKind};
use crate::well::InfiniteWell;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// R(r) and the radial probability density D(r) = r² R² on a uniform grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialCurve {
    pub kind: RadialKind,
    pub r: Array1<f64>,
    pub wavefunction: Array1<f64>,
    pub density: Array1<f64>,
}

/// Angular function in the (x, z) plane, ready for a polar plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarCurve {
    pub kind: AngularKind,
    /// Polar angles in radians, 0 to 2π inclusive
    pub theta: Array1<f64>,
    /// Y(θ, 0) or Y(θ, 0)²
    pub values: Array1<f64>,
    /// Indices where the value is ≥ 0
    pub positive: Vec<usize>,
    /// Indices where the value is < 0
    pub negative: Vec<usize>,
    /// Largest magnitude, used to size the radial axis
    pub max_value: f64,
}

/// φ_p and φ_p² across the well
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellCurve {
    pub p: u32,
    pub x: Array1<f64>,
    pub wavefunction: Array1<f64>,
    pub density: Array1<f64>,
}

/// Finest angular step accepted by [`polar_curve`], in degrees
pub const MIN_STEP_DEGREES: f64 = 1e-3;

fn check_npts(npts: usize) -> Result<()> {
    if npts < 2 {
        return Err(VisualizationError::InvalidParameter(format!(
            "a curve needs at least 2 points, got {}",
            npts
        )));
    }
    Ok(())
}

/// Sample R(r) and r²R² on [0, r_max]
pub fn radial_curve(
    kind: RadialKind,
    r_max: f64,
    npts: usize,
    params: &HydrogenicParams,
) -> Result<RadialCurve> {
    check_npts(npts)?;
    params.validate()?;
    if !(r_max.is_finite() && r_max > 0.0) {
        return Err(VisualizationError::InvalidParameter(format!(
            "r_max must be positive, got {}",
            r_max
        )));
    }

    let r = linspace(0.0, r_max, npts);
    let wavefunction = kind.evaluate_array(&r, params);
    let density = &r * &r * &wavefunction * &wavefunction;

    Ok(RadialCurve {
        kind,
        r,
        wavefunction,
        density,
    })
}

/// Sample the angular function every `step_degrees` from 0° to 360° at φ = 0
///
/// With `show_wavefunction` the signed function is returned, otherwise its square.
pub fn polar_curve(kind: AngularKind, step_degrees: f64, show_wavefunction: bool) -> Result<PolarCurve> {
    if !(step_degrees.is_finite() && (MIN_STEP_DEGREES..=360.0).contains(&step_degrees)) {
        return Err(VisualizationError::InvalidParameter(format!(
            "angular step must be in [{}, 360] degrees, got {}",
            MIN_STEP_DEGREES, step_degrees
        )));
    }

    let count = (360.0 / step_degrees).floor() as usize + 1;
    let theta = Array1::from_iter((0..count).map(|i| (i as f64 * step_degrees).to_radians()));

    let wavefunction = kind.evaluate_array(&theta, 0.0);
    let values = if show_wavefunction {
        wavefunction
    } else {
        wavefunction.mapv(|v| v * v)
    };

    let (positive, negative): (Vec<usize>, Vec<usize>) =
        (0..values.len()).partition(|&i| values[i] >= 0.0);
    let max_value = values.iter().fold(0.0, |acc: f64, v| acc.max(v.abs()));

    Ok(PolarCurve {
        kind,
        theta,
        values,
        positive,
        negative,
        max_value,
    })
}

/// Sample φ_p and φ_p² on `npts` points across the well
pub fn well_curve(well: &InfiniteWell, p: u32, npts: usize) -> Result<WellCurve> {
    check_npts(npts)?;

    let x = linspace(0.0, well.length(), npts);
    let wavefunction = well.wavefunction_array(&x, p)?;
    let density = wavefunction.mapv(|v| v * v);

    Ok(WellCurve {
        p,
        x,
        wavefunction,
        density,
    })
}
