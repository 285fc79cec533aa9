/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Plot-ready numeric series
//!
//! Nothing here renders anything. These helpers turn evaluator and sampler
//! output into the curves, histograms and nodal outlines a front end draws.

pub mod curves;
mod errors;
pub mod histogram;
pub mod nodal;

pub use curves::{
    polar_curve, radial_curve, well_curve, PolarCurve, RadialCurve, WellCurve, MIN_STEP_DEGREES,
};
pub use errors::{Result, VisualizationError};
pub use histogram::{jitter, well_histogram, well_strip, Histogram, WellStrip};
pub use nodal::{nodal_circles, nodal_lines, NodalCircle, NodalLine};
