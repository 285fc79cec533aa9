/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # orbital-sampler
//!
//! Evaluation and sampling engine for teaching quantum chemistry.
//!
//! The crate provides closed-form wavefunctions of hydrogen-like atoms
//! (radial parts R_{n,l}, real angular parts from spherical harmonics and
//! their products), the particle in a one-dimensional infinite well,
//! rejection sampling of point clouds from their probability densities,
//! and trapezoidal integration of the radial probability density.
//!
//! ```
//! use orbital_sampler::sampling::{sample_cloud, SamplingConfig};
//! use orbital_sampler::wavefunction::{HydrogenicParams, Orbital};
//!
//! let params = HydrogenicParams::default();
//! let cloud = sample_cloud(Orbital::Pz2, 100, None, &params, &SamplingConfig::seeded(1)).unwrap();
//! assert_eq!(cloud.len(), 100);
//! ```

pub mod cli;
pub mod integration;
pub mod sampling;
pub mod utils;
pub mod visualization;
pub mod wavefunction;
pub mod well;

pub use integration::{integrate_density, integrate_radial_density, IntegrationResult};
pub use sampling::{sample_cloud, sample_well, SampledCloud, SamplingConfig};
pub use wavefunction::{
    angular, evaluate_orbital, nodal_geometry, radial, AngularKind, HydrogenicParams, Orbital,
    RadialKind,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
