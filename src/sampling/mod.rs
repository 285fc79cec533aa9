/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Rejection sampling of probability densities
//!
//! Neither the infinite-well density nor the projected orbital densities have
//! an analytic inverse CDF, so points are drawn by rejection against an
//! envelope. Both samplers are lazy iterators over a per-call random
//! generator, and every loop is bounded by a proposal budget that turns a
//! hopeless run into [`SamplingError::Timeout`].

pub mod cloud;
mod config;
mod errors;
pub mod well;

pub use cloud::{global_envelope, sample_cloud, to_polar, CloudPoint, CloudSampler, SampledCloud};
pub use config::{Envelope, SamplingConfig, DEFAULT_PROPOSALS_PER_POINT};
pub use errors::{Result, SamplingError};
pub use well::{sample_well, WellSampler};
