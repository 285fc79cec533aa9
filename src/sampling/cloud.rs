/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Rejection sampling of atomic-orbital clouds projected on the (x, z) plane
//!
//! Candidates are drawn uniformly on the square [-rmax, rmax]² at φ = 0 and
//! accepted with probability |ψ|² / envelope.

use super::config::{Envelope, SamplingConfig};
use super::errors::{Result, SamplingError};
use crate::wavefunction::{HydrogenicParams, Orbital};
use log::{debug, trace, warn};
use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::f64::consts::SQRT_2;

/// Relative headroom on top of the exact maxima
const ENVELOPE_MARGIN: f64 = 1.01;

/// One accepted point of the cloud
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloudPoint {
    pub x: f64,
    pub z: f64,
    /// Signed wavefunction value at the point
    pub value: f64,
}

/// Polar coordinates (r, θ) of a point of the (x, z) plane
///
/// θ is measured from the z axis; the origin maps to θ = 0.
pub fn to_polar(x: f64, z: f64) -> (f64, f64) {
    let r = x.hypot(z);
    if r > 0.0 {
        (r, (z / r).clamp(-1.0, 1.0).acos())
    } else {
        (0.0, 0.0)
    }
}

/// Upper bound of |ψ|² on the square of half-width `rmax` at φ = 0
///
/// The product of the separate maxima of R² (over the radii the square reaches)
/// and Y² (over θ) bounds their product. Both maxima come from closed-form
/// extrema, so the bound holds for any Z, a0 and rmax.
pub fn global_envelope(orbital: Orbital, rmax: f64, params: &HydrogenicParams) -> f64 {
    let radial_max = orbital.radial().max_square(rmax * SQRT_2, params);
    let angular_max = orbital.angular().max_square();

    radial_max * angular_max * ENVELOPE_MARGIN
}

/// Lazy sampler of orbital cloud points
///
/// Candidates are generated in batches; accepted points are buffered and
/// handed out one at a time. The iterator ends when the proposal budget is spent.
pub struct CloudSampler<R: Rng> {
    orbital: Orbital,
    params: HydrogenicParams,
    rmax: f64,
    batch_size: usize,
    envelope: Envelope,
    global_bound: f64,
    rng: R,
    buffer: VecDeque<CloudPoint>,
    proposals: usize,
    budget: usize,
}

impl<R: Rng> CloudSampler<R> {
    /// Create a sampler for `orbital` on the square of half-width `rmax`
    pub fn new(
        orbital: Orbital,
        params: HydrogenicParams,
        rmax: f64,
        batch_size: usize,
        envelope: Envelope,
        rng: R,
        budget: usize,
    ) -> Result<Self> {
        params.validate()?;
        if !(rmax.is_finite() && rmax > 0.0) {
            return Err(SamplingError::InvalidParameter(format!(
                "sampling radius must be positive, got rmax = {}",
                rmax
            )));
        }
        if batch_size == 0 {
            return Err(SamplingError::InvalidParameter(
                "batch size must be at least 1".to_string(),
            ));
        }

        let global_bound = match envelope {
            Envelope::GlobalMaximum => global_envelope(orbital, rmax, &params),
            Envelope::BatchMaximum => 0.0,
        };

        Ok(Self {
            orbital,
            params,
            rmax,
            batch_size,
            envelope,
            global_bound,
            rng,
            buffer: VecDeque::new(),
            proposals: 0,
            budget,
        })
    }

    /// Proposals drawn so far
    pub fn proposals(&self) -> usize {
        self.proposals
    }

    fn draw_batch(&mut self) {
        let size = self.batch_size.min(self.budget - self.proposals);
        self.proposals += size;

        let x: Vec<f64> = (0..size)
            .map(|_| self.rng.gen_range(-self.rmax..self.rmax))
            .collect();
        let z: Vec<f64> = (0..size)
            .map(|_| self.rng.gen_range(-self.rmax..self.rmax))
            .collect();

        let values: Vec<f64> = x
            .iter()
            .zip(&z)
            .map(|(&xi, &zi)| {
                let (r, theta) = to_polar(xi, zi);
                self.orbital.evaluate(r, theta, 0.0, &self.params)
            })
            .collect();

        let bound = match self.envelope {
            Envelope::GlobalMaximum => self.global_bound,
            Envelope::BatchMaximum => values.iter().map(|v| v * v).fold(0.0, f64::max),
        };

        let before = self.buffer.len();
        for i in 0..size {
            let u = self.rng.gen::<f64>() * bound;
            if values[i] * values[i] > u {
                self.buffer.push_back(CloudPoint {
                    x: x[i],
                    z: z[i],
                    value: values[i],
                });
            }
        }

        trace!(
            "batch of {} candidates, envelope {:.4e}, {} accepted",
            size,
            bound,
            self.buffer.len() - before
        );
    }
}

impl<R: Rng> Iterator for CloudSampler<R> {
    type Item = CloudPoint;

    fn next(&mut self) -> Option<CloudPoint> {
        loop {
            if let Some(point) = self.buffer.pop_front() {
                return Some(point);
            }
            if self.proposals >= self.budget {
                return None;
            }
            self.draw_batch();
        }
    }
}

/// Sampled orbital cloud: points in the (x, z) plane and ψ at each of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledCloud {
    /// The orbital the points were drawn from
    pub orbital: Orbital,
    /// N×2 array, columns x and z
    pub points: Array2<f64>,
    /// Signed wavefunction values, one per point
    pub values: Array1<f64>,
    /// Number of candidates drawn
    pub proposals: usize,
}

impl SampledCloud {
    /// Number of points
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the cloud is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// x coordinates
    pub fn x(&self) -> ArrayView1<'_, f64> {
        self.points.column(0)
    }

    /// z coordinates
    pub fn z(&self) -> ArrayView1<'_, f64> {
        self.points.column(1)
    }

    /// Indices of points where ψ > 0
    pub fn positive_indices(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v > 0.0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of points where ψ ≤ 0
    pub fn negative_indices(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v <= 0.0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Fraction of proposals that were kept
    pub fn acceptance_rate(&self) -> f64 {
        if self.proposals == 0 {
            0.0
        } else {
            self.len() as f64 / self.proposals as f64
        }
    }
}

/// Draw exactly `n` points of the orbital cloud in the (x, z) plane
///
/// # Arguments
///
/// * `orbital` - Orbital to sample
/// * `n` - Number of points
/// * `rmax` - Half-width of the sampling square, `orbital.rmax()` when `None`
/// * `params` - Atomic number and Bohr radius
/// * `config` - Seed, proposal budget, batch size and envelope
pub fn sample_cloud(
    orbital: Orbital,
    n: usize,
    rmax: Option<f64>,
    params: &HydrogenicParams,
    config: &SamplingConfig,
) -> Result<SampledCloud> {
    let rmax = rmax.unwrap_or_else(|| orbital.rmax());
    let budget = config.proposal_budget(n);
    let batch_size = config.batch_size.unwrap_or(n.max(1));
    debug!(
        "sampling {} points of {} (rmax = {}, batch {}, {:?}, budget {})",
        n, orbital, rmax, batch_size, config.envelope, budget
    );

    let mut sampler = CloudSampler::new(
        orbital,
        *params,
        rmax,
        batch_size,
        config.envelope,
        config.rng(),
        budget,
    )?;
    let accepted: Vec<CloudPoint> = sampler.by_ref().take(n).collect();

    if accepted.len() < n {
        warn!(
            "cloud sampling of {} stopped after {} proposals with {}/{} points",
            orbital,
            sampler.proposals(),
            accepted.len(),
            n
        );
        return Err(SamplingError::Timeout {
            accepted: accepted.len(),
            requested: n,
            proposals: sampler.proposals(),
        });
    }

    let flat: Vec<f64> = accepted.iter().flat_map(|p| [p.x, p.z]).collect();
    let points = Array2::from_shape_vec((n, 2), flat)?;
    let values = accepted.iter().map(|p| p.value).collect::<Array1<f64>>();

    debug!("accepted {} points in {} proposals", n, sampler.proposals());
    Ok(SampledCloud {
        orbital,
        points,
        values,
        proposals: sampler.proposals(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_to_polar() {
        let (r, theta) = to_polar(0.0, 2.0);
        assert_relative_eq!(r, 2.0);
        assert_relative_eq!(theta, 0.0);

        let (_, theta) = to_polar(1.0, 0.0);
        assert_relative_eq!(theta, PI / 2.0);

        let (_, theta) = to_polar(0.0, -1.0);
        assert_relative_eq!(theta, PI);

        assert_eq!(to_polar(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn test_global_envelope_bounds_density() {
        let params = HydrogenicParams::default();
        for orbital in Orbital::ALL {
            let rmax = orbital.rmax();
            let bound = global_envelope(orbital, rmax, &params);
            assert!(bound > 0.0);
            for i in 0..50 {
                for j in 0..50 {
                    let x = -rmax + 2.0 * rmax * i as f64 / 49.0;
                    let z = -rmax + 2.0 * rmax * j as f64 / 49.0;
                    let (r, theta) = to_polar(x, z);
                    assert!(orbital.density(r, theta, 0.0, &params) <= bound);
                }
            }
        }
    }

    #[test]
    fn test_exact_count() {
        let params = HydrogenicParams::default();
        let cloud = sample_cloud(Orbital::Pz2, 300, None, &params, &SamplingConfig::seeded(5)).unwrap();
        assert_eq!(cloud.len(), 300);
        assert_eq!(cloud.points.dim(), (300, 2));
        assert!(cloud.proposals >= 300);
        assert_eq!(
            cloud.positive_indices().len() + cloud.negative_indices().len(),
            300
        );
    }

    #[test]
    fn test_invalid_radius() {
        let params = HydrogenicParams::default();
        assert!(matches!(
            sample_cloud(Orbital::S1, 10, Some(-1.0), &params, &SamplingConfig::seeded(1)),
            Err(SamplingError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_batch_envelope() {
        let params = HydrogenicParams::default();
        let config = SamplingConfig::seeded(9)
            .with_envelope(Envelope::BatchMaximum)
            .with_batch_size(64);
        let cloud = sample_cloud(Orbital::S2, 200, None, &params, &config).unwrap();
        assert_eq!(cloud.len(), 200);
    }
}
