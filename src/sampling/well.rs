/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Rejection sampling of positions in the infinite well

use super::config::SamplingConfig;
use super::errors::{Result, SamplingError};
use crate::well::{check_quantum_number, phi, InfiniteWell};
use log::{debug, warn};
use rand::Rng;

/// Lazy sampler of positions distributed as φ_p(x)²
///
/// Proposals are x ~ U(0, L) with the envelope 2/L, the supremum of φ_p².
/// Each call to `next` keeps proposing until one point is accepted; the
/// iterator ends once the proposal budget is spent.
pub struct WellSampler<R: Rng> {
    well: InfiniteWell,
    p: u32,
    rng: R,
    proposals: usize,
    budget: usize,
}

impl<R: Rng> WellSampler<R> {
    /// Create a sampler for state `p` of `well`
    pub fn new(well: InfiniteWell, p: u32, rng: R, budget: usize) -> Result<Self> {
        check_quantum_number(p)?;
        Ok(Self {
            well,
            p,
            rng,
            proposals: 0,
            budget,
        })
    }

    /// Proposals drawn so far
    pub fn proposals(&self) -> usize {
        self.proposals
    }
}

impl<R: Rng> Iterator for WellSampler<R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let length = self.well.length();
        let bound = self.well.density_bound();

        while self.proposals < self.budget {
            self.proposals += 1;
            let x = self.rng.gen_range(0.0..length);
            let u = self.rng.gen_range(0.0..bound);
            let value = phi(x, self.p, length);
            if value * value > u {
                return Some(x);
            }
        }

        None
    }
}

/// Draw exactly `n` positions in [0, L] from φ_p²
///
/// # Arguments
///
/// * `p` - Quantum number, at least 1
/// * `length` - Width of the well in Angstroms
/// * `n` - Number of points
/// * `config` - Seed and proposal budget
pub fn sample_well(p: u32, length: f64, n: usize, config: &SamplingConfig) -> Result<Vec<f64>> {
    let well = InfiniteWell::new(length)?;
    let budget = config.proposal_budget(n);
    debug!("sampling {} points of the well state p = {} (L = {}, budget {})", n, p, length, budget);

    let mut sampler = WellSampler::new(well, p, config.rng(), budget)?;
    let points: Vec<f64> = sampler.by_ref().take(n).collect();

    if points.len() < n {
        warn!(
            "well sampling stopped after {} proposals with {}/{} points",
            sampler.proposals(),
            points.len(),
            n
        );
        return Err(SamplingError::Timeout {
            accepted: points.len(),
            requested: n,
            proposals: sampler.proposals(),
        });
    }

    debug!("accepted {} points in {} proposals", n, sampler.proposals());
    Ok(points)
}
