/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Configuration shared by the rejection samplers

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Proposals allowed per requested point when no explicit budget is set
pub const DEFAULT_PROPOSALS_PER_POINT: usize = 10_000;

/// How the cloud sampler bounds the density it accepts against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Envelope {
    /// One bound per orbital and domain, max_r R² · max_θ Y²
    #[default]
    GlobalMaximum,
    /// Largest density among the candidates of each batch
    ///
    /// Biased toward high-density regions when batches are small.
    BatchMaximum,
}

/// Sampling configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Seed of the per-call random generator, drawn from entropy when `None`
    pub seed: Option<u64>,
    /// Total number of proposals allowed before giving up
    pub max_proposals: Option<usize>,
    /// Candidates drawn per batch by the cloud sampler, the requested count when `None`
    pub batch_size: Option<usize>,
    /// Envelope used by the cloud sampler
    pub envelope: Envelope,
}

impl SamplingConfig {
    /// Configuration with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Set the proposal budget
    pub fn with_max_proposals(mut self, max_proposals: usize) -> Self {
        self.max_proposals = Some(max_proposals);
        self
    }

    /// Set the batch size of the cloud sampler
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Set the envelope strategy
    pub fn with_envelope(mut self, envelope: Envelope) -> Self {
        self.envelope = envelope;
        self
    }

    /// Fresh generator for one sampling call
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Proposal budget for `n` requested points
    pub fn proposal_budget(&self, n: usize) -> usize {
        self.max_proposals
            .unwrap_or_else(|| n.max(1).saturating_mul(DEFAULT_PROPOSALS_PER_POINT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_budget() {
        let config = SamplingConfig::default();
        assert_eq!(config.proposal_budget(0), DEFAULT_PROPOSALS_PER_POINT);
        assert_eq!(config.proposal_budget(3), 3 * DEFAULT_PROPOSALS_PER_POINT);
        assert_eq!(config.with_max_proposals(7).proposal_budget(3), 7);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = SamplingConfig::seeded(42);
        let a: Vec<f64> = config.rng().sample_iter(rand::distributions::Standard).take(5).collect();
        let b: Vec<f64> = config.rng().sample_iter(rand::distributions::Standard).take(5).collect();
        assert_eq!(a, b);
    }
}
