/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Histogram and strip-plot data for the sampled well positions

use super::errors::{Result, VisualizationError};
use crate::sampling::{sample_well, SamplingConfig};
use crate::utils::linspace;
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

/// Histogram normalized as a probability density
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// `nbins + 1` bin edges
    pub edges: Array1<f64>,
    /// Raw counts per bin
    pub counts: Vec<usize>,
    /// counts / (total · bin width), so the bars integrate to 1
    pub density: Array1<f64>,
}

/// Sampled positions with a vertical jitter for a strip plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellStrip {
    pub positions: Vec<f64>,
    pub offsets: Vec<f64>,
}

/// Bin positions in [0, L] into `nbins` equal bins
pub fn well_histogram(samples: &[f64], length: f64, nbins: usize) -> Result<Histogram> {
    if nbins == 0 {
        return Err(VisualizationError::InvalidParameter(
            "histogram needs at least one bin".to_string(),
        ));
    }
    if !(length.is_finite() && length > 0.0) {
        return Err(VisualizationError::InvalidParameter(format!(
            "well length must be positive, got {}",
            length
        )));
    }

    let width = length / nbins as f64;
    let mut counts = vec![0usize; nbins];
    for &x in samples.iter().filter(|x| (0.0..=length).contains(*x)) {
        let bin = ((x / width) as usize).min(nbins - 1);
        counts[bin] += 1;
    }

    let total: usize = counts.iter().sum();
    let density = counts
        .iter()
        .map(|&c| {
            if total == 0 {
                0.0
            } else {
                c as f64 / (total as f64 * width)
            }
        })
        .collect();

    Ok(Histogram {
        edges: linspace(0.0, length, nbins + 1),
        counts,
        density,
    })
}

/// `n` normal offsets with standard deviation `sigma`
pub fn jitter<R: Rng>(n: usize, sigma: f64, rng: &mut R) -> Result<Vec<f64>> {
    let normal = Normal::new(0.0, sigma)
        .map_err(|e| VisualizationError::InvalidParameter(format!("jitter sigma {}: {}", sigma, e)))?;
    Ok(normal.sample_iter(rng).take(n).collect())
}

/// Sample `n` well positions and pair them with jitter offsets
///
/// The offsets use their own generator, seeded from `config.seed + 1` when a seed is set.
pub fn well_strip(p: u32, length: f64, n: usize, sigma: f64, config: &SamplingConfig) -> Result<WellStrip> {
    let positions = sample_well(p, length, n, config)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_entropy(),
    };
    let offsets = jitter(n, sigma, &mut rng)?;

    Ok(WellStrip { positions, offsets })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_histogram_integrates_to_one() {
        let samples = [0.05, 0.15, 0.15, 0.95, 1.0];
        let histogram = well_histogram(&samples, 1.0, 10).unwrap();
        assert_eq!(histogram.edges.len(), 11);
        assert_eq!(histogram.counts[1], 2);
        assert_eq!(histogram.counts[9], 2);
        let area: f64 = histogram.density.iter().map(|d| d * 0.1).sum();
        assert_relative_eq!(area, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_histogram_invalid() {
        assert!(well_histogram(&[0.1], 1.0, 0).is_err());
        assert!(well_histogram(&[0.1], 0.0, 5).is_err());
    }

    #[test]
    fn test_jitter() {
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(jitter(20, 0.5, &mut rng).unwrap().len(), 20);
        assert!(jitter(20, -1.0, &mut rng).is_err());
    }

    #[test]
    fn test_strip_is_reproducible() {
        let config = SamplingConfig::seeded(21);
        let a = well_strip(2, 1.0, 50, 0.5, &config).unwrap();
        let b = well_strip(2, 1.0, 50, 0.5, &config).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.offsets.len(), 50);
    }
}
