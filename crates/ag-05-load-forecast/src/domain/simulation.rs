//! Single-trial path simulation
//!
//! Each trial owns an RNG seeded from the base seed and its trial index, so
//! results are identical however rayon schedules the trials.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::distribution::{ContinuousCDF, Normal};

use super::config::NoiseModel;
use super::statistics::{mean, std_dev};

/// Noise model fitted to a history
#[derive(Clone, Debug)]
pub enum SamplingModel<'a> {
    Gaussian(Normal),
    /// Zero-variance history: every draw is the mean
    Constant(f64),
    Bootstrap(&'a [f64]),
}

impl<'a> SamplingModel<'a> {
    /// Fit `model` to `history` (assumed non-empty and finite)
    pub fn fit(model: NoiseModel, history: &'a [f64]) -> Self {
        match model {
            NoiseModel::Bootstrap => SamplingModel::Bootstrap(history),
            NoiseModel::Gaussian => {
                let m = mean(history);
                match Normal::new(m, std_dev(history)) {
                    Ok(normal) => SamplingModel::Gaussian(normal),
                    Err(_) => SamplingModel::Constant(m),
                }
            }
        }
    }

    /// Draw one hourly load; never negative
    pub fn draw(&self, rng: &mut StdRng) -> f64 {
        let value = match self {
            // Open interval keeps the inverse CDF finite
            SamplingModel::Gaussian(normal) => normal.inverse_cdf(rng.gen_range(f64::EPSILON..1.0)),
            SamplingModel::Constant(value) => *value,
            SamplingModel::Bootstrap(history) => history[rng.gen_range(0..history.len())],
        };
        value.max(0.0)
    }

    /// Simulate `hours` consecutive hours for one trial
    pub fn simulate(&self, hours: usize, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..hours).map(|_| self.draw(&mut rng)).collect()
    }
}

/// Per-trial seed (SplitMix64 finalizer over base seed and trial index)
pub fn trial_seed(base: u64, trial: u64) -> u64 {
    let mut z = base ^ trial.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
