//! Monte Carlo load forecaster
//!
//! ## Algorithm
//!
//! 1. Fit the noise model to the finite values of the history
//! 2. Map (parallel): simulate one hour-by-hour path per trial
//! 3. Reduce (parallel per hour): mean and percentile bounds across trials
//!
//! Mean and percentiles do not depend on trial order, and every trial
//! derives its RNG from its own index, so a seeded forecast is reproducible
//! regardless of thread count.

use ag_04_latency_estimator::SampleHistory;
use agora_telemetry::{components, log_component_event};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::domain::statistics::{mean, percentile_sorted};
use crate::domain::{trial_seed, ForecastConfig, LoadPrediction, SamplingModel};
use crate::error::ForecastError;

/// Trial counts below this run on the calling thread
pub const PARALLEL_THRESHOLD: usize = 256;

#[derive(Clone, Debug, Default)]
pub struct LoadForecaster {
    config: ForecastConfig,
}

impl LoadForecaster {
    pub fn new(config: ForecastConfig) -> Result<Self, ForecastError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Forecast `hours_ahead` hours with a fresh entropy seed
    ///
    /// `None` when the history is shorter than `min_history` or when
    /// `hours_ahead` or `trials` is zero.
    pub fn predict_load(
        &self,
        history: &[f64],
        hours_ahead: u32,
        trials: u32,
    ) -> Option<LoadPrediction> {
        let seed = StdRng::from_entropy().gen();
        self.predict_load_seeded(history, hours_ahead, trials, seed)
    }

    /// Reproducible forecast
    pub fn predict_load_seeded(
        &self,
        history: &[f64],
        hours_ahead: u32,
        trials: u32,
        seed: u64,
    ) -> Option<LoadPrediction> {
        let clean: Vec<f64> = history.iter().copied().filter(|v| v.is_finite()).collect();
        if clean.len() < self.config.min_history {
            log_component_event!(
                debug,
                components::LOAD_FORECAST,
                "Insufficient history for forecast",
                samples = clean.len(),
                required = self.config.min_history
            );
            return None;
        }
        if hours_ahead == 0 || trials == 0 {
            return None;
        }

        let hours = hours_ahead.min(self.config.max_hours) as usize;
        let trials = trials.min(self.config.max_trials);
        let model = SamplingModel::fit(self.config.noise_model, &clean);

        let run = |trial: u32| model.simulate(hours, trial_seed(seed, u64::from(trial)));
        let paths: Vec<Vec<f64>> = if (trials as usize) < PARALLEL_THRESHOLD {
            (0..trials).map(run).collect()
        } else {
            (0..trials).into_par_iter().map(run).collect()
        };

        let (lower_p, upper_p) = (self.config.lower_percentile, self.config.upper_percentile);
        let per_hour: Vec<(f64, f64, f64)> = (0..hours)
            .into_par_iter()
            .map(|hour| {
                let mut column: Vec<f64> = paths.iter().map(|path| path[hour]).collect();
                column.sort_by(f64::total_cmp);
                (
                    mean(&column),
                    percentile_sorted(&column, lower_p),
                    percentile_sorted(&column, upper_p),
                )
            })
            .collect();

        let mut prediction = LoadPrediction {
            means: Vec::with_capacity(hours),
            lower_bounds: Vec::with_capacity(hours),
            upper_bounds: Vec::with_capacity(hours),
            trials,
        };
        for (m, lo, hi) in per_hour {
            prediction.means.push(m);
            prediction.lower_bounds.push(lo);
            prediction.upper_bounds.push(hi);
        }

        log_component_event!(
            debug,
            components::LOAD_FORECAST,
            "Forecast computed",
            history = clean.len(),
            hours,
            trials
        );
        Some(prediction)
    }

    /// Forecast from a latency monitor's recorded history
    pub fn predict_from_history(
        &self,
        history: &SampleHistory,
        hours_ahead: u32,
        trials: u32,
    ) -> Option<LoadPrediction> {
        self.predict_load(&history.values(), hours_ahead, trials)
    }
}

/// Forecast with the default configuration
pub fn predict_load(history: &[f64], hours_ahead: u32, trials: u32) -> Option<LoadPrediction> {
    LoadForecaster::default().predict_load(history, hours_ahead, trials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoiseModel;

    fn daily_history(days: usize) -> Vec<f64> {
        (0..days * 24).map(|h| 100.0 + ((h % 24) as f64 - 12.0).abs()).collect()
    }

    #[test]
    fn test_insufficient_history_is_none() {
        let forecaster = LoadForecaster::default();
        assert!(forecaster.predict_load_seeded(&[1.0; 23], 6, 100, 1).is_none());
        assert!(predict_load(&[], 6, 100).is_none());
    }

    #[test]
    fn test_non_finite_values_do_not_count() {
        let mut history = vec![50.0; 23];
        history.push(f64::NAN);
        assert!(LoadForecaster::default().predict_load_seeded(&history, 1, 10, 1).is_none());
    }

    #[test]
    fn test_zero_horizon_or_trials_is_none() {
        let forecaster = LoadForecaster::default();
        let history = daily_history(2);
        assert!(forecaster.predict_load_seeded(&history, 0, 100, 1).is_none());
        assert!(forecaster.predict_load_seeded(&history, 6, 0, 1).is_none());
    }

    #[test]
    fn test_shape_and_ordering() {
        let forecaster = LoadForecaster::default();
        let prediction = forecaster
            .predict_load_seeded(&daily_history(3), 12, 2_000, 7)
            .unwrap();
        assert_eq!(prediction.horizon(), 12);
        assert_eq!(prediction.trials, 2_000);
        for h in 0..12 {
            assert!(prediction.lower_bounds[h] <= prediction.means[h]);
            assert!(prediction.means[h] <= prediction.upper_bounds[h]);
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let forecaster = LoadForecaster::default();
        let history = daily_history(2);
        let a = forecaster.predict_load_seeded(&history, 24, 1_000, 11);
        let b = forecaster.predict_load_seeded(&history, 24, 1_000, 11);
        assert_eq!(a, b);
    }

    #[test]
    fn test_means_near_history_mean() {
        let history = daily_history(7);
        let expected = mean(&history);
        let prediction = LoadForecaster::default()
            .predict_load_seeded(&history, 6, 5_000, 3)
            .unwrap();
        for m in &prediction.means {
            assert!((m - expected).abs() < 1.0, "mean {m} vs history {expected}");
        }
    }

    #[test]
    fn test_limits_clamp_requests() {
        let config = ForecastConfig::default().with_max_hours(4).with_max_trials(50);
        let forecaster = LoadForecaster::new(config).unwrap();
        let prediction = forecaster
            .predict_load_seeded(&daily_history(1), 1_000, 1_000_000, 5)
            .unwrap();
        assert_eq!(prediction.horizon(), 4);
        assert_eq!(prediction.trials, 50);
    }

    #[test]
    fn test_bootstrap_bounds_within_observed_range() {
        let config = ForecastConfig::default().with_noise_model(NoiseModel::Bootstrap);
        let history = daily_history(2);
        let prediction = LoadForecaster::new(config)
            .unwrap()
            .predict_load_seeded(&history, 8, 500, 9)
            .unwrap();
        let lo = history.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = history.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        for h in 0..8 {
            assert!(prediction.lower_bounds[h] >= lo);
            assert!(prediction.upper_bounds[h] <= hi);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ForecastConfig::default().with_percentiles(60.0, 40.0);
        assert!(LoadForecaster::new(config).is_err());
    }

    #[test]
    fn test_from_sample_history() {
        let mut history = SampleHistory::new(48).unwrap();
        for (i, v) in daily_history(2).into_iter().enumerate() {
            history.push(i as u64 * 3_600_000, v);
        }
        let prediction = LoadForecaster::default().predict_from_history(&history, 3, 100);
        assert_eq!(prediction.map(|p| p.horizon()), Some(3));
    }
}
