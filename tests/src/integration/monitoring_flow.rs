//! # Monitoring Flow
//!
//! A periodic probe feeds the latency monitor; once a day of hourly samples
//! has accumulated, the monitor's history drives the load forecaster.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ag_04_latency_estimator::{LatencyMonitor, LatencyTracker, MonitorConfig};
    use ag_05_load_forecast::{ForecastConfig, LoadForecaster, NoiseModel};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use shared_types::{ManualTimeSource, MS_PER_HOUR};

    fn probe(monitor: &LatencyMonitor, clock: &ManualTimeSource, hours: usize, rng: &mut StdRng) {
        for _ in 0..hours {
            clock.advance(MS_PER_HOUR);
            let sample = 120.0 + rng.gen_range(-15.0..15.0);
            monitor.record(sample).unwrap();
        }
    }

    #[test]
    fn forecast_waits_for_enough_history() {
        let clock = Arc::new(ManualTimeSource::new(0));
        let monitor =
            LatencyMonitor::with_time_source("edge-eu", &MonitorConfig::default(), clock.clone())
                .unwrap();
        let forecaster = LoadForecaster::default();
        let mut rng = StdRng::seed_from_u64(1);

        probe(&monitor, &clock, 23, &mut rng);
        assert!(
            forecaster
                .predict_load_seeded(&monitor.history_values(), 6, 500, 9)
                .is_none(),
            "23 samples is not enough history"
        );

        probe(&monitor, &clock, 1, &mut rng);
        let prediction = forecaster
            .predict_load_seeded(&monitor.history_values(), 6, 500, 9)
            .expect("24 samples is enough history");
        assert_eq!(prediction.horizon(), 6);

        // Hosts ship forecasts to dashboards as JSON
        let json = serde_json::to_string(&prediction).unwrap();
        let decoded: ag_05_load_forecast::LoadPrediction = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.horizon(), prediction.horizon());
        assert_eq!(decoded.trials, 500);
    }

    #[test]
    fn estimate_and_forecast_agree_on_level() {
        let clock = Arc::new(ManualTimeSource::new(0));
        let config = MonitorConfig::default().with_history_capacity(72);
        let monitor = LatencyMonitor::with_time_source("edge-us", &config, clock.clone()).unwrap();
        let mut rng = StdRng::seed_from_u64(2);

        probe(&monitor, &clock, 200, &mut rng);
        assert_eq!(monitor.history_len(), 72, "history is bounded");

        let snapshot = monitor.snapshot();
        assert!((snapshot.estimate - 120.0).abs() < 10.0);
        assert_eq!(snapshot.last_sample_at, Some(200 * MS_PER_HOUR));

        for model in [NoiseModel::Gaussian, NoiseModel::Bootstrap] {
            let forecaster =
                LoadForecaster::new(ForecastConfig::default().with_noise_model(model)).unwrap();
            let prediction = forecaster
                .predict_load_seeded(&monitor.history_values(), 12, 4_000, 5)
                .unwrap();
            for h in 0..prediction.horizon() {
                assert!((prediction.means[h] - 120.0).abs() < 5.0, "{model:?} hour {h}");
                assert!(prediction.lower_bounds[h] >= 100.0);
                assert!(prediction.upper_bounds[h] <= 140.0);
            }
        }
    }
}
