//! Property tests for the load forecaster

use ag_05_load_forecast::{ForecastConfig, LoadForecaster, NoiseModel};
use proptest::prelude::*;

fn noise_model() -> impl Strategy<Value = NoiseModel> {
    prop_oneof![Just(NoiseModel::Gaussian), Just(NoiseModel::Bootstrap)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn bounds_are_ordered_and_non_negative(
        history in prop::collection::vec(0.0f64..1_000.0, 24..96),
        hours in 1u32..24,
        trials in 1u32..400,
        seed in any::<u64>(),
        model in noise_model(),
    ) {
        let forecaster = LoadForecaster::new(ForecastConfig::default().with_noise_model(model)).unwrap();
        let prediction = forecaster.predict_load_seeded(&history, hours, trials, seed).unwrap();

        prop_assert_eq!(prediction.horizon(), hours as usize);
        for h in 0..prediction.horizon() {
            prop_assert!(prediction.lower_bounds[h] <= prediction.upper_bounds[h]);
            prop_assert!(prediction.lower_bounds[h] >= 0.0);
            prop_assert!(prediction.means[h].is_finite());
        }
    }

    #[test]
    fn bootstrap_stays_within_observed_range(
        history in prop::collection::vec(0.0f64..1_000.0, 24..96),
        seed in any::<u64>(),
    ) {
        let config = ForecastConfig::default().with_noise_model(NoiseModel::Bootstrap);
        let prediction = LoadForecaster::new(config)
            .unwrap()
            .predict_load_seeded(&history, 6, 200, seed)
            .unwrap();
        let lo = history.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = history.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        for h in 0..prediction.horizon() {
            prop_assert!(prediction.means[h] >= lo - 1e-9 && prediction.means[h] <= hi + 1e-9);
            prop_assert!(prediction.lower_bounds[h] >= lo && prediction.upper_bounds[h] <= hi);
        }
    }

    #[test]
    fn short_history_never_forecasts(
        history in prop::collection::vec(0.0f64..1_000.0, 0..24),
        seed in any::<u64>(),
    ) {
        let forecaster = LoadForecaster::default();
        prop_assert!(forecaster.predict_load_seeded(&history, 12, 100, seed).is_none());
    }
}
