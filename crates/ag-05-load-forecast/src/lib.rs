//! # Load Forecaster
//!
//! Probabilistic hour-by-hour load forecasts from historical samples via
//! Monte Carlo simulation.
//!
//! A forecast needs at least `min_history` samples (24 by default). With
//! less data, [`predict_load`] returns `None`; callers retry once more
//! history has accumulated.
//!
//! ## Example
//!
//! ```rust
//! use ag_05_load_forecast::{ForecastConfig, LoadForecaster};
//!
//! let history: Vec<f64> = (0..48).map(|h| 100.0 + (h % 24) as f64).collect();
//! let forecaster = LoadForecaster::new(ForecastConfig::default()).unwrap();
//!
//! let prediction = forecaster.predict_load_seeded(&history, 6, 1_000, 42).unwrap();
//! assert_eq!(prediction.horizon(), 6);
//! assert!(forecaster.predict_load_seeded(&history[..10], 6, 1_000, 42).is_none());
//! ```

pub mod domain;
pub mod error;
pub mod service;

pub use domain::{ForecastConfig, LoadPrediction, NoiseModel};
pub use error::ForecastError;
pub use service::{predict_load, LoadForecaster};
