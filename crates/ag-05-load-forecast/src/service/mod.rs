//! Service Layer

pub mod forecaster;

pub use forecaster::{predict_load, LoadForecaster, PARALLEL_THRESHOLD};
