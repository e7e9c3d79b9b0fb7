//! Domain Layer - Statistics and trial simulation

pub mod config;
pub mod prediction;
pub mod simulation;
pub mod statistics;

pub use config::{ForecastConfig, NoiseModel};
pub use prediction::LoadPrediction;
pub use simulation::{trial_seed, SamplingModel};
