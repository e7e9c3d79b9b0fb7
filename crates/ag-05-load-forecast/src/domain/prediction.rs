//! Forecast output

use serde::{Deserialize, Serialize};

/// Per-hour forecast; index 0 is one hour ahead
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoadPrediction {
    pub means: Vec<f64>,
    pub lower_bounds: Vec<f64>,
    pub upper_bounds: Vec<f64>,
    /// Trials actually run after clamping
    pub trials: u32,
}

impl LoadPrediction {
    /// Hours covered
    pub fn horizon(&self) -> usize {
        self.means.len()
    }

    /// 1-based hour offset with the highest mean load
    pub fn peak_hour(&self) -> Option<usize> {
        self.means
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1).then_with(|| b.0.cmp(&a.0)))
            .map(|(i, _)| i + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_hour_prefers_earliest_tie() {
        let prediction = LoadPrediction {
            means: vec![1.0, 3.0, 3.0, 2.0],
            lower_bounds: vec![0.0; 4],
            upper_bounds: vec![5.0; 4],
            trials: 10,
        };
        assert_eq!(prediction.horizon(), 4);
        assert_eq!(prediction.peak_hour(), Some(2));
    }
}
