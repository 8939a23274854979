//! Move configuration from TOML.

use serde::Deserialize;

use crate::motion::DEFAULT_TIME_STEP;

/// A named move: a distance and the sample step to use for it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MoveConfig {
    /// Travel distance (must be >= 0).
    pub distance: f64,

    /// Time between samples (must be > 0).
    #[serde(default = "default_time_step")]
    pub time_step: f64,
}

fn default_time_step() -> f64 {
    DEFAULT_TIME_STEP
}

impl MoveConfig {
    /// Create a move with the default time step.
    pub fn new(distance: f64) -> Self {
        Self {
            distance,
            time_step: DEFAULT_TIME_STEP,
        }
    }

    /// Set a custom time step.
    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    /// Check if the distance is usable.
    pub fn has_valid_distance(&self) -> bool {
        self.distance.is_finite() && self.distance >= 0.0
    }

    /// Check if the time step is usable.
    pub fn has_valid_time_step(&self) -> bool {
        self.time_step.is_finite() && self.time_step > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_step() {
        let mv = MoveConfig::new(1.6);
        assert_eq!(mv.time_step, DEFAULT_TIME_STEP);
        assert!(mv.has_valid_distance());
        assert!(mv.has_valid_time_step());
    }

    #[test]
    fn test_invalid_values() {
        assert!(!MoveConfig::new(-1.0).has_valid_distance());
        assert!(!MoveConfig::new(f64::NAN).has_valid_distance());
        assert!(!MoveConfig::new(1.0).with_time_step(0.0).has_valid_time_step());
    }
}
