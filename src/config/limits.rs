//! Kinematic limit configuration.

use serde::Deserialize;

use crate::motion::KinematicLimits;

/// `[limits]` table from TOML.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LimitsConfig {
    /// Maximum velocity (distance units per time unit).
    pub max_velocity: f64,

    /// Maximum acceleration.
    pub max_acceleration: f64,

    /// Maximum jerk.
    pub max_jerk: f64,
}

impl LimitsConfig {
    /// Create a new limits table.
    pub fn new(max_velocity: f64, max_acceleration: f64, max_jerk: f64) -> Self {
        Self {
            max_velocity,
            max_acceleration,
            max_jerk,
        }
    }

    /// Named values, in declaration order.
    pub fn fields(&self) -> [(&'static str, f64); 3] {
        [
            ("max_velocity", self.max_velocity),
            ("max_acceleration", self.max_acceleration),
            ("max_jerk", self.max_jerk),
        ]
    }

    /// Convert to runtime limits.
    pub fn to_limits(&self) -> KinematicLimits {
        KinematicLimits::new(self.max_velocity, self.max_acceleration, self.max_jerk)
    }
}

impl From<LimitsConfig> for KinematicLimits {
    fn from(config: LimitsConfig) -> Self {
        config.to_limits()
    }
}
