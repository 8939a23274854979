//! Kinematic limits for a profile request.

use libm::fabs;

use crate::error::{ProfileError, Result};

/// Velocity, acceleration and jerk bounds for one axis.
///
/// All three values are stored as magnitudes; the solver reintroduces sign.
/// The type is a plain `Copy` value, so a profile request can carry its own
/// limits instead of sharing a mutable generator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KinematicLimits {
    max_velocity: f64,
    max_acceleration: f64,
    max_jerk: f64,
}

impl KinematicLimits {
    /// Create limits from signed values (absolute values are stored).
    pub fn new(max_velocity: f64, max_acceleration: f64, max_jerk: f64) -> Self {
        Self {
            max_velocity: fabs(max_velocity),
            max_acceleration: fabs(max_acceleration),
            max_jerk: fabs(max_jerk),
        }
    }

    /// Maximum velocity magnitude.
    #[inline]
    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    /// Maximum acceleration magnitude.
    #[inline]
    pub fn max_acceleration(&self) -> f64 {
        self.max_acceleration
    }

    /// Maximum jerk magnitude.
    #[inline]
    pub fn max_jerk(&self) -> f64 {
        self.max_jerk
    }

    /// Copy with a different velocity limit.
    pub fn with_max_velocity(self, max_velocity: f64) -> Self {
        Self {
            max_velocity: fabs(max_velocity),
            ..self
        }
    }

    /// Copy with a different acceleration limit.
    pub fn with_max_acceleration(self, max_acceleration: f64) -> Self {
        Self {
            max_acceleration: fabs(max_acceleration),
            ..self
        }
    }

    /// Copy with a different jerk limit.
    pub fn with_max_jerk(self, max_jerk: f64) -> Self {
        Self {
            max_jerk: fabs(max_jerk),
            ..self
        }
    }

    /// Reject NaN or infinite limits.
    ///
    /// Zero limits are valid and produce a zero-duration profile.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("max velocity", self.max_velocity),
            ("max acceleration", self.max_acceleration),
            ("max jerk", self.max_jerk),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ProfileError::InvalidLimit { name, value }.into());
            }
        }
        Ok(())
    }
}
