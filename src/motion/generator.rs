//! Profile generator: validates a request, solves it and samples it.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::error::{ProfileError, Result};

use super::limits::KinematicLimits;
use super::sampler::{ProfileSample, ProfileSampler};
use super::timing::ProfileTiming;

/// Default time between samples.
pub const DEFAULT_TIME_STEP: f64 = 0.010;

/// Jerk-limited profile generator for one set of kinematic limits.
///
/// Setters take `&mut self`, so limits cannot change while a sampler
/// borrowed from this generator is alive; samplers own a copy of the solved
/// timing and never read the generator again.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProfileGenerator {
    limits: KinematicLimits,
}

impl ProfileGenerator {
    /// Create a generator (absolute values of the limits are stored).
    pub fn new(max_velocity: f64, max_acceleration: f64, max_jerk: f64) -> Self {
        Self::from_limits(KinematicLimits::new(max_velocity, max_acceleration, max_jerk))
    }

    /// Create a generator from prepared limits.
    pub fn from_limits(limits: KinematicLimits) -> Self {
        Self { limits }
    }

    /// Get the kinematic limits.
    #[inline]
    pub fn limits(&self) -> KinematicLimits {
        self.limits
    }

    /// Get the velocity limit.
    #[inline]
    pub fn max_velocity(&self) -> f64 {
        self.limits.max_velocity()
    }

    /// Get the acceleration limit.
    #[inline]
    pub fn max_acceleration(&self) -> f64 {
        self.limits.max_acceleration()
    }

    /// Get the jerk limit.
    #[inline]
    pub fn max_jerk(&self) -> f64 {
        self.limits.max_jerk()
    }

    /// Set the velocity limit for subsequent generations.
    pub fn set_max_velocity(&mut self, max_velocity: f64) {
        self.limits = self.limits.with_max_velocity(max_velocity);
    }

    /// Set the acceleration limit for subsequent generations.
    pub fn set_max_acceleration(&mut self, max_acceleration: f64) {
        self.limits = self.limits.with_max_acceleration(max_acceleration);
    }

    /// Set the jerk limit for subsequent generations.
    pub fn set_max_jerk(&mut self, max_jerk: f64) {
        self.limits = self.limits.with_max_jerk(max_jerk);
    }

    /// Solve the segment timing for a move of `distance`.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::InvalidDistance` for negative or non-finite
    /// distances and `ProfileError::InvalidLimit` for non-finite limits.
    pub fn timing(&self, distance: f64) -> Result<ProfileTiming> {
        solve_checked(&self.limits, distance)
    }

    /// Create a lazy sampler for a move of `distance` at step `time_step`.
    ///
    /// # Errors
    ///
    /// Fails before any sample is produced if the distance, the time step or
    /// a limit is invalid.
    pub fn sampler(&self, distance: f64, time_step: f64) -> Result<ProfileSampler> {
        sampler_for(&self.limits, distance, time_step)
    }

    /// Generate the samples of a move at [`DEFAULT_TIME_STEP`].
    ///
    /// # Errors
    ///
    /// See [`ProfileGenerator::sampler`].
    #[cfg(feature = "alloc")]
    pub fn generate(&self, distance: f64) -> Result<Vec<ProfileSample>> {
        self.generate_with_step(distance, DEFAULT_TIME_STEP)
    }

    /// Generate the samples of a move at a custom time step.
    ///
    /// # Errors
    ///
    /// See [`ProfileGenerator::sampler`].
    #[cfg(feature = "alloc")]
    pub fn generate_with_step(&self, distance: f64, time_step: f64) -> Result<Vec<ProfileSample>> {
        generate_for(&self.limits, distance, time_step)
    }

    /// Generate the samples of a move into a fixed-capacity buffer.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::CapacityExceeded` (before sampling) if the
    /// sequence does not fit in `N` samples, plus the errors of
    /// [`ProfileGenerator::sampler`].
    pub fn generate_bounded<const N: usize>(
        &self,
        distance: f64,
        time_step: f64,
    ) -> Result<heapless::Vec<ProfileSample, N>> {
        let sampler = self.sampler(distance, time_step)?;
        let required = sampler.len();
        if required > N {
            return Err(ProfileError::CapacityExceeded {
                required,
                capacity: N,
            }
            .into());
        }

        let mut samples = heapless::Vec::new();
        for sample in sampler {
            samples.push(sample).map_err(|_| ProfileError::CapacityExceeded {
                required,
                capacity: N,
            })?;
        }
        Ok(samples)
    }

    /// Number of samples a move of `distance` produces at `time_step`.
    ///
    /// # Errors
    ///
    /// See [`ProfileGenerator::sampler`].
    pub fn sample_count(&self, distance: f64, time_step: f64) -> Result<usize> {
        Ok(self.sampler(distance, time_step)?.len())
    }
}

/// Validate the request and solve its timing.
fn solve_checked(limits: &KinematicLimits, distance: f64) -> Result<ProfileTiming> {
    limits.validate()?;
    if !(distance.is_finite() && distance >= 0.0) {
        return Err(ProfileError::InvalidDistance(distance).into());
    }
    Ok(ProfileTiming::solve(limits, distance))
}

/// Create a sampler for limits passed with the request.
///
/// # Errors
///
/// See [`ProfileGenerator::sampler`].
pub fn sampler_for(limits: &KinematicLimits, distance: f64, time_step: f64) -> Result<ProfileSampler> {
    // time step is checked first so a bad request never reaches the solver
    if !(time_step.is_finite() && time_step > 0.0) {
        return Err(ProfileError::InvalidTimeStep(time_step).into());
    }
    let timing = solve_checked(limits, distance)?;
    ProfileSampler::new(timing, time_step)
}

/// Generate samples for limits passed with the request.
///
/// # Errors
///
/// See [`ProfileGenerator::sampler`].
#[cfg(feature = "alloc")]
pub fn generate_for(
    limits: &KinematicLimits,
    distance: f64,
    time_step: f64,
) -> Result<Vec<ProfileSample>> {
    let sampler = sampler_for(limits, distance, time_step)?;

    #[cfg(feature = "defmt")]
    defmt::debug!(
        "generating {} samples over {}",
        sampler.len(),
        sampler.timing().total_duration()
    );

    let mut samples = Vec::new();
    samples
        .try_reserve_exact(sampler.len())
        .map_err(|_| ProfileError::TooManySamples {
            required: sampler.len() as f64,
        })?;
    samples.extend(sampler);
    Ok(samples)
}
