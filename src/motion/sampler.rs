//! Fixed-step sampling of a solved profile.
//!
//! Velocity is evaluated in closed form per segment from the precomputed
//! boundary velocities. Position is advanced with the rectangular rule
//! `position += velocity * step`, so it carries O(dt) integration error
//! while velocity stays exact.

use core::iter::FusedIterator;

use libm::ceil;
use serde::Serialize;

use crate::error::{ProfileError, Result};

use super::segment::Segment;
use super::timing::ProfileTiming;

/// One point of a sampled profile.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProfileSample {
    /// Elapsed time since the start of the move.
    pub time: f64,
    /// Velocity at `time`.
    pub velocity: f64,
    /// Integrated position at `time`.
    pub position: f64,
}

impl ProfileSample {
    /// Create a sample.
    #[inline]
    pub const fn new(time: f64, velocity: f64, position: f64) -> Self {
        Self {
            time,
            velocity,
            position,
        }
    }
}

/// Velocity at the five interior segment boundaries.
///
/// Computed once per generation from the timing so that per-sample
/// velocities never accumulate integration error.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoundaryVelocities {
    /// End of the jerk-in ramp.
    pub v1: f64,
    /// End of the constant acceleration hold.
    pub v2: f64,
    /// Cruise velocity.
    pub v3: f64,
    /// End of the deceleration jerk-in ramp.
    pub v4: f64,
    /// End of the constant deceleration hold.
    pub v5: f64,
}

impl BoundaryVelocities {
    /// Derive boundary velocities from a solved timing.
    pub fn from_timing(timing: &ProfileTiming) -> Self {
        let jerk = timing.max_jerk;
        let v1 = jerk * timing.t1 * timing.t1 / 2.0;
        let v2 = v1 + jerk * timing.t1 * timing.t1c;
        let v3 = v2 + v1;
        Self {
            v1,
            v2,
            v3,
            v4: v3 - v1,
            v5: v3 - v2,
        }
    }
}

impl ProfileTiming {
    /// Closed-form velocity at `time`.
    pub fn velocity_at(&self, time: f64, boundaries: &BoundaryVelocities) -> f64 {
        let jerk = self.max_jerk;
        let peak_accel = self.peak_acceleration();

        match self.segment_at(time) {
            Segment::Rest => 0.0,
            Segment::JerkIn => jerk * time * time / 2.0,
            Segment::ConstantAccel => boundaries.v1 + peak_accel * (time - self.t1),
            Segment::JerkOut => {
                // acceleration is linear here, so the trapezoid is exact
                let elapsed = time - (self.t1 + self.t1c);
                boundaries.v2 + elapsed * (self.acceleration_at(time) + peak_accel) / 2.0
            }
            Segment::Cruise => boundaries.v3,
            Segment::DecelJerkIn => {
                boundaries.v3 + self.acceleration_at(time) * (time - self.t_acdc) / 2.0
            }
            Segment::ConstantDecel => {
                boundaries.v4 - peak_accel * (time - (self.t_acdc + self.t1))
            }
            Segment::DecelJerkOut => {
                let elapsed = time - (self.total_duration() - self.t1);
                boundaries.v5 - peak_accel * elapsed + jerk * elapsed * elapsed / 2.0
            }
        }
    }

    /// Exact displacement at `time`, integrating the closed-form velocity.
    ///
    /// Analysis helper; the sampler does not use it.
    pub fn displacement_at(&self, time: f64, boundaries: &BoundaryVelocities) -> f64 {
        if !(time > 0.0) {
            return 0.0;
        }

        let mut displacement = 0.0;
        for segment in Segment::MOVING {
            let Some((start, end)) = self.segment_bounds(segment) else {
                continue;
            };
            let (velocity, accel, jerk) = self.segment_origin(segment, boundaries);
            let elapsed = if time > end { end - start } else { time - start };
            displacement += elapsed
                * (velocity + elapsed * (accel / 2.0 + elapsed * jerk / 6.0));
            if time <= end {
                break;
            }
        }
        displacement
    }

    /// Velocity, acceleration and jerk at the start of a moving segment.
    fn segment_origin(&self, segment: Segment, boundaries: &BoundaryVelocities) -> (f64, f64, f64) {
        let jerk = segment.jerk_sign() * self.max_jerk;
        let peak_accel = self.peak_acceleration();
        match segment {
            Segment::Rest | Segment::JerkIn => (0.0, 0.0, jerk),
            Segment::ConstantAccel => (boundaries.v1, peak_accel, jerk),
            Segment::JerkOut => (boundaries.v2, peak_accel, jerk),
            Segment::Cruise | Segment::DecelJerkIn => (boundaries.v3, 0.0, jerk),
            Segment::ConstantDecel => (boundaries.v4, -peak_accel, jerk),
            Segment::DecelJerkOut => (boundaries.v5, -peak_accel, jerk),
        }
    }
}

/// Number of samples for a profile of `total` duration at step `time_step`.
///
/// `ceil(total / time_step) + 1`, or 1 for a zero-duration profile. Returns
/// `None` when the step is not positive or the count does not fit a `usize`.
pub fn sample_count(total: f64, time_step: f64) -> Option<usize> {
    if !(total > 0.0) {
        return Some(1);
    }
    let exact = ceil(total / time_step);
    // count plus the opening sample must fit
    if !(time_step > 0.0 && exact.is_finite() && exact < usize::MAX as f64) {
        return None;
    }
    let mut steps = exact as usize;
    // float division can round up past an exact multiple
    if steps > 0 && (steps - 1) as f64 * time_step >= total {
        steps -= 1;
    }
    Some(steps + 1)
}

/// Lazy iterator over the samples of one profile.
///
/// Sample `k` is taken at `k * time_step`; the final sample is clipped to
/// exactly the total duration. Each iterator is single-use.
#[derive(Debug, Clone)]
pub struct ProfileSampler {
    /// Timing being sampled.
    timing: ProfileTiming,

    /// Boundary velocities derived from `timing`.
    boundaries: BoundaryVelocities,

    /// Nominal time between samples.
    time_step: f64,

    /// Index of the next sample.
    index: usize,

    /// Total number of samples.
    len: usize,

    /// Time of the previous sample.
    last_time: f64,

    /// Running integrated position.
    position: f64,
}

impl ProfileSampler {
    /// Create a sampler for a solved timing.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::InvalidTimeStep` if `time_step` is not finite
    /// and strictly positive, and `ProfileError::TooManySamples` if the
    /// sample count overflows.
    pub fn new(timing: ProfileTiming, time_step: f64) -> Result<Self> {
        if !(time_step.is_finite() && time_step > 0.0) {
            return Err(ProfileError::InvalidTimeStep(time_step).into());
        }

        let total = timing.total_duration();
        let len = sample_count(total, time_step).ok_or(ProfileError::TooManySamples {
            required: total / time_step,
        })?;

        #[cfg(feature = "defmt")]
        defmt::trace!("sampling {} points at dt={}", len, time_step);

        Ok(Self {
            boundaries: BoundaryVelocities::from_timing(&timing),
            timing,
            time_step,
            index: 0,
            len,
            last_time: 0.0,
            position: 0.0,
        })
    }

    /// Get the timing being sampled.
    #[inline]
    pub fn timing(&self) -> &ProfileTiming {
        &self.timing
    }

    /// Get the boundary velocities used for sampling.
    #[inline]
    pub fn boundaries(&self) -> &BoundaryVelocities {
        &self.boundaries
    }

    /// Get the nominal time step.
    #[inline]
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Get samples remaining.
    #[inline]
    pub fn samples_remaining(&self) -> usize {
        self.len - self.index
    }

    /// Check if every sample has been produced.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.index >= self.len
    }
}

impl Iterator for ProfileSampler {
    type Item = ProfileSample;

    fn next(&mut self) -> Option<ProfileSample> {
        if self.is_complete() {
            return None;
        }

        let is_last = self.index + 1 == self.len;
        let time = if is_last {
            self.timing.total_duration()
        } else {
            self.index as f64 * self.time_step
        };

        let step = if self.index == 0 {
            0.0
        } else if is_last {
            time - self.last_time
        } else {
            self.time_step
        };

        let velocity = self.timing.velocity_at(time, &self.boundaries);
        self.position += velocity * step;
        self.last_time = time;
        self.index += 1;

        Some(ProfileSample::new(time, velocity, self.position))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.samples_remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProfileSampler {}

impl FusedIterator for ProfileSampler {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::KinematicLimits;

    fn reference_timing() -> ProfileTiming {
        ProfileTiming::solve(&KinematicLimits::new(0.6, 0.5, 1.0), 1.6)
    }

    #[test]
    fn test_boundary_velocities() {
        let b = BoundaryVelocities::from_timing(&reference_timing());
        assert!((b.v1 - 0.125).abs() < 1e-12);
        assert!((b.v2 - 0.475).abs() < 1e-12);
        assert!((b.v3 - 0.6).abs() < 1e-12);
        assert!((b.v4 - 0.475).abs() < 1e-12);
        assert!((b.v5 - 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_velocity_continuous_at_boundaries() {
        let timing = reference_timing();
        let b = BoundaryVelocities::from_timing(&timing);
        for segment in Segment::MOVING {
            let (start, end) = timing.segment_bounds(segment).unwrap();
            for edge in [start, end] {
                let before = timing.velocity_at(edge - 1e-9, &b);
                let after = timing.velocity_at(edge + 1e-9, &b);
                assert!((before - after).abs() < 1e-6, "{:?} at {}", segment, edge);
            }
        }
    }

    #[test]
    fn test_velocity_returns_to_rest() {
        let timing = reference_timing();
        let b = BoundaryVelocities::from_timing(&timing);
        assert_eq!(timing.velocity_at(0.0, &b), 0.0);
        assert!(timing.velocity_at(timing.total_duration(), &b).abs() < 1e-12);
        assert_eq!(timing.velocity_at(timing.total_duration() + 1.0, &b), 0.0);
    }

    #[test]
    fn test_exact_displacement_reaches_distance() {
        let timing = reference_timing();
        let b = BoundaryVelocities::from_timing(&timing);
        assert!((timing.displacement_at(timing.total_duration(), &b) - 1.6).abs() < 1e-9);
        assert!((timing.displacement_at(timing.t_acd, &b) - timing.block_displacement).abs() < 1e-9);
        assert_eq!(timing.displacement_at(0.0, &b), 0.0);
    }

    #[test]
    fn test_sample_count() {
        assert_eq!(sample_count(0.0, 0.01), Some(1));
        assert_eq!(sample_count(0.3, 0.1), Some(4));
        assert_eq!(sample_count(0.35, 0.1), Some(5));
        assert_eq!(sample_count(1.0, 0.25), Some(5));
    }

    #[test]
    fn test_sample_count_overflow() {
        assert_eq!(sample_count(4.37, 1e-300), None);
        assert_eq!(sample_count(4.37, 0.0), None);
        assert_eq!(sample_count(f64::INFINITY, 0.01), None);
        assert_eq!(sample_count(0.0, 1e-300), Some(1));
    }

    #[test]
    fn test_sampler_rejects_unrepresentable_count() {
        let timing = reference_timing();
        assert!(matches!(
            ProfileSampler::new(timing, 1e-300),
            Err(crate::error::Error::Profile(ProfileError::TooManySamples { .. }))
        ));
    }

    #[test]
    fn test_sampler_rejects_bad_step() {
        let timing = reference_timing();
        assert!(ProfileSampler::new(timing, 0.0).is_err());
        assert!(ProfileSampler::new(timing, -0.01).is_err());
        assert!(ProfileSampler::new(timing, f64::NAN).is_err());
    }

    #[test]
    fn test_sampler_is_exact_size() {
        let timing = reference_timing();
        let mut sampler = ProfileSampler::new(timing, 0.01).unwrap();
        let expected = sample_count(timing.total_duration(), 0.01).unwrap();

        assert_eq!(sampler.len(), expected);
        sampler.next();
        assert_eq!(sampler.len(), expected - 1);
        assert_eq!(sampler.by_ref().count(), expected - 1);
        assert!(sampler.is_complete());
        assert!(sampler.next().is_none());
    }

    #[test]
    fn test_sampler_clips_last_sample() {
        let timing = reference_timing();
        let mut sampler = ProfileSampler::new(timing, 0.01).unwrap();

        let first = sampler.next().unwrap();
        assert_eq!(first, ProfileSample::new(0.0, 0.0, 0.0));

        let last = sampler.last().unwrap();
        assert_eq!(last.time, timing.total_duration());
        assert!(last.velocity.abs() < 1e-12);
        assert!((last.position - 1.6).abs() <= 0.01 * 0.6);
    }

    #[test]
    fn test_zero_timing_single_sample() {
        let mut sampler = ProfileSampler::new(ProfileTiming::default(), 0.01).unwrap();
        assert_eq!(sampler.next(), Some(ProfileSample::new(0.0, 0.0, 0.0)));
        assert_eq!(sampler.next(), None);
    }
}
