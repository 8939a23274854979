//! Constraint solver for jerk-limited profiles.
//!
//! Derives the seven-segment timing of a rest-to-rest S-curve in two stages:
//! a jerk-free trapezoidal pass picks the reachable peak velocity, then jerk
//! limiting is overlaid on the acceleration using the same clamp pattern.

use libm::sqrt;

use super::limits::KinematicLimits;

/// Division that treats a zero denominator as a zero result.
///
/// Zero limits and zero distances collapse the profile instead of
/// propagating `inf` or `NaN` into the segment boundaries.
#[inline]
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Segment boundary times of a solved profile.
///
/// Recomputed for every generation call. All values are non-negative and
/// ordered `0 <= t1 <= t1 + t1c <= t_acd <= t_acdc <= total_duration()`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProfileTiming {
    /// Jerk ramp time from zero to peak acceleration.
    pub t1: f64,

    /// Time spent holding peak acceleration.
    pub t1c: f64,

    /// Duration of the ramp-up block (`2 * t1 + t1c`).
    pub t_acd: f64,

    /// End of the cruise segment, where deceleration begins.
    pub t_acdc: f64,

    /// Velocity at the end of the ramp-up block (cruise velocity).
    pub peak_velocity: f64,

    /// Displacement covered by the ramp-up block.
    pub block_displacement: f64,

    /// Jerk magnitude the timing was solved for.
    pub max_jerk: f64,
}

impl ProfileTiming {
    /// Solve the segment timing for a rest-to-rest move of `distance`.
    ///
    /// `distance` must be finite and non-negative; callers validate it first.
    /// Zero distance or any zero limit yields the all-zero timing.
    pub fn solve(limits: &KinematicLimits, distance: f64) -> Self {
        let max_vel = limits.max_velocity();
        let max_accel = limits.max_acceleration();
        let max_jerk = limits.max_jerk();

        // Stage 1: trapezoidal velocity profile without jerk limiting.
        // The clamp picks triangular vs trapezoidal shape.
        let time_to_vel = sqrt(ratio(distance, max_accel)).min(ratio(max_vel, max_accel));
        let achievable_vel = time_to_vel * max_accel;
        let vel_coast = ratio(distance, max_accel * time_to_vel) - time_to_vel;
        let ramp_window = time_to_vel + vel_coast;

        // Stage 2: jerk limiting on the acceleration itself.
        let t1 = sqrt(ratio(achievable_vel, max_jerk))
            .min(ratio(max_accel, max_jerk))
            .min(ramp_window / 2.0);
        let t1c = (ramp_window - 2.0 * t1)
            .min(ratio(achievable_vel, max_jerk * t1) - t1)
            .max(0.0);
        let t_acd = 2.0 * t1 + t1c;

        // Stage 3: cruise time covers whatever the two blocks leave over.
        let peak_velocity = max_jerk * t1 * (t1 + t1c);
        let block_displacement = t_acd * peak_velocity / 2.0;
        let cruise = ratio(distance - 2.0 * block_displacement, peak_velocity).max(0.0);
        let t_acdc = t_acd + cruise;

        let timing = Self {
            t1,
            t1c,
            t_acd,
            t_acdc,
            peak_velocity,
            block_displacement,
            max_jerk,
        };

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "solved profile: t1={} t1c={} t_acd={} t_acdc={} total={}",
            timing.t1,
            timing.t1c,
            timing.t_acd,
            timing.t_acdc,
            timing.total_duration()
        );

        timing
    }

    /// Total profile duration `T = t_acdc + t_acd`.
    #[inline]
    pub fn total_duration(&self) -> f64 {
        self.t_acdc + self.t_acd
    }

    /// Duration of the constant-velocity segment.
    #[inline]
    pub fn cruise_duration(&self) -> f64 {
        self.t_acdc - self.t_acd
    }

    /// Peak acceleration magnitude reached (`max_jerk * t1`).
    #[inline]
    pub fn peak_acceleration(&self) -> f64 {
        self.max_jerk * self.t1
    }

    /// Check if the profile has zero duration.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.total_duration() == 0.0
    }
}
