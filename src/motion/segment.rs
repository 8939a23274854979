//! Piecewise acceleration law over the seven profile segments.
//!
//! Segment ranges are left-open and right-closed, `(start, end]`. The instant
//! `t = 0` and everything past the total duration are [`Segment::Rest`]. The
//! lookup table in [`ProfileTiming::segment_at`] is the only place this
//! convention is encoded; the acceleration law and the velocity closed forms
//! both go through it.

use super::timing::ProfileTiming;

/// One maximal interval with a single closed-form acceleration expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    /// Before the start or after the end of the profile.
    Rest,
    /// Acceleration ramps up at `+max_jerk`.
    JerkIn,
    /// Acceleration held at its peak.
    ConstantAccel,
    /// Acceleration ramps back to zero at `-max_jerk`.
    JerkOut,
    /// Constant velocity.
    Cruise,
    /// Deceleration begins, acceleration ramps down at `-max_jerk`.
    DecelJerkIn,
    /// Acceleration held at its negative peak.
    ConstantDecel,
    /// Acceleration ramps back to zero at `+max_jerk`.
    DecelJerkOut,
}

/// Coarse phase of a profile segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionPhase {
    /// Speeding up toward cruise velocity.
    Accelerating,
    /// Moving at constant cruise velocity.
    Cruising,
    /// Slowing down to rest.
    Decelerating,
    /// Not moving.
    AtRest,
}

impl Segment {
    /// Moving segments in time order.
    pub const MOVING: [Segment; 7] = [
        Segment::JerkIn,
        Segment::ConstantAccel,
        Segment::JerkOut,
        Segment::Cruise,
        Segment::DecelJerkIn,
        Segment::ConstantDecel,
        Segment::DecelJerkOut,
    ];

    /// Sign of the jerk applied during this segment (`-1`, `0` or `1`).
    ///
    /// Ramp segments have a slope of exactly `sign * max_jerk`.
    pub fn jerk_sign(self) -> f64 {
        match self {
            Segment::JerkIn | Segment::DecelJerkOut => 1.0,
            Segment::JerkOut | Segment::DecelJerkIn => -1.0,
            Segment::Rest | Segment::ConstantAccel | Segment::Cruise | Segment::ConstantDecel => {
                0.0
            }
        }
    }

    /// Coarse phase this segment belongs to.
    pub fn phase(self) -> MotionPhase {
        match self {
            Segment::JerkIn | Segment::ConstantAccel | Segment::JerkOut => {
                MotionPhase::Accelerating
            }
            Segment::Cruise => MotionPhase::Cruising,
            Segment::DecelJerkIn | Segment::ConstantDecel | Segment::DecelJerkOut => {
                MotionPhase::Decelerating
            }
            Segment::Rest => MotionPhase::AtRest,
        }
    }
}

impl ProfileTiming {
    /// Find the segment active at `time`.
    ///
    /// Scans lower bounds from the largest down and returns the first one
    /// that `time` strictly exceeds, so zero-length segments are skipped and
    /// a boundary instant belongs to the segment that ends there.
    pub fn segment_at(&self, time: f64) -> Segment {
        let total = self.total_duration();
        // NaN falls through to Rest as well
        if !(time > 0.0 && time <= total) {
            return Segment::Rest;
        }

        let table = [
            (total - self.t1, Segment::DecelJerkOut),
            (self.t_acdc + self.t1, Segment::ConstantDecel),
            (self.t_acdc, Segment::DecelJerkIn),
            (self.t_acd, Segment::Cruise),
            (self.t1 + self.t1c, Segment::JerkOut),
            (self.t1, Segment::ConstantAccel),
        ];

        table
            .iter()
            .find(|(start, _)| time > *start)
            .map_or(Segment::JerkIn, |&(_, segment)| segment)
    }

    /// Start and end time of a moving segment, `None` for [`Segment::Rest`].
    pub fn segment_bounds(&self, segment: Segment) -> Option<(f64, f64)> {
        let total = self.total_duration();
        let bounds = match segment {
            Segment::Rest => return None,
            Segment::JerkIn => (0.0, self.t1),
            Segment::ConstantAccel => (self.t1, self.t1 + self.t1c),
            Segment::JerkOut => (self.t1 + self.t1c, self.t_acd),
            Segment::Cruise => (self.t_acd, self.t_acdc),
            Segment::DecelJerkIn => (self.t_acdc, self.t_acdc + self.t1),
            Segment::ConstantDecel => (self.t_acdc + self.t1, total - self.t1),
            Segment::DecelJerkOut => (total - self.t1, total),
        };
        Some(bounds)
    }

    /// Instantaneous acceleration at `time`.
    pub fn acceleration_at(&self, time: f64) -> f64 {
        let jerk = self.max_jerk;
        match self.segment_at(time) {
            Segment::Rest | Segment::Cruise => 0.0,
            Segment::JerkIn => jerk * time,
            Segment::ConstantAccel => jerk * self.t1,
            Segment::JerkOut => jerk * (self.t_acd - time),
            Segment::DecelJerkIn => -jerk * (time - self.t_acdc),
            Segment::ConstantDecel => -jerk * self.t1,
            Segment::DecelJerkOut => -jerk * (self.total_duration() - time),
        }
    }

    /// Phase of the motion at `time`.
    #[inline]
    pub fn phase_at(&self, time: f64) -> MotionPhase {
        self.segment_at(time).phase()
    }
}
