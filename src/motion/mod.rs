//! Motion module for scurve-profile.
//!
//! Provides the constraint solver, the piecewise acceleration law and the
//! fixed-step sampler for jerk-limited profiles.

mod generator;
mod limits;
mod sampler;
mod segment;
mod timing;

#[cfg(feature = "alloc")]
pub use generator::generate_for;
pub use generator::{sampler_for, ProfileGenerator, DEFAULT_TIME_STEP};
pub use limits::KinematicLimits;
pub use sampler::{sample_count, BoundaryVelocities, ProfileSample, ProfileSampler};
pub use segment::{MotionPhase, Segment};
pub use timing::ProfileTiming;
