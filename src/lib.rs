//! # scurve-profile
//!
//! Jerk-limited ("S-curve") one-dimensional motion profiles.
//!
//! Given a travel distance and limits on velocity, acceleration and jerk,
//! the generator solves a seven-segment rest-to-rest profile and samples it
//! at a fixed time step as `(time, velocity, position)` triples.
//!
//! ## Features
//!
//! - **Two-stage constraint solver**: trapezoidal pass, then jerk limiting
//!   on the acceleration, degrading cleanly for short moves and zero limits
//! - **Closed-form velocity**: per-segment antiderivatives from boundary
//!   velocities computed once per move
//! - **Lazy sampling**: `ProfileSampler` is an exact-size iterator that
//!   works without an allocator
//! - **no_std compatible**: `Vec` output with `alloc`, fixed-capacity
//!   `heapless::Vec` output without it
//! - **Configuration-driven**: limits and named moves from TOML files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scurve_profile::ProfileGenerator;
//!
//! let generator = ProfileGenerator::new(0.6, 0.5, 1.0);
//! let samples = generator.generate(1.6)?;
//!
//! let last = samples.last().unwrap();
//! assert!((last.position - 1.6).abs() < 0.01 * 0.6);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables TOML loading and CSV export
//! - `alloc`: Enables `Vec` output for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
#[cfg(feature = "std")]
pub mod export;
pub mod motion;

// Re-exports for ergonomic API
pub use config::{validate_config, LimitsConfig, MoveConfig, ProfileConfig};
pub use error::{Error, Result};
pub use motion::{
    sampler_for, BoundaryVelocities, KinematicLimits, MotionPhase, ProfileGenerator,
    ProfileSample, ProfileSampler, ProfileTiming, Segment, DEFAULT_TIME_STEP,
};

#[cfg(feature = "alloc")]
pub use motion::generate_for;

// Configuration loading and export (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
#[cfg(feature = "std")]
pub use export::{to_csv_string, write_csv};
