//! Configuration module for scurve-profile.
//!
//! Provides types for loading and validating kinematic limits and named
//! moves from TOML files (with `std` feature) or pre-parsed data.

mod limits;
#[cfg(feature = "std")]
mod loader;
mod moves;
mod profile;
mod validation;

pub use limits::LimitsConfig;
pub use moves::MoveConfig;
pub use profile::{ProfileConfig, MAX_MOVES};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
