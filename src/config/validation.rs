//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{LimitsConfig, MoveConfig, ProfileConfig};

/// Validate a profile configuration.
///
/// Checks:
/// - Limits are finite and non-negative
/// - Every move distance is finite and non-negative
/// - Every move time step is finite and positive
pub fn validate_config(config: &ProfileConfig) -> Result<()> {
    validate_limits(&config.limits)?;

    for (name, mv) in config.moves.iter() {
        validate_move(name, mv)?;
    }

    Ok(())
}

fn validate_limits(limits: &LimitsConfig) -> Result<()> {
    // stricter than the generator, which folds negatives to magnitudes
    for (name, value) in limits.fields() {
        if !(value.is_finite() && value >= 0.0) {
            return Err(Error::Config(ConfigError::InvalidLimit { name, value }));
        }
    }
    Ok(())
}

fn validate_move(name: &heapless::String<32>, mv: &MoveConfig) -> Result<()> {
    if !mv.has_valid_distance() {
        return Err(Error::Config(ConfigError::InvalidDistance {
            name: name.clone(),
            value: mv.distance,
        }));
    }

    if !mv.has_valid_time_step() {
        return Err(Error::Config(ConfigError::InvalidTimeStep {
            name: name.clone(),
            value: mv.time_step,
        }));
    }

    Ok(())
}
