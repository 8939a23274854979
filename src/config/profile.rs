//! Profile configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use crate::error::{ConfigError, Error, Result};
use crate::motion::{ProfileGenerator, ProfileSampler};

use super::limits::LimitsConfig;
use super::moves::MoveConfig;

/// Maximum number of named moves in one configuration.
pub const MAX_MOVES: usize = 16;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    /// Kinematic limits shared by every move.
    pub limits: LimitsConfig,

    /// Named moves.
    #[serde(default)]
    pub moves: FnvIndexMap<String<32>, MoveConfig, MAX_MOVES>,
}

impl ProfileConfig {
    /// Create a configuration with no moves.
    pub fn new(limits: LimitsConfig) -> Self {
        Self {
            limits,
            moves: FnvIndexMap::new(),
        }
    }

    /// Build a generator for the configured limits.
    pub fn generator(&self) -> ProfileGenerator {
        ProfileGenerator::from_limits(self.limits.to_limits())
    }

    /// Get a move configuration by name.
    pub fn move_config(&self, name: &str) -> Option<&MoveConfig> {
        self.moves
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Get a move configuration by name, or a `MoveNotFound` error.
    pub fn get_or_error(&self, name: &str) -> Result<&MoveConfig> {
        self.move_config(name).ok_or_else(|| {
            let name = String::try_from(name).unwrap_or_default();
            Error::Config(ConfigError::MoveNotFound(name))
        })
    }

    /// Create a sampler for a named move.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MoveNotFound` for unknown names, or a profile
    /// error if the move is invalid.
    pub fn sampler(&self, name: &str) -> Result<ProfileSampler> {
        let mv = self.get_or_error(name)?;
        self.generator().sampler(mv.distance, mv.time_step)
    }

    /// Add or replace a named move.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the name is longer than 32 bytes or the
    /// configuration already holds [`MAX_MOVES`] moves.
    pub fn insert_move(&mut self, name: &str, mv: MoveConfig) -> Result<()> {
        let key = String::try_from(name).map_err(|_| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("move name too long").unwrap_or_default(),
            ))
        })?;
        self.moves.insert(key, mv).map_err(|_| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("too many moves").unwrap_or_default(),
            ))
        })?;
        Ok(())
    }

    /// List all move names.
    pub fn move_names(&self) -> impl Iterator<Item = &str> {
        self.moves.keys().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let mut config = ProfileConfig::new(LimitsConfig::new(0.6, 0.5, 1.0));
        config.insert_move("demo", MoveConfig::new(1.6)).unwrap();

        assert!(config.move_config("demo").is_some());
        assert!(config.move_config("missing").is_none());
        assert!(matches!(
            config.get_or_error("missing"),
            Err(Error::Config(ConfigError::MoveNotFound(_)))
        ));
        assert_eq!(config.move_names().count(), 1);
    }

    #[test]
    fn test_sampler_for_named_move() {
        let mut config = ProfileConfig::new(LimitsConfig::new(0.6, 0.5, 1.0));
        config.insert_move("demo", MoveConfig::new(1.6)).unwrap();

        let sampler = config.sampler("demo").unwrap();
        assert_eq!(sampler.time_step(), 0.01);
        assert!(config.sampler("missing").is_err());
    }

    #[test]
    fn test_insert_rejects_long_name() {
        let mut config = ProfileConfig::new(LimitsConfig::new(0.6, 0.5, 1.0));
        let long = "a_move_name_that_is_far_longer_than_32_bytes";
        assert!(config.insert_move(long, MoveConfig::new(1.0)).is_err());
    }
}
