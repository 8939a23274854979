//! Unit tests for configuration validation.

use scurve_profile::config::{validate_config, ProfileConfig};
use scurve_profile::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[limits]
max_velocity = 0.6
max_acceleration = 0.5
max_jerk = 1.0

[moves.demo]
distance = 1.6
"#;

    let config: ProfileConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a negative limit.
#[test]
fn test_negative_limit() {
    let toml_str = r#"
[limits]
max_velocity = 0.6
max_acceleration = -0.5
max_jerk = 1.0
"#;

    let config: ProfileConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidLimit { name: "max_acceleration", .. }))
    ));
}

/// Test validation fails for a negative distance.
#[test]
fn test_negative_distance() {
    let toml_str = r#"
[limits]
max_velocity = 0.6
max_acceleration = 0.5
max_jerk = 1.0

[moves.back]
distance = -2.0
"#;

    let config: ProfileConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(result, Err(Error::Config(ConfigError::InvalidDistance { .. }))));
}

/// Test validation fails for a non-positive time step.
#[test]
fn test_zero_time_step() {
    let toml_str = r#"
[limits]
max_velocity = 0.6
max_acceleration = 0.5
max_jerk = 1.0

[moves.frozen]
distance = 1.0
time_step = 0.0
"#;

    let config: ProfileConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(result, Err(Error::Config(ConfigError::InvalidTimeStep { .. }))));
}

/// Test that non-finite values from TOML are rejected.
#[test]
fn test_infinite_limit() {
    let toml_str = r#"
[limits]
max_velocity = inf
max_acceleration = 0.5
max_jerk = 1.0
"#;

    let config: ProfileConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_err());
}
