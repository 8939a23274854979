//! Unit tests for TOML configuration parsing.

use scurve_profile::config::{load_config, ProfileConfig};
use scurve_profile::motion::DEFAULT_TIME_STEP;

/// Test parsing a limits table from TOML.
#[test]
fn test_parse_limits() {
    let toml_str = r#"
[limits]
max_velocity = 0.6
max_acceleration = 0.5
max_jerk = 1.0
"#;

    let config: ProfileConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.limits.max_velocity, 0.6);
    assert_eq!(config.limits.max_acceleration, 0.5);
    assert_eq!(config.limits.max_jerk, 1.0);
    assert!(config.moves.is_empty());
}

/// Test parsing named moves with and without a time step.
#[test]
fn test_parse_moves() {
    let toml_str = r#"
[limits]
max_velocity = 2.0
max_acceleration = 4.0
max_jerk = 40.0

[moves.long]
distance = 10.0

[moves.fine]
distance = 0.25
time_step = 0.0005
"#;

    let config: ProfileConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let long = config.move_config("long").expect("Move not found");
    let fine = config.move_config("fine").expect("Move not found");

    assert_eq!(long.distance, 10.0);
    assert_eq!(long.time_step, DEFAULT_TIME_STEP);
    assert_eq!(fine.time_step, 0.0005);

    let mut names: Vec<&str> = config.move_names().collect();
    names.sort_unstable();
    assert_eq!(names, ["fine", "long"]);
}

/// Test that integer literals are accepted for float fields.
#[test]
fn test_parse_integer_values() {
    let toml_str = r#"
[limits]
max_velocity = 1
max_acceleration = 2
max_jerk = 10

[moves.unit]
distance = 1
"#;

    let config: ProfileConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(config.limits.max_jerk, 10.0);
    assert_eq!(config.move_config("unit").unwrap().distance, 1.0);
}

/// Test that a missing limit is rejected during parsing.
#[test]
fn test_missing_limit_rejected() {
    let toml_str = r#"
[limits]
max_velocity = 0.6
max_acceleration = 0.5
"#;

    let result: Result<ProfileConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject limits without max_jerk");
}

/// Test loading the configuration from a file.
#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join("scurve_profile_load_test.toml");
    std::fs::write(
        &path,
        "[limits]\nmax_velocity = 0.6\nmax_acceleration = 0.5\nmax_jerk = 1.0\n\n[moves.demo]\ndistance = 1.6\n",
    )
    .expect("Failed to write temp file");

    let config = load_config(&path).expect("Failed to load config");
    let _ = std::fs::remove_file(&path);

    assert!(config.move_config("demo").is_some());
}
