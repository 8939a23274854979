//! Error types for scurve-profile.
//!
//! Provides unified error handling across profile generation, configuration
//! loading, and sample export.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all scurve-profile operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Profile request rejected before sampling
    Profile(ProfileError),
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Sample export error (std only)
    #[cfg(feature = "std")]
    Export(ExportError),
}

/// Profile generation errors.
///
/// All of these are detected before the first sample is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// Distance is negative, NaN or infinite
    InvalidDistance(f64),
    /// Time step is not strictly positive and finite
    InvalidTimeStep(f64),
    /// A kinematic limit is NaN or infinite
    InvalidLimit {
        /// Limit name
        name: &'static str,
        /// Offending value
        value: f64,
    },
    /// Sample sequence does not fit in the caller's fixed-capacity buffer
    CapacityExceeded {
        /// Number of samples the profile produces
        required: usize,
        /// Buffer capacity
        capacity: usize,
    },
    /// Sample sequence is too long to count or allocate
    TooManySamples {
        /// Approximate number of time steps the request needs
        required: f64,
    },
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Move name not found in configuration
    MoveNotFound(heapless::String<32>),
    /// Limit is negative, NaN or infinite
    InvalidLimit {
        /// Limit name
        name: &'static str,
        /// Offending value
        value: f64,
    },
    /// Move distance is negative, NaN or infinite
    InvalidDistance {
        /// Move name
        name: heapless::String<32>,
        /// Offending value
        value: f64,
    },
    /// Move time step is not strictly positive and finite
    InvalidTimeStep {
        /// Move name
        name: heapless::String<32>,
        /// Offending value
        value: f64,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Keep as much of a message as fits in an error payload.
#[cfg(feature = "std")]
pub(crate) fn truncated<const N: usize>(message: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in message.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Sample export errors.
#[cfg(feature = "std")]
#[derive(Debug, Clone, PartialEq)]
pub enum ExportError {
    /// Writing to the destination failed
    Io(heapless::String<128>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Profile(e) => write!(f, "Profile error: {}", e),
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            #[cfg(feature = "std")]
            Error::Export(e) => write!(f, "Export error: {}", e),
        }
    }
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::InvalidDistance(v) => {
                write!(f, "Invalid distance: {}. Must be finite and >= 0", v)
            }
            ProfileError::InvalidTimeStep(v) => {
                write!(f, "Invalid time step: {}. Must be finite and > 0", v)
            }
            ProfileError::InvalidLimit { name, value } => {
                write!(f, "Invalid {}: {}. Must be finite", name, value)
            }
            ProfileError::CapacityExceeded { required, capacity } => {
                write!(f, "Profile needs {} samples, buffer holds {}", required, capacity)
            }
            ProfileError::TooManySamples { required } => {
                write!(f, "Profile needs about {} samples. Use a larger time step", required)
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MoveNotFound(name) => write!(f, "Move '{}' not found", name),
            ConfigError::InvalidLimit { name, value } => {
                write!(f, "Invalid {}: {}. Must be finite and >= 0", name, value)
            }
            ConfigError::InvalidDistance { name, value } => {
                write!(f, "Move '{}' has invalid distance {}. Must be finite and >= 0", name, value)
            }
            ConfigError::InvalidTimeStep { name, value } => {
                write!(f, "Move '{}' has invalid time step {}. Must be finite and > 0", name, value)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

// Conversion impls
impl From<ProfileError> for Error {
    fn from(e: ProfileError) -> Self {
        Error::Profile(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

#[cfg(feature = "std")]
impl From<ExportError> for Error {
    fn from(e: ExportError) -> Self {
        Error::Export(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ProfileError {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for ExportError {}
