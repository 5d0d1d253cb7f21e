//! Configuration errors

use thiserror::Error;

/// Reasons a [`StringConfig`](crate::StringConfig) is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A numeric field is NaN or infinite
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    /// The touch threshold is negative
    #[error("touch threshold must not be negative, got {0}")]
    NegativeThreshold(f32),

    /// A visual size (stroke width, marker radius) is negative
    #[error("{field} must not be negative, got {value}")]
    NegativeSize { field: &'static str, value: f32 },

    /// Keyframe segments need a positive duration
    #[error("step duration must be positive, got {0}ms")]
    InvalidStepDuration(f32),

    /// The string needs a positive sampling interval
    #[error("sample step must be positive, got {0}")]
    InvalidSampleStep(f32),

    /// A string length (initial or keyframe) is negative
    #[error("string length must not be negative, got {value} at {location}")]
    NegativeLength { location: String, value: f32 },

    /// A wave keyframe direction other than 1 or -1
    #[error("swing direction must be 1 or -1, got {0}")]
    InvalidDirection(i32),
}

/// Result type for configuration checks
pub type Result<T> = std::result::Result<T, ConfigError>;
