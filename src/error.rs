use thiserror::Error;

/// Rejected body constants.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum BodyError {
    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f32),

    #[error("moment of inertia must be positive, got {0}")]
    NonPositiveMomentOfInertia(f32),
}

/// Errors that can occur while loading or validating a [`crate::SimConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid body: {0}")]
    Body(#[from] BodyError),

    #[error("invalid clamp bounds: min ({min_x}, {min_y}) max ({max_x}, {max_y})")]
    InvalidBounds {
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
    },

    #[error("gravity must be finite, got {0}")]
    InvalidGravity(f32),
}
