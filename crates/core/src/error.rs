//! Error types for clusterpolate

use thiserror::Error;

/// Main error type for clusterpolate operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("mismatched input lengths: {points} points vs {values} values")]
    MismatchedLengths { points: usize, values: usize },

    #[error("kernel radius must be finite and positive, got {radius}")]
    InvalidRadius { radius: f64 },

    #[error("kernel has no interior support")]
    DegenerateKernel,

    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidGridSize { width: usize, height: usize },

    #[error("degenerate query area: ({x0}, {y0}) to ({x1}, {y1})")]
    DegenerateArea { x0: f64, y0: f64, x1: f64, y1: f64 },

    #[error("invalid membership ramp: min {min} must be below max {max}")]
    InvalidMembershipRamp { min: f64, max: f64 },

    #[error("invalid grid dimensions: {width}x{height} for buffer of length {len}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("index out of bounds: ({row}, {col}) in grid of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("grid size mismatch: expected ({er}, {ec}), got ({ar}, {ac})")]
    SizeMismatch { er: usize, ec: usize, ar: usize, ac: usize },

    #[error("need at least {needed} points, got {got}")]
    InsufficientPoints { needed: usize, got: usize },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for clusterpolate operations
pub type Result<T> = std::result::Result<T, Error>;
