//! Parameter validation errors.

use thiserror::Error;

/// Errors produced by [`CoreParams::validate`](crate::CoreParams::validate).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParamError {
    /// The cube edge length is not strictly positive.
    #[error("cube size must be positive, got {0} mm")]
    InvalidSize(f64),

    /// The gyroid cell size is not strictly positive.
    #[error("cell size must be positive, got {0} mm")]
    InvalidCellSize(f64),

    /// The voxel resolution is zero.
    #[error("resolution must be at least 1 voxel per axis")]
    InvalidResolution,

    /// The shell wall thickness is negative.
    #[error("shell thickness must be non-negative, got {0} mm")]
    InvalidShellThickness(f64),

    /// The frame beam width is out of range for the cube size.
    #[error("frame beam width must be in (0, size/2), got width={width} mm for size={size} mm")]
    InvalidBeamWidth {
        /// The provided beam width.
        width: f64,
        /// The cube size for reference.
        size: f64,
    },
}
