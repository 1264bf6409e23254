//! Error type for the generation pipeline.

use gyrex_types::ParamError;
use thiserror::Error;

/// Errors that can occur during core generation.
///
/// An empty field is not an error: a parameter set whose field has no
/// solid/void transitions generates a [`MeshData`](gyrex_types::MeshData)
/// with zero-length buffers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerateError {
    /// The parameter record failed validation.
    #[error(transparent)]
    Param(#[from] ParamError),
}
