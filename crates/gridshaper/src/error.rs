//! Error types for blueprint generation and serialization.

use glam::IVec3;
use thiserror::Error;

/// Errors produced while generating or writing a blueprint.
#[derive(Error, Debug)]
pub enum BlueprintError {
  /// The cancel token was signalled; no partial result is returned.
  #[error("blueprint generation was cancelled")]
  Cancelled,

  /// The mesh has no usable triangles to size a grid from.
  #[error("mesh has no triangles")]
  EmptyMesh,

  /// Mesh bounds contain NaN or infinite coordinates.
  #[error("mesh bounds are not finite")]
  InvalidBounds,

  /// The grid needed to cover the model exceeds the configured limit.
  #[error("model needs {required} cells per axis, limit is {limit}")]
  GridTooLarge { required: usize, limit: usize },

  /// Cell content uses a representation the writer cannot emit (shape lists).
  #[error("cell {cell} holds unsupported content {content}")]
  UnsupportedContent { cell: IVec3, content: i32 },

  /// Cell content does not name a catalog shape.
  #[error("cell {cell} references unknown shape {content}")]
  UnknownShape { cell: IVec3, content: i32 },

  #[error(transparent)]
  Io(#[from] std::io::Error),
}

/// Result alias for blueprint operations.
pub type Result<T> = std::result::Result<T, BlueprintError>;
