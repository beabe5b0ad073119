//! Error types for assembly, tile set construction and persistence

use std::path::PathBuf;

use thiserror::Error;

use crate::spatial::Position;
use crate::tiles::GluePattern;

/// Main error type for all assembly operations
#[derive(Debug, Error)]
pub enum AlgorithmError {
    /// Construction argument validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    Configuration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Directed growth found several tile types fitting one frontier position
    ///
    /// The round that raised it has not placed any tile.
    #[error(
        "Non-deterministic growth at {position}: tile types [{}] all fit",
        .candidates.join(", ")
    )]
    NonDeterminism {
        /// Frontier position with more than one match
        position: Position,
        /// Names of every matching tile type, in tile set order
        candidates: Vec<String>,
    },

    /// Reverse name lookup for a glue pattern absent from the tile set
    #[error("No tile type with glues {pattern} in the tile set")]
    NotFound {
        /// The pattern that was looked up
        pattern: GluePattern,
    },

    /// Placement attempted on a position that already holds a tile
    #[error("Position {position} is already occupied")]
    PositionOccupied {
        /// The occupied position
        position: Position,
    },

    /// Malformed persisted record
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", .path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to encode or write an exported image
    #[error("Failed to export image to '{}': {source}", .path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Export requested for an assembly without any tile
    #[error("Assembly holds no tiles to export")]
    EmptyAssembly,
}

/// Convenience type alias for assembly results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Create an invalid configuration error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::Configuration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to a path and operation
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> AlgorithmError {
    AlgorithmError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
