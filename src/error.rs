//! Error types
//!
//! Everything the core can fail on at runtime is recoverable by construction
//! (ambiguous geometry is a no-op, ball contact is a level reload). What's left
//! here are the collaborator failures surfaced at load/save time.

use std::path::PathBuf;

use crate::level::LevelId;

/// Invalid polygon input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("polygon has {vertices} vertices but {flags} rigidity flags")]
    RigidityMismatch { vertices: usize, flags: usize },

    #[error("polygon vertex {index} is not finite")]
    NonFinite { index: usize },

    #[error("polygon has zero area")]
    ZeroArea,

    #[error("polygon edges {a} and {b} intersect")]
    SelfIntersecting { a: usize, b: usize },
}

/// Level data could not be produced
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("level {0} not found")]
    NotFound(LevelId),

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("level {id} is malformed")]
    Parse {
        id: LevelId,
        #[source]
        source: serde_json::Error,
    },

    #[error("level {id} has an invalid outline")]
    Outline {
        id: LevelId,
        #[source]
        source: GeometryError,
    },

    #[error("level {id} ball {index} has invalid radius {radius}")]
    BadBall { id: LevelId, index: usize, radius: f64 },
}

/// Save record storage failure
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("save record is corrupt")]
    Json(#[from] serde_json::Error),

    #[error("storage unavailable")]
    Unavailable,
}

/// Controller-level failure
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Level(#[from] LevelError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("level {0} is locked")]
    Locked(LevelId),
}
