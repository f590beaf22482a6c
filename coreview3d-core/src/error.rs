//! Error types for CoreView3D

use thiserror::Error;

/// Main error type for CoreView3D operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid trajectory: {0}")]
    InvalidTrajectory(String),

    #[error("Invalid cross-section: {0}")]
    InvalidSection(String),

    #[error("Unknown scene object type: {0}")]
    UnknownType(String),

    #[error("Malformed assay interval: {0}")]
    MalformedInterval(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for CoreView3D operations
pub type Result<T> = std::result::Result<T, Error>;
