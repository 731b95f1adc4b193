//! Error types for visage-core
//!
//! Covers the fallible edges around the statistics engine:
//! - Loading tables (wrapped `IoError`)
//! - Configuration files
//! - Face layout construction

use std::path::PathBuf;
use thiserror::Error;
use visage_io::IoError;

use crate::face::FaceRole;

/// Main error type for visage operations
#[derive(Error, Debug)]
pub enum VisageError {
    /// Table loading errors
    #[error("Failed to load table: {0}")]
    Io(#[from] IoError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Face layout errors
    #[error("Face layout unavailable: {0}")]
    Face(#[from] FaceError),

    /// Attribute key not present in the table
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    /// Report serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors building a face layout
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaceError {
    /// Fewer attributes than face roles
    #[error("a face needs at least {required} attributes, the table has {found}")]
    TooFewAttributes { required: usize, found: usize },

    /// A role's attribute has no numeric values
    #[error("no numeric values for {role} ({attribute})")]
    MissingFeature { role: FaceRole, attribute: String },
}

/// Errors loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Explicitly requested file does not exist
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("TOML serialize error: {0}")]
    Serialize(String),

    #[error("Invalid colour: {0}")]
    InvalidColor(String),

    #[error("Palette must contain at least one colour")]
    EmptyPalette,

    /// Explicit face roles must name exactly one attribute per role
    #[error("face roles must list exactly {expected} attributes, got {found}")]
    RoleCount { expected: usize, found: usize },

    #[error("Value out of range: {0}")]
    OutOfRange(String),
}

/// Result type alias for visage operations
pub type VisageResult<T> = Result<T, VisageError>;

/// Result type alias for face layout construction
pub type FaceResult<T> = Result<T, FaceError>;

/// Result type alias for configuration
pub type ConfigResult<T> = Result<T, ConfigError>;
