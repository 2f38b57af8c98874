// src/error.rs

//! Error types for profile management

use thiserror::Error;

/// Result type for profile management operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the profile core and by profile managers
#[derive(Error, Debug)]
pub enum Error {
    /// No manager is registered under the requested profile name
    #[error("unknown profile: {0}")]
    UnknownProfile(String),

    /// Target string did not parse as `<arch>-<os>`
    #[error("invalid target {0:?}: expected <arch>-<os>")]
    InvalidTarget(String),

    /// Requested version is not in the profile's supported set
    #[error("unsupported version {version} for profile {profile}")]
    UnsupportedVersion {
        profile: String,
        version: semver::Version,
    },

    /// Version string failed to parse
    #[error("version error: {0}")]
    Version(#[from] semver::Error),

    /// IO error during profile installation or removal
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic failure reported by a profile manager
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
