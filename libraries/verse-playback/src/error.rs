//! Error types for player adapter integration

use thiserror::Error;

/// Errors raised by player adapter implementations
///
/// Coordinator operations themselves never fail; errors exist only at the
/// seam where a host attaches a concrete embedded player.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The mount point no longer exists in the host document
    #[error("Mount point not available: {0}")]
    MountUnavailable(String),

    /// The external player rejected or failed to load the media
    #[error("Media failed to load: {0}")]
    MediaUnavailable(String),

    /// The adapter is disabled by configuration
    #[error("Adapter is disabled")]
    Disabled,
}

/// Result type for adapter operations
pub type Result<T> = std::result::Result<T, AdapterError>;
