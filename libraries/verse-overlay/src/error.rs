//! Error types for overlay surface integration

use thiserror::Error;

/// Errors raised by overlay surface implementations
///
/// Controller operations themselves never fail; surface errors are logged
/// and swallowed so that a degraded host (an element vanishing mid-frame)
/// can never break the open/close lifecycle.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The focus target is no longer attached to the document
    #[error("Focus target is detached")]
    TargetDetached,

    /// The host could not apply or release the scroll lock
    #[error("Scroll lock failed: {0}")]
    ScrollLock(String),
}

/// Result type for surface operations
pub type Result<T> = std::result::Result<T, SurfaceError>;
