//! Overlay lifecycle events

use serde::{Deserialize, Serialize};

/// What triggered a dismissal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloseReason {
    /// The host called `close()` directly (or dropped the controller)
    Explicit,

    /// Escape was pressed while open
    EscapeKey,

    /// A pointer went down on the backdrop itself
    BackdropPointer,
}

/// Events emitted by the overlay controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlayEvent {
    /// The overlay became visible
    Opened,

    /// The overlay was dismissed
    Closed {
        /// What triggered the dismissal
        reason: CloseReason,
    },
}
