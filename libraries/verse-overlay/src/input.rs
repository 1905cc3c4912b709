//! Input vocabulary consumed by the overlay controller
//!
//! Hosts translate their native events (DOM `keydown`/`pointerdown`,
//! terminal key codes) into these values while the overlay is open.

use serde::{Deserialize, Serialize};

/// Keyboard input the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Dismisses the overlay
    Escape,

    /// Focus traversal; `shift` reverses direction
    Tab {
        /// Whether Shift was held
        shift: bool,
    },
}

/// Where a pointer-down landed relative to the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerTarget {
    /// Exactly the backdrop element, not a descendant of it
    Backdrop,

    /// Anywhere inside the overlay content
    Content,
}
