//! Host surface abstraction for the overlay
//!
//! Abstracts the presentation environment (DOM in production, a scripted
//! double in tests) behind focus and scroll primitives.

use crate::error::Result;

/// Host environment the overlay lives in
///
/// Implementors expose focus queries/assignment over their focusable
/// elements and a page scroll lock. `lock_scroll` must compensate for the
/// removed scrollbar width so page layout does not shift while the
/// overlay is open; `unlock_scroll` removes the compensation again.
///
/// The controller tolerates any of these operations failing: errors are
/// logged and the lifecycle continues.
pub trait OverlaySurface {
    /// Identifier for a focusable element in the host document
    type Target: Clone + PartialEq;

    /// Element that currently holds focus, if any
    fn focused(&self) -> Option<Self::Target>;

    /// Move focus to the given element
    fn set_focus(&mut self, target: &Self::Target) -> Result<()>;

    /// Whether the element is still attached to the document
    fn is_attached(&self, target: &Self::Target) -> bool;

    /// Focusable descendants of the overlay, in traversal order
    fn focusables(&self) -> Vec<Self::Target>;

    /// The overlay's designated close control
    fn close_control(&self) -> Option<Self::Target>;

    /// Suspend page scrolling, padding for the removed scrollbar width
    fn lock_scroll(&mut self) -> Result<()>;

    /// Restore page scrolling and remove the compensation padding
    fn unlock_scroll(&mut self) -> Result<()>;
}
