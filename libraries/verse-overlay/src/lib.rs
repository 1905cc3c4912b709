//! Verse Player - Overlay Lifecycle
//!
//! Modal overlay lifecycle management for Verse Player.
//!
//! This crate provides:
//! - Idempotent open/close of an exclusive full-screen surface
//! - Focus capture on open and restore on close
//! - Focus-trap traversal (Tab/Shift+Tab wrapping first and last)
//! - Scroll lock with scrollbar-width compensation
//! - Dismissal via explicit close, Escape, or a backdrop pointer
//!
//! # Architecture
//!
//! `verse-overlay` is completely platform-agnostic: the presentation
//! environment (DOM, TUI, test double) sits behind the [`OverlaySurface`]
//! trait, and the controller owns only the lifecycle state machine.
//! Acquisition and release of the paired side effects go through a single
//! shared path, so no exit route can leave the page half-locked.
//!
//! # Example
//!
//! ```rust
//! use verse_overlay::{Key, OverlayController, OverlaySurface, PointerTarget, Result};
//!
//! // Implement OverlaySurface for your host environment
//! struct DemoSurface {
//!     focused: Option<&'static str>,
//!     scroll_locked: bool,
//! }
//!
//! impl OverlaySurface for DemoSurface {
//!     type Target = &'static str;
//!
//!     fn focused(&self) -> Option<&'static str> {
//!         self.focused
//!     }
//!
//!     fn set_focus(&mut self, target: &&'static str) -> Result<()> {
//!         self.focused = Some(*target);
//!         Ok(())
//!     }
//!
//!     fn is_attached(&self, _target: &&'static str) -> bool {
//!         true
//!     }
//!
//!     fn focusables(&self) -> Vec<&'static str> {
//!         vec!["close", "next"]
//!     }
//!
//!     fn close_control(&self) -> Option<&'static str> {
//!         Some("close")
//!     }
//!
//!     fn lock_scroll(&mut self) -> Result<()> {
//!         self.scroll_locked = true;
//!         Ok(())
//!     }
//!
//!     fn unlock_scroll(&mut self) -> Result<()> {
//!         self.scroll_locked = false;
//!         Ok(())
//!     }
//! }
//!
//! let surface = DemoSurface {
//!     focused: Some("play-button"),
//!     scroll_locked: false,
//! };
//! let mut overlay = OverlayController::new(surface);
//!
//! // Opening captures focus and defers the initial assignment to the
//! // next paint frame
//! overlay.open();
//! overlay.on_frame();
//! assert_eq!(overlay.surface().focused(), Some("close"));
//!
//! // Tab from the last focusable wraps back to the first
//! overlay.surface_mut().set_focus(&"next").ok();
//! overlay.handle_key(Key::Tab { shift: false });
//! assert_eq!(overlay.surface().focused(), Some("close"));
//!
//! // A pointer-down on the backdrop dismisses and restores focus
//! overlay.handle_pointer(PointerTarget::Backdrop);
//! assert!(!overlay.is_open());
//! assert_eq!(overlay.surface().focused(), Some("play-button"));
//! ```

mod controller;
mod error;
mod events;
mod input;
mod surface;

// Public exports
pub use controller::OverlayController;
pub use error::{Result, SurfaceError};
pub use events::{CloseReason, OverlayEvent};
pub use input::{Key, PointerTarget};
pub use surface::OverlaySurface;
