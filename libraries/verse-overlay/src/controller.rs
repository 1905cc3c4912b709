//! Overlay lifecycle controller
//!
//! Manages an exclusive full-screen surface: focus capture and restore,
//! focus-trap traversal, scroll lock, and every dismissal path.

use crate::{
    events::{CloseReason, OverlayEvent},
    input::{Key, PointerTarget},
    surface::OverlaySurface,
};

/// Modal overlay lifecycle
///
/// Opening acquires the paired side effects (focus capture, scroll lock,
/// armed initial focus). Every exit route (explicit close, Escape,
/// backdrop pointer, dropping the controller) releases them through one
/// shared path, so teardown can never be half-applied.
///
/// The host is expected to route key and pointer events here only while
/// the overlay is open; the controller also guards against stray input on
/// its own. Initial focus is deferred to the host's next paint via
/// [`on_frame`], because the close control must exist and be visible
/// before it can receive focus.
///
/// [`on_frame`]: OverlayController::on_frame
pub struct OverlayController<S: OverlaySurface> {
    surface: S,

    /// Whether the overlay is currently visible
    open: bool,

    /// Element focused before the overlay opened, for restore on close
    restore_focus: Option<S::Target>,

    /// Whether the deferred initial focus assignment is still armed
    pending_focus: bool,

    /// Event queue for host synchronization
    pending_events: Vec<OverlayEvent>,
}

impl<S: OverlaySurface> OverlayController<S> {
    /// Create a controller over the given host surface
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            open: false,
            restore_focus: None,
            pending_focus: false,
            pending_events: Vec::new(),
        }
    }

    // ===== Lifecycle =====

    /// Open the overlay
    ///
    /// Idempotent. Captures the currently focused element, locks page
    /// scroll, and arms the deferred initial focus assignment; the host
    /// calls [`on_frame`] on the next paint to complete it.
    ///
    /// [`on_frame`]: OverlayController::on_frame
    pub fn open(&mut self) {
        if self.open {
            return;
        }

        self.restore_focus = self.surface.focused();
        if let Err(err) = self.surface.lock_scroll() {
            tracing::warn!("scroll lock failed: {}", err);
        }
        self.open = true;
        self.pending_focus = true;
        self.pending_events.push(OverlayEvent::Opened);
    }

    /// Complete the deferred initial focus assignment
    ///
    /// Called by the host once the overlay has painted. Focus lands on the
    /// designated close control, falling back to the first focusable
    /// descendant. Does nothing if the overlay was closed in the meantime.
    pub fn on_frame(&mut self) {
        if !self.open || !self.pending_focus {
            return;
        }
        self.pending_focus = false;

        let target = self
            .surface
            .close_control()
            .or_else(|| self.surface.focusables().into_iter().next());
        let Some(target) = target else {
            return;
        };

        if let Err(err) = self.surface.set_focus(&target) {
            tracing::warn!("initial focus failed: {}", err);
        }
    }

    /// Close the overlay
    ///
    /// Idempotent. Restores scroll and, when the captured element is still
    /// attached, returns focus to it.
    pub fn close(&mut self) {
        self.release(CloseReason::Explicit);
    }

    /// Shared release path for every way out of the overlay
    fn release(&mut self, reason: CloseReason) {
        if !self.open {
            return;
        }
        self.open = false;
        self.pending_focus = false;

        if let Err(err) = self.surface.unlock_scroll() {
            tracing::warn!("scroll unlock failed: {}", err);
        }

        if let Some(target) = self.restore_focus.take() {
            if self.surface.is_attached(&target) {
                if let Err(err) = self.surface.set_focus(&target) {
                    tracing::warn!("focus restore failed: {}", err);
                }
            }
        }

        self.pending_events.push(OverlayEvent::Closed { reason });
    }

    // ===== Input =====

    /// Handle a key press
    ///
    /// Escape dismisses; Tab and Shift+Tab wrap focus between the first
    /// and last focusable descendants. Returns whether the key was
    /// consumed (interior Tab movement is left to the host).
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.open {
            return false;
        }

        match key {
            Key::Escape => {
                self.release(CloseReason::EscapeKey);
                true
            }
            Key::Tab { shift } => self.trap_focus(shift),
        }
    }

    /// Wrap focus at the traversal edges
    fn trap_focus(&mut self, reverse: bool) -> bool {
        let focusables = self.surface.focusables();
        let (Some(first), Some(last)) = (focusables.first(), focusables.last()) else {
            // No focusable descendants: traversal interception is skipped
            return false;
        };

        let focused = self.surface.focused();
        let target = if reverse {
            (focused.as_ref() == Some(first)).then(|| last.clone())
        } else {
            (focused.as_ref() == Some(last)).then(|| first.clone())
        };

        let Some(target) = target else {
            return false;
        };
        if let Err(err) = self.surface.set_focus(&target) {
            tracing::warn!("focus wrap failed: {}", err);
        }
        true
    }

    /// Handle a pointer-down
    ///
    /// A pointer-down directly on the backdrop dismisses the overlay; one
    /// on a descendant of the backdrop (the content) does not. Returns
    /// whether the pointer was consumed.
    pub fn handle_pointer(&mut self, target: PointerTarget) -> bool {
        if !self.open {
            return false;
        }

        match target {
            PointerTarget::Backdrop => {
                self.release(CloseReason::BackdropPointer);
                true
            }
            PointerTarget::Content => false,
        }
    }

    // ===== State Queries =====

    /// Whether the overlay is currently visible
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The host surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the host surface
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // ===== Events =====

    /// Drain pending events for host processing
    pub fn drain_events(&mut self) -> Vec<OverlayEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }
}

impl<S: OverlaySurface> Drop for OverlayController<S> {
    /// Release scroll lock and focus capture if the host unmounts the
    /// overlay without closing it first
    fn drop(&mut self) {
        self.release(CloseReason::Explicit);
    }
}
