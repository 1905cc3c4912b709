//! WASM-compatible PlaybackCoordinator wrapper

use super::types::WasmCatalogTrack;
use crate::{CatalogTrack, PlaybackCoordinator, PlaybackEvent};
use js_sys::Function;
use wasm_bindgen::prelude::*;

/// WASM-compatible playback coordinator
///
/// This wraps the core PlaybackCoordinator with a JavaScript-friendly API.
/// Drained events are forwarded to registered callbacks after every
/// mutating call. At the JS boundary the current index follows the DOM
/// convention of `-1` for "not found".
#[wasm_bindgen]
pub struct WasmPlaybackCoordinator {
    inner: PlaybackCoordinator,

    // Event callbacks
    on_selection_change: Option<Function>,
    on_list_change: Option<Function>,
    on_list_ended: Option<Function>,
}

#[wasm_bindgen]
impl WasmPlaybackCoordinator {
    /// Create a new playback coordinator
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();

        Self {
            inner: PlaybackCoordinator::default(),
            on_selection_change: None,
            on_list_change: None,
            on_list_ended: None,
        }
    }

    // ===== Selection =====

    /// Select a track for playback (explicit user choice)
    pub fn play(&mut self, track_id: String) {
        self.inner.play(track_id);
        self.dispatch_events();
    }

    /// Clear the selection
    pub fn stop(&mut self) {
        self.inner.stop();
        self.dispatch_events();
    }

    // ===== Active List =====

    /// Replace the active list
    ///
    /// Expects an array of `WasmCatalogTrack`-shaped objects.
    #[wasm_bindgen(js_name = setActiveList)]
    pub fn set_active_list(&mut self, tracks: JsValue) -> Result<(), JsValue> {
        let tracks: Vec<WasmCatalogTrack> =
            serde_wasm_bindgen::from_value(tracks).map_err(|e| JsValue::from_str(&e.to_string()))?;

        self.inner
            .set_active_list(tracks.into_iter().map(CatalogTrack::from).collect());
        self.dispatch_events();
        Ok(())
    }

    /// Drop the active list
    #[wasm_bindgen(js_name = clearActiveList)]
    pub fn clear_active_list(&mut self) {
        self.inner.clear_active_list();
        self.dispatch_events();
    }

    // ===== Traversal =====

    /// Advance to the next track; returns whether an advance happened
    pub fn next(&mut self) -> bool {
        let advanced = self.inner.next();
        self.dispatch_events();
        advanced
    }

    /// Retreat to the previous track; returns whether a retreat happened
    pub fn prev(&mut self) -> bool {
        let retreated = self.inner.prev();
        self.dispatch_events();
        retreated
    }

    /// React to natural end-of-track, reported by the embedded player
    #[wasm_bindgen(js_name = onTrackEnd)]
    pub fn on_track_end(&mut self) {
        self.inner.on_track_end();
        self.dispatch_events();
    }

    // ===== State Queries =====

    /// Currently selected track id
    #[wasm_bindgen(getter, js_name = currentId)]
    pub fn current_id(&self) -> Option<String> {
        self.inner.current_id().map(String::from)
    }

    /// Position of the selection within the active list (-1 = not found)
    #[wasm_bindgen(getter, js_name = currentIndex)]
    pub fn current_index(&self) -> i32 {
        self.inner
            .current_index()
            .and_then(|index| i32::try_from(index).ok())
            .unwrap_or(-1)
    }

    /// Whether the most recent selection change was automatic
    #[wasm_bindgen(getter, js_name = autoAdvance)]
    pub fn auto_advance(&self) -> bool {
        self.inner.auto_advance()
    }

    /// Whether a further track exists after the selection
    #[wasm_bindgen(getter, js_name = hasNext)]
    pub fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    /// Whether a track exists before the selection
    #[wasm_bindgen(getter, js_name = hasPrev)]
    pub fn has_prev(&self) -> bool {
        self.inner.has_prev()
    }

    /// Currently selected track, when it belongs to the active list
    #[wasm_bindgen(js_name = currentTrack)]
    pub fn current_track(&self) -> Option<WasmCatalogTrack> {
        self.inner.current_track().map(WasmCatalogTrack::from)
    }

    // ===== Event Callbacks =====

    /// Register a callback for selection changes
    #[wasm_bindgen(js_name = setOnSelectionChange)]
    pub fn set_on_selection_change(&mut self, callback: Function) {
        self.on_selection_change = Some(callback);
    }

    /// Register a callback for active-list changes
    #[wasm_bindgen(js_name = setOnListChange)]
    pub fn set_on_list_change(&mut self, callback: Function) {
        self.on_list_change = Some(callback);
    }

    /// Register a callback for the end-of-list notification
    #[wasm_bindgen(js_name = setOnListEnded)]
    pub fn set_on_list_ended(&mut self, callback: Function) {
        self.on_list_ended = Some(callback);
    }

    /// Forward drained events to the registered callbacks
    fn dispatch_events(&mut self) {
        for event in self.inner.drain_events() {
            let callback = match &event {
                PlaybackEvent::TrackSelected { .. } | PlaybackEvent::SelectionCleared { .. } => {
                    self.on_selection_change.as_ref()
                }
                PlaybackEvent::ListChanged { .. } | PlaybackEvent::ListCleared => {
                    self.on_list_change.as_ref()
                }
                PlaybackEvent::ListEnded { .. } => self.on_list_ended.as_ref(),
            };

            let Some(callback) = callback else {
                continue;
            };

            if let Ok(value) = serde_wasm_bindgen::to_value(&event) {
                let _ = callback.call1(&JsValue::NULL, &value);
            }
        }
    }
}

impl Default for WasmPlaybackCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
