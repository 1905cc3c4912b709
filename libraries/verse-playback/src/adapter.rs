//! Platform-agnostic player adapter trait
//!
//! Abstracts embeddable media players (video platform iframes, native
//! audio elements) behind a narrow attach/detach contract.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Callback invoked when a track completes naturally
///
/// Adapters must invoke it at most once per attached player.
pub type EndCallback = Box<dyn FnMut()>;

/// Construction hints for an embedded player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Whether the player should begin playback immediately
    pub autoplay: bool,

    /// Whether the adapter is active at all
    pub enabled: bool,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            autoplay: false,
            enabled: true,
        }
    }
}

/// Platform-agnostic embedded player
///
/// Implementors construct and tear down a concrete player bound to a host
/// mount point. This trait is the coordinator's only knowledge of real
/// playback: the host observes the adapter's end notification and forwards
/// it to [`PlaybackCoordinator::on_track_end`].
///
/// `autoplay` is a construction hint, not something coordination
/// correctness depends on.
///
/// [`PlaybackCoordinator::on_track_end`]: crate::PlaybackCoordinator::on_track_end
pub trait PlayerAdapter {
    /// Handle identifying an attached player instance
    type Handle;

    /// Construct a player for `media_id` bound to the mount point
    ///
    /// `on_end` must be invoked exactly once per natural completion of
    /// playback, and never after [`detach`].
    ///
    /// # Arguments
    /// * `mount` - Host-specific mount point identifier
    /// * `media_id` - External media identifier for the track
    /// * `config` - Construction hints (autoplay, enabled)
    /// * `on_end` - Natural end-of-track notification
    ///
    /// [`detach`]: PlayerAdapter::detach
    fn attach(
        &mut self,
        mount: &str,
        media_id: &str,
        config: AdapterConfig,
        on_end: EndCallback,
    ) -> Result<Self::Handle>;

    /// Tear down a previously attached player
    ///
    /// Must be safe to call at any point in the player lifecycle.
    fn detach(&mut self, handle: Self::Handle);
}

/// Scripted adapter for testing
///
/// Records attach/detach calls and lets tests fire the end notification
/// on demand.
#[cfg(test)]
pub(crate) struct ScriptedAdapter {
    next_handle: usize,
    attached: Vec<(usize, String, AdapterConfig, EndCallback)>,
    detach_count: usize,
}

#[cfg(test)]
impl ScriptedAdapter {
    pub(crate) fn new() -> Self {
        Self {
            next_handle: 0,
            attached: Vec::new(),
            detach_count: 0,
        }
    }

    /// Fire the end notification for the most recently attached player
    pub(crate) fn finish_current(&mut self) {
        if let Some((_, _, _, on_end)) = self.attached.last_mut() {
            on_end();
        }
    }

    pub(crate) fn attached_media_ids(&self) -> Vec<&str> {
        self.attached
            .iter()
            .map(|(_, media_id, _, _)| media_id.as_str())
            .collect()
    }

    pub(crate) fn detach_count(&self) -> usize {
        self.detach_count
    }
}

#[cfg(test)]
impl PlayerAdapter for ScriptedAdapter {
    type Handle = usize;

    fn attach(
        &mut self,
        _mount: &str,
        media_id: &str,
        config: AdapterConfig,
        on_end: EndCallback,
    ) -> Result<usize> {
        if !config.enabled {
            return Err(crate::error::AdapterError::Disabled);
        }

        let handle = self.next_handle;
        self.next_handle += 1;
        self.attached
            .push((handle, media_id.to_string(), config, on_end));
        Ok(handle)
    }

    fn detach(&mut self, handle: usize) {
        self.attached.retain(|(h, _, _, _)| *h != handle);
        self.detach_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn attach_and_finish_fires_callback_once() {
        let mut adapter = ScriptedAdapter::new();
        let fired = Rc::new(Cell::new(0));
        let observer = Rc::clone(&fired);

        adapter
            .attach(
                "player-mount",
                "yt:abc",
                AdapterConfig::default(),
                Box::new(move || observer.set(observer.get() + 1)),
            )
            .unwrap();

        adapter.finish_current();
        assert_eq!(fired.get(), 1);
        assert_eq!(adapter.attached_media_ids(), vec!["yt:abc"]);
    }

    #[test]
    fn disabled_adapter_rejects_attach() {
        let mut adapter = ScriptedAdapter::new();
        let config = AdapterConfig {
            autoplay: true,
            enabled: false,
        };

        let result = adapter.attach("player-mount", "yt:abc", config, Box::new(|| {}));
        assert!(result.is_err());
    }

    #[test]
    fn detach_is_safe_at_any_time() {
        let mut adapter = ScriptedAdapter::new();
        let handle = adapter
            .attach("player-mount", "yt:abc", AdapterConfig::default(), Box::new(|| {}))
            .unwrap();

        adapter.detach(handle);
        adapter.detach(handle); // already gone, still safe

        assert_eq!(adapter.detach_count(), 2);
        assert!(adapter.attached_media_ids().is_empty());
    }
}
