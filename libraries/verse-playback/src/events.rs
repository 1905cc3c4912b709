//! Playback events
//!
//! Event-based communication for UI synchronization. Events accumulate in
//! the coordinator and are drained by the host after each mutation:
//! - Selection changes (user choice or automatic advance)
//! - Active-list changes
//! - End-of-list notification

use serde::{Deserialize, Serialize};

/// Events emitted by the playback coordinator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// A track became the current selection
    TrackSelected {
        /// ID of the newly selected track
        track_id: String,
        /// ID of the previously selected track (if any)
        previous_track_id: Option<String>,
        /// Whether the change came from an automatic transition
        /// (end-of-track or next/prev) rather than an explicit choice
        auto_advance: bool,
    },

    /// The selection was cleared
    SelectionCleared {
        /// ID of the track that was selected
        track_id: String,
    },

    /// The active list was replaced
    ListChanged {
        /// Length of the new list
        length: usize,
    },

    /// The active list was cleared
    ListCleared,

    /// Playback reached the natural end of the active list
    ///
    /// Emitted before any configured end-of-list behavior is applied, so
    /// hosts never have to infer the end from absence of action.
    ListEnded {
        /// ID of the track that finished last
        track_id: String,
    },
}
