//! Core types for playback coordination

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Track record supplied by the host catalog
///
/// The coordinator only ever reads the `id`; the remaining fields are
/// carried for the presentation layer and the player adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogTrack {
    /// Stable identifier, unique within a catalog
    pub id: String,

    /// External media identifier understood by the embedded player
    pub media_id: String,

    /// Track title
    pub title: String,

    /// Track duration, when the catalog knows it
    pub duration: Option<Duration>,
}

impl CatalogTrack {
    /// Create a new catalog track
    pub fn new(id: impl Into<String>, media_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            media_id: media_id.into(),
            title: title.into(),
            duration: None,
        }
    }
}

/// Behavior when playback reaches the natural end of the active list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndOfListBehavior {
    /// Stay on the last track with the auto-advance flag cleared
    Hold,

    /// Wrap around to the first track of the list
    Loop,

    /// Clear the selection entirely
    Stop,
}

/// Configuration for the playback coordinator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinatorConfig {
    /// End-of-list behavior (default: Hold)
    pub end_of_list: EndOfListBehavior,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            end_of_list: EndOfListBehavior::Hold,
        }
    }
}
