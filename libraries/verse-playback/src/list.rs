//! Active-list traversal context
//!
//! Ordered sequence of tracks providing next/previous context for the
//! coordinator. Position is always looked up by id, never stored.

use crate::types::CatalogTrack;

/// Ordered playlist context for traversal
///
/// The list never keeps a cursor of its own. The coordinator derives the
/// current position from the selected track id on every query, so list and
/// selection cannot drift apart.
#[derive(Debug, Clone, Default)]
pub(crate) struct ActiveList {
    tracks: Vec<CatalogTrack>,
}

impl ActiveList {
    /// Create a list from host-supplied tracks, preserving their order
    pub(crate) fn new(tracks: Vec<CatalogTrack>) -> Self {
        Self { tracks }
    }

    /// Position of the given track id within the list
    ///
    /// With duplicate ids, the first occurrence wins.
    pub(crate) fn index_of(&self, track_id: &str) -> Option<usize> {
        self.tracks.iter().position(|track| track.id == track_id)
    }

    /// Track at the given position
    pub(crate) fn get(&self, index: usize) -> Option<&CatalogTrack> {
        self.tracks.get(index)
    }

    /// All tracks in list order
    pub(crate) fn tracks(&self) -> &[CatalogTrack] {
        &self.tracks
    }

    /// Number of tracks in the list
    pub(crate) fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the list has no tracks
    #[allow(dead_code)]
    pub(crate) fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
