//! Playback coordinator - core orchestration
//!
//! Owns the current selection and the active-list traversal context, and
//! tells presentation layers whether a selection change was automatic.

use crate::{
    events::PlaybackEvent,
    list::ActiveList,
    types::{CatalogTrack, CoordinatorConfig, EndOfListBehavior},
};

/// Central playback coordination
///
/// Owns "what is currently selected", "what ordered list it belongs to",
/// and "was this selection the result of an automatic advance". Selection
/// and list are independently settable: a track can be current without any
/// list (a standalone embedded card), and a list can be active without a
/// selection from it.
///
/// The coordinator never talks to a player or the DOM. Presentation layers
/// read its queries (or drain its events) and drive player adapters
/// themselves; adapters report natural completion back through
/// [`on_track_end`].
///
/// Every operation is total: a failed guard declines silently instead of
/// returning an error, so a "next" button consults [`has_next`] to disable
/// itself rather than handling failures.
///
/// [`on_track_end`]: PlaybackCoordinator::on_track_end
/// [`has_next`]: PlaybackCoordinator::has_next
pub struct PlaybackCoordinator {
    /// Currently selected track id (`None` = nothing selected)
    current_id: Option<String>,

    /// Playlist context for traversal; independent of the selection
    active_list: Option<ActiveList>,

    /// Whether the most recent selection change was automatic
    auto_advance: bool,

    /// Policy applied when playback runs off the end of the list
    end_of_list: EndOfListBehavior,

    /// Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackCoordinator {
    /// Create a new playback coordinator
    pub fn new(config: CoordinatorConfig) -> Self {
        Self {
            current_id: None,
            active_list: None,
            auto_advance: false,
            end_of_list: config.end_of_list,
            pending_events: Vec::new(),
        }
    }

    // ===== Selection =====

    /// Select a track for playback
    ///
    /// Explicit user choice: always clears the auto-advance flag. Accepts
    /// any identifier; an id absent from the active list is a valid state
    /// in which [`current_index`] resolves to `None`.
    ///
    /// [`current_index`]: PlaybackCoordinator::current_index
    pub fn play(&mut self, track_id: impl Into<String>) {
        let track_id = track_id.into();
        let previous = self.current_id.replace(track_id.clone());
        self.auto_advance = false;
        tracing::debug!("explicit selection: {}", track_id);
        self.emit_track_selected(track_id, previous, false);
    }

    /// Clear the selection
    pub fn stop(&mut self) {
        self.auto_advance = false;
        if let Some(previous) = self.current_id.take() {
            tracing::debug!("selection cleared (was {})", previous);
            self.emit_selection_cleared(previous);
        }
    }

    // ===== Active List =====

    /// Replace the active list
    ///
    /// Does not alter the selection. An empty list is stored as given and
    /// simply provides no traversal context (every guard declines).
    pub fn set_active_list(&mut self, tracks: Vec<CatalogTrack>) {
        let length = tracks.len();
        self.active_list = Some(ActiveList::new(tracks));
        tracing::debug!("active list replaced ({} tracks)", length);
        self.emit_list_changed(length);
    }

    /// Drop the active list
    ///
    /// Does not alter the selection. Clears the auto-advance flag: there
    /// is no automatic transition without traversal context.
    pub fn clear_active_list(&mut self) {
        self.auto_advance = false;
        if self.active_list.take().is_some() {
            self.emit_list_cleared();
        }
    }

    // ===== Traversal =====

    /// Advance to the next track in the active list
    ///
    /// No-op unless a list is set, the selection is found in it, and it is
    /// not the last entry. Returns whether an advance happened.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        match self.current_index() {
            Some(index) if index + 1 < self.list_len() => self.advance_to(index + 1),
            _ => false,
        }
    }

    /// Retreat to the previous track in the active list
    ///
    /// Symmetric guard: no-op unless the selection is found past the first
    /// entry. Returns whether a retreat happened.
    pub fn prev(&mut self) -> bool {
        match self.current_index() {
            Some(index) if index > 0 => self.advance_to(index - 1),
            _ => false,
        }
    }

    /// React to natural end-of-track, reported by a player adapter
    ///
    /// Advances like [`next`] when a further track exists. Otherwise the
    /// auto-advance flag is cleared and, if the selection sits on the last
    /// entry of the list, [`PlaybackEvent::ListEnded`] is emitted and the
    /// configured [`EndOfListBehavior`] applies.
    ///
    /// [`next`]: PlaybackCoordinator::next
    pub fn on_track_end(&mut self) {
        if self.next() {
            return;
        }

        self.auto_advance = false;

        // No further track: either there is no traversal context at all,
        // or the selection sits on the last entry.
        if self.current_index().is_none() {
            return;
        }
        let Some(track_id) = self.current_id.clone() else {
            return;
        };

        tracing::debug!("active list ended at {}", track_id);
        self.emit_list_ended(track_id);

        match self.end_of_list {
            EndOfListBehavior::Hold => {}
            EndOfListBehavior::Loop => {
                self.advance_to(0);
            }
            EndOfListBehavior::Stop => self.stop(),
        }
    }

    /// Internal: select the track at `index` as an automatic advance
    fn advance_to(&mut self, index: usize) -> bool {
        let Some(track_id) = self
            .active_list
            .as_ref()
            .and_then(|list| list.get(index))
            .map(|track| track.id.clone())
        else {
            return false;
        };

        let previous = self.current_id.replace(track_id.clone());
        self.auto_advance = true;
        tracing::debug!("auto-advance to {}", track_id);
        self.emit_track_selected(track_id, previous, true);
        true
    }

    fn list_len(&self) -> usize {
        self.active_list.as_ref().map(ActiveList::len).unwrap_or(0)
    }

    // ===== State Queries =====

    /// Currently selected track id
    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    /// Currently selected track, when it belongs to the active list
    pub fn current_track(&self) -> Option<&CatalogTrack> {
        let index = self.current_index()?;
        self.active_list.as_ref()?.get(index)
    }

    /// Position of the selection within the active list
    ///
    /// Recomputed on every call from the list and the selected id; `None`
    /// when either is unset or the id is absent from the list.
    pub fn current_index(&self) -> Option<usize> {
        let list = self.active_list.as_ref()?;
        let track_id = self.current_id.as_deref()?;
        list.index_of(track_id)
    }

    /// Tracks of the active list, in order
    pub fn active_list(&self) -> Option<&[CatalogTrack]> {
        self.active_list.as_ref().map(ActiveList::tracks)
    }

    /// Whether the most recent selection change was automatic
    ///
    /// Presentation layers use this to decide on auto-play and
    /// scroll-into-view behavior for the newly current track.
    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    /// Whether a further track exists after the selection
    pub fn has_next(&self) -> bool {
        self.current_index()
            .map(|index| index + 1 < self.list_len())
            .unwrap_or(false)
    }

    /// Whether a track exists before the selection
    pub fn has_prev(&self) -> bool {
        self.current_index().map(|index| index > 0).unwrap_or(false)
    }

    // ===== Events =====

    /// Drain pending events for host processing
    ///
    /// Returns all events emitted since the last drain, in emission order.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit_track_selected(
        &mut self,
        track_id: String,
        previous_track_id: Option<String>,
        auto_advance: bool,
    ) {
        self.pending_events.push(PlaybackEvent::TrackSelected {
            track_id,
            previous_track_id,
            auto_advance,
        });
    }

    fn emit_selection_cleared(&mut self, track_id: String) {
        self.pending_events
            .push(PlaybackEvent::SelectionCleared { track_id });
    }

    fn emit_list_changed(&mut self, length: usize) {
        self.pending_events
            .push(PlaybackEvent::ListChanged { length });
    }

    fn emit_list_cleared(&mut self) {
        self.pending_events.push(PlaybackEvent::ListCleared);
    }

    fn emit_list_ended(&mut self, track_id: String) {
        self.pending_events
            .push(PlaybackEvent::ListEnded { track_id });
    }
}

impl Default for PlaybackCoordinator {
    fn default() -> Self {
        Self::new(CoordinatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn create_test_track(id: &str) -> CatalogTrack {
        CatalogTrack::new(id, format!("media-{}", id), format!("Track {}", id))
    }

    fn create_test_list(ids: &[&str]) -> Vec<CatalogTrack> {
        ids.iter().map(|id| create_test_track(id)).collect()
    }

    #[test]
    fn play_selects_and_clears_auto_advance() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.set_active_list(create_test_list(&["a", "b", "c"]));

        coordinator.play("b");
        assert_eq!(coordinator.current_id(), Some("b"));
        assert_eq!(coordinator.current_index(), Some(1));
        assert!(!coordinator.auto_advance());
        assert!(coordinator.has_next());
        assert!(coordinator.has_prev());
    }

    #[test]
    fn play_after_advance_clears_auto_advance() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.set_active_list(create_test_list(&["a", "b"]));
        coordinator.play("a");
        coordinator.next();
        assert!(coordinator.auto_advance());

        coordinator.play("a");
        assert!(!coordinator.auto_advance());
    }

    #[test]
    fn play_accepts_id_outside_active_list() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.set_active_list(create_test_list(&["a", "b"]));

        coordinator.play("standalone");
        assert_eq!(coordinator.current_id(), Some("standalone"));
        assert_eq!(coordinator.current_index(), None);
        assert!(!coordinator.has_next());
        assert!(!coordinator.has_prev());
    }

    #[test]
    fn play_works_without_any_list() {
        let mut coordinator = PlaybackCoordinator::default();

        coordinator.play("a");
        assert_eq!(coordinator.current_id(), Some("a"));
        assert_eq!(coordinator.current_index(), None);
        assert!(coordinator.current_track().is_none());
    }

    #[test]
    fn stop_clears_selection() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.play("a");

        coordinator.stop();
        assert_eq!(coordinator.current_id(), None);
        assert!(!coordinator.auto_advance());
    }

    #[test]
    fn next_advances_and_flags_auto() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.set_active_list(create_test_list(&["a", "b", "c"]));
        coordinator.play("b");

        assert!(coordinator.next());
        assert_eq!(coordinator.current_id(), Some("c"));
        assert_eq!(coordinator.current_index(), Some(2));
        assert!(coordinator.auto_advance());
        assert!(!coordinator.has_next());
        assert!(coordinator.has_prev());
    }

    #[test]
    fn next_declines_at_last_track() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.set_active_list(create_test_list(&["a", "b"]));
        coordinator.play("b");

        assert!(!coordinator.next());
        assert_eq!(coordinator.current_id(), Some("b"));
        assert!(!coordinator.auto_advance());
    }

    #[test]
    fn next_declines_without_list() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.play("a");

        assert!(!coordinator.next());
        assert_eq!(coordinator.current_id(), Some("a"));
    }

    #[test]
    fn next_declines_when_selection_not_in_list() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.set_active_list(create_test_list(&["a", "b"]));
        coordinator.play("elsewhere");

        assert!(!coordinator.next());
        assert_eq!(coordinator.current_id(), Some("elsewhere"));
    }

    #[test]
    fn prev_retreats_and_flags_auto() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.set_active_list(create_test_list(&["a", "b", "c"]));
        coordinator.play("b");

        assert!(coordinator.prev());
        assert_eq!(coordinator.current_id(), Some("a"));
        assert!(coordinator.auto_advance());
    }

    #[test]
    fn prev_declines_at_first_track() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.set_active_list(create_test_list(&["a", "b"]));
        coordinator.play("a");

        assert!(!coordinator.prev());
        assert_eq!(coordinator.current_id(), Some("a"));
        assert!(!coordinator.auto_advance());
    }

    #[test]
    fn track_end_advances_mid_list() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.set_active_list(create_test_list(&["a", "b"]));
        coordinator.play("a");

        coordinator.on_track_end();
        assert_eq!(coordinator.current_id(), Some("b"));
        assert!(coordinator.auto_advance());
    }

    #[test]
    fn track_end_holds_on_last_track() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.set_active_list(create_test_list(&["a", "b", "c"]));
        coordinator.play("b");
        coordinator.next();
        assert!(coordinator.auto_advance());

        coordinator.on_track_end();
        assert_eq!(coordinator.current_id(), Some("c"));
        assert!(!coordinator.auto_advance());
    }

    #[test]
    fn track_end_without_list_only_clears_flag() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.play("a");

        coordinator.on_track_end();
        assert_eq!(coordinator.current_id(), Some("a"));
        assert!(!coordinator.auto_advance());
        assert!(coordinator
            .drain_events()
            .iter()
            .all(|event| !matches!(event, PlaybackEvent::ListEnded { .. })));
    }

    #[test]
    fn track_end_emits_list_ended_on_last_track() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.set_active_list(create_test_list(&["a", "b"]));
        coordinator.play("b");
        coordinator.drain_events();

        coordinator.on_track_end();
        let events = coordinator.drain_events();
        assert_eq!(
            events,
            vec![PlaybackEvent::ListEnded {
                track_id: "b".to_string()
            }]
        );
    }

    #[test]
    fn track_end_loops_when_configured() {
        let mut coordinator = PlaybackCoordinator::new(CoordinatorConfig {
            end_of_list: EndOfListBehavior::Loop,
        });
        coordinator.set_active_list(create_test_list(&["a", "b"]));
        coordinator.play("b");

        coordinator.on_track_end();
        assert_eq!(coordinator.current_id(), Some("a"));
        assert!(coordinator.auto_advance());
    }

    #[test]
    fn track_end_stops_when_configured() {
        let mut coordinator = PlaybackCoordinator::new(CoordinatorConfig {
            end_of_list: EndOfListBehavior::Stop,
        });
        coordinator.set_active_list(create_test_list(&["a"]));
        coordinator.play("a");
        coordinator.drain_events();

        coordinator.on_track_end();
        assert_eq!(coordinator.current_id(), None);
        assert!(!coordinator.auto_advance());

        let events = coordinator.drain_events();
        assert_eq!(
            events,
            vec![
                PlaybackEvent::ListEnded {
                    track_id: "a".to_string()
                },
                PlaybackEvent::SelectionCleared {
                    track_id: "a".to_string()
                },
            ]
        );
    }

    #[test]
    fn list_assignment_leaves_selection_alone() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.play("x");

        coordinator.set_active_list(create_test_list(&["a", "b"]));
        assert_eq!(coordinator.current_id(), Some("x"));

        coordinator.clear_active_list();
        assert_eq!(coordinator.current_id(), Some("x"));
        assert!(coordinator.active_list().is_none());
    }

    #[test]
    fn clearing_list_clears_auto_advance() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.set_active_list(create_test_list(&["a", "b"]));
        coordinator.play("a");
        coordinator.next();
        assert!(coordinator.auto_advance());

        coordinator.clear_active_list();
        assert!(!coordinator.auto_advance());
    }

    #[test]
    fn empty_list_provides_no_traversal_context() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.set_active_list(Vec::new());

        coordinator.play("a");
        assert_eq!(coordinator.current_index(), None);
        assert!(!coordinator.has_next());
        assert!(!coordinator.has_prev());
        assert!(!coordinator.next());
        assert!(!coordinator.prev());
    }

    #[test]
    fn current_track_resolves_from_list() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.set_active_list(create_test_list(&["a", "b"]));
        coordinator.play("b");

        let track = coordinator.current_track().unwrap();
        assert_eq!(track.id, "b");
        assert_eq!(track.media_id, "media-b");
    }

    #[test]
    fn events_accumulate_in_order_and_drain_once() {
        let mut coordinator = PlaybackCoordinator::default();
        coordinator.set_active_list(create_test_list(&["a", "b"]));
        coordinator.play("a");
        coordinator.next();

        assert!(coordinator.has_pending_events());
        let events = coordinator.drain_events();
        assert_eq!(
            events,
            vec![
                PlaybackEvent::ListChanged { length: 2 },
                PlaybackEvent::TrackSelected {
                    track_id: "a".to_string(),
                    previous_track_id: None,
                    auto_advance: false,
                },
                PlaybackEvent::TrackSelected {
                    track_id: "b".to_string(),
                    previous_track_id: Some("a".to_string()),
                    auto_advance: true,
                },
            ]
        );
        assert!(!coordinator.has_pending_events());
        assert!(coordinator.drain_events().is_empty());
    }

    #[test]
    fn adapter_end_notification_drives_auto_advance() {
        use crate::adapter::{AdapterConfig, PlayerAdapter, ScriptedAdapter};
        use std::cell::RefCell;
        use std::rc::Rc;

        let coordinator = Rc::new(RefCell::new(PlaybackCoordinator::default()));
        coordinator
            .borrow_mut()
            .set_active_list(create_test_list(&["a", "b"]));
        coordinator.borrow_mut().play("a");

        let mut adapter = ScriptedAdapter::new();
        let notified = Rc::clone(&coordinator);
        let handle = adapter
            .attach(
                "player-mount",
                "media-a",
                AdapterConfig::default(),
                Box::new(move || notified.borrow_mut().on_track_end()),
            )
            .unwrap();

        adapter.finish_current();
        assert_eq!(coordinator.borrow().current_id(), Some("b"));
        assert!(coordinator.borrow().auto_advance());

        adapter.detach(handle);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Play(u8),
        Stop,
        SetList(Vec<u8>),
        ClearList,
        Next,
        Prev,
        TrackEnd,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..6).prop_map(Op::Play),
            Just(Op::Stop),
            proptest::collection::vec(0u8..6, 0..8).prop_map(Op::SetList),
            Just(Op::ClearList),
            Just(Op::Next),
            Just(Op::Prev),
            Just(Op::TrackEnd),
        ]
    }

    fn numbered_id(n: u8) -> String {
        format!("track-{}", n)
    }

    proptest! {
        /// The derived index always matches an independent lookup of the
        /// selection in the exposed list, for any operation sequence.
        #[test]
        fn current_index_always_matches_selection(
            ops in proptest::collection::vec(op_strategy(), 1..50)
        ) {
            let mut coordinator = PlaybackCoordinator::default();

            for op in ops {
                match op {
                    Op::Play(n) => {
                        coordinator.play(numbered_id(n));
                        prop_assert!(!coordinator.auto_advance());
                    }
                    Op::Stop => {
                        coordinator.stop();
                        prop_assert!(!coordinator.auto_advance());
                        prop_assert!(coordinator.current_id().is_none());
                    }
                    Op::SetList(ids) => {
                        let tracks = ids
                            .into_iter()
                            .map(|n| create_test_track(&numbered_id(n)))
                            .collect();
                        coordinator.set_active_list(tracks);
                    }
                    Op::ClearList => {
                        coordinator.clear_active_list();
                        prop_assert!(!coordinator.auto_advance());
                    }
                    Op::Next => {
                        if coordinator.next() {
                            prop_assert!(coordinator.auto_advance());
                        }
                    }
                    Op::Prev => {
                        if coordinator.prev() {
                            prop_assert!(coordinator.auto_advance());
                        }
                    }
                    Op::TrackEnd => coordinator.on_track_end(),
                }

                let expected = match (coordinator.active_list(), coordinator.current_id()) {
                    (Some(tracks), Some(id)) => {
                        tracks.iter().position(|track| track.id == id)
                    }
                    _ => None,
                };
                prop_assert_eq!(coordinator.current_index(), expected);

                coordinator.drain_events();
            }
        }
    }
}
