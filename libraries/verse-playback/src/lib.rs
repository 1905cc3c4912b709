//! Verse Player - Playback Coordination
//!
//! Platform-agnostic playback coordination for Verse Player.
//!
//! This crate provides:
//! - Current-track selection, independent of any playlist context
//! - Active-list traversal (next/previous) with guarded boundaries
//! - Auto-advance tracking, so presentation layers can tell user
//!   selections apart from automatic transitions
//! - End-of-track handling with configurable end-of-list behavior
//! - UI-sync events drained by the host after each mutation
//! - A narrow adapter contract for embeddable media players
//!
//! # Architecture
//!
//! `verse-playback` is completely platform-agnostic:
//! - No dependency on the DOM or any UI toolkit
//! - No dependency on a concrete media player
//! - No network or storage access
//!
//! Platform-specific concerns (embedded players, scrolling, rendering) are
//! reached through the [`PlayerAdapter`] trait and drained events. All
//! operations are total: guard failures decline silently, they never
//! return an error.
//!
//! # Example: Selection and Traversal
//!
//! ```rust
//! use verse_playback::{CatalogTrack, PlaybackCoordinator};
//!
//! let mut coordinator = PlaybackCoordinator::default();
//!
//! coordinator.set_active_list(vec![
//!     CatalogTrack::new("first", "yt:aaa", "First Verse"),
//!     CatalogTrack::new("second", "yt:bbb", "Second Verse"),
//! ]);
//!
//! // Explicit user choice: auto-advance flag stays off
//! coordinator.play("first");
//! assert!(!coordinator.auto_advance());
//! assert!(coordinator.has_next());
//!
//! // Automatic transition: flag comes on
//! coordinator.next();
//! assert_eq!(coordinator.current_id(), Some("second"));
//! assert!(coordinator.auto_advance());
//!
//! // At the end of the list, a natural track end declines gracefully
//! coordinator.on_track_end();
//! assert_eq!(coordinator.current_id(), Some("second"));
//! assert!(!coordinator.auto_advance());
//! ```
//!
//! # Example: Host Event Loop
//!
//! ```rust
//! use verse_playback::{CatalogTrack, PlaybackCoordinator, PlaybackEvent};
//!
//! let mut coordinator = PlaybackCoordinator::default();
//! coordinator.set_active_list(vec![CatalogTrack::new("a", "yt:aaa", "A")]);
//! coordinator.play("a");
//!
//! for event in coordinator.drain_events() {
//!     match event {
//!         PlaybackEvent::TrackSelected { track_id, auto_advance, .. } => {
//!             // Rebuild the embedded player; auto-start only on auto_advance
//!             let _ = (track_id, auto_advance);
//!         }
//!         _ => {}
//!     }
//! }
//! ```

mod adapter;
mod coordinator;
mod error;
mod events;
mod list;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use adapter::{AdapterConfig, EndCallback, PlayerAdapter};
pub use coordinator::PlaybackCoordinator;
pub use error::{AdapterError, Result};
pub use events::PlaybackEvent;
pub use types::{CatalogTrack, CoordinatorConfig, EndOfListBehavior};
