//! WASM bindings for verse-playback
//!
//! This module provides WebAssembly bindings for the PlaybackCoordinator,
//! allowing the coordination logic to drive a browser single-page app.

pub mod manager;
pub mod types;

pub use manager::WasmPlaybackCoordinator;
pub use types::WasmCatalogTrack;
