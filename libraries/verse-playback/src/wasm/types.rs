//! WASM-compatible type definitions

use crate::CatalogTrack;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use wasm_bindgen::prelude::*;

/// WASM-compatible catalog track
///
/// This is a simplified version of CatalogTrack that uses JS-compatible
/// types (f64 seconds instead of Duration).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[wasm_bindgen]
pub struct WasmCatalogTrack {
    id: String,
    media_id: String,
    title: String,
    duration_secs: Option<f64>,
}

#[wasm_bindgen]
impl WasmCatalogTrack {
    /// Create a new catalog track
    #[wasm_bindgen(constructor)]
    pub fn new(id: String, media_id: String, title: String) -> Self {
        Self {
            id,
            media_id,
            title,
            duration_secs: None,
        }
    }

    // Getters for all fields
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> String {
        self.id.clone()
    }

    #[wasm_bindgen(getter, js_name = mediaId)]
    pub fn media_id(&self) -> String {
        self.media_id.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.title.clone()
    }

    #[wasm_bindgen(getter, js_name = durationSecs)]
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    // Setters
    #[wasm_bindgen(setter, js_name = durationSecs)]
    pub fn set_duration_secs(&mut self, duration_secs: Option<f64>) {
        self.duration_secs = duration_secs;
    }
}

// Conversion from internal CatalogTrack to WASM type
impl From<&CatalogTrack> for WasmCatalogTrack {
    fn from(track: &CatalogTrack) -> Self {
        Self {
            id: track.id.clone(),
            media_id: track.media_id.clone(),
            title: track.title.clone(),
            duration_secs: track.duration.map(|duration| duration.as_secs_f64()),
        }
    }
}

// Conversion from WASM type to internal CatalogTrack
impl From<WasmCatalogTrack> for CatalogTrack {
    fn from(track: WasmCatalogTrack) -> Self {
        Self {
            id: track.id,
            media_id: track.media_id,
            title: track.title,
            duration: track.duration_secs.map(Duration::from_secs_f64),
        }
    }
}
