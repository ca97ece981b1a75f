//! WebAssembly FFI bindings for the Crux Core
//!
//! The web shell serializes events in, and effects and the view model out, through these three
//! functions.

use lazy_static::lazy_static;
use wasm_bindgen::prelude::wasm_bindgen;

use crux_core::{bridge::Bridge, Core};

use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

/// Set up console logging when the module is loaded
#[wasm_bindgen(start)]
pub fn init_wasm() {
    // Ignore a second initialization on hot reload
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Process a serialized Event and return the serialized Effects it produced
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.update(event_bytes, &mut effects) {
        log::error!("Failed to process event: {e:?}");
    }
    effects
}

/// Serialized ViewModel
#[wasm_bindgen]
pub fn view() -> Vec<u8> {
    let mut view = Vec::new();
    if let Err(e) = CORE.view(&mut view) {
        log::error!("Failed to serialize view model: {e:?}");
    }
    view
}

/// Resolve the effect `id` with a serialized shell output (device response, elapsed delay or
/// HTTP response) and return any follow-up Effects
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.resolve(
        crux_core::bridge::EffectId(id),
        response_bytes,
        &mut effects,
    ) {
        log::error!("Failed to handle response for effect {id}: {e:?}");
    }
    effects
}
