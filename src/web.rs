//! Browser binding
//!
//! The page owns the canvas, the DOM overlay and the event listeners; it
//! forwards timestamps (`performance.now()` milliseconds) and button edges
//! here and draws from the JSON snapshot.

use wasm_bindgen::prelude::*;

use crate::platform::{InputSource, ManualTime, is_jump_key};
use crate::runner::{FrameStatus, Runner};
use crate::sim::{GameSession, Level};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Already initialised by an earlier instance
        return;
    }
    log::info!("Neon Dash starting...");
}

/// Game handle exported to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    runner: Runner<ManualTime>,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game from optional level JSON (the stock level otherwise)
    #[wasm_bindgen(constructor)]
    pub fn new(level_json: Option<String>) -> Result<WebGame, JsValue> {
        let level = match level_json {
            Some(json) => Level::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Level::default(),
        };
        let session = GameSession::new(level, Tuning::default());
        Ok(Self {
            runner: Runner::new(session, ManualTime::default()),
        })
    }

    /// Generic button edge; returns true if it started a run
    pub fn press(&mut self, down: bool, time_ms: f64) -> bool {
        self.runner
            .press_at(InputSource::Keyboard, down, time_ms / 1000.0)
    }

    /// Keyboard edge by `KeyboardEvent.code`; non-jump keys are ignored
    pub fn key(&mut self, code: &str, down: bool, time_ms: f64) -> bool {
        if !is_jump_key(code) {
            return false;
        }
        self.runner
            .press_at(InputSource::Keyboard, down, time_ms / 1000.0)
    }

    pub fn pointer(&mut self, down: bool, time_ms: f64) -> bool {
        self.runner.press_at(InputSource::Mouse, down, time_ms / 1000.0)
    }

    pub fn touch(&mut self, down: bool, time_ms: f64) -> bool {
        self.runner.press_at(InputSource::Touch, down, time_ms / 1000.0)
    }

    /// Animation frame callback; returns whether to request another frame
    pub fn frame(&mut self, time_ms: f64) -> bool {
        self.runner.frame_at(time_ms / 1000.0) == FrameStatus::Continue
    }

    /// Render snapshot as JSON
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.runner.session().snapshot()).unwrap_or_default()
    }

    /// Events since the last call, as a JSON array
    pub fn events_json(&mut self) -> String {
        serde_json::to_string(&self.runner.drain_events()).unwrap_or_default()
    }

    pub fn attempts(&self) -> u32 {
        self.runner.session().attempts()
    }

    pub fn progress(&self) -> f32 {
        self.runner.session().progress()
    }
}
