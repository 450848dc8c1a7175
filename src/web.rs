//! wasm-bindgen session facade
//!
//! The DOM layer owns all rendering, timers, and input wiring; this module
//! only hands it round data as JSON strings and accepts its answers. Every
//! call completes synchronously.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;

use crate::progress::SavedProgress;
use crate::sim::{Difficulty, GamePhase, GameState};
use crate::theme::{choose_theme, Theme};

/// One game session, driven from JavaScript
#[wasm_bindgen]
pub struct Session {
    state: GameState,
    theme: Theme,
}

#[wasm_bindgen]
impl Session {
    /// Start a session. `seed` of 0 derives one from the clock; the theme
    /// is drawn from the session seed.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64, difficulty: &str) -> Result<Session, JsValue> {
        let seed = if seed == 0 {
            js_sys::Date::now() as u64
        } else {
            seed
        };
        let mut rng = Pcg32::seed_from_u64(seed);
        let theme = choose_theme(&mut rng);
        theme
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let mut state = GameState::new(seed, Difficulty::parse(difficulty));
        SavedProgress::load().apply_to(&mut state);

        log::info!("session start: seed {seed}, theme '{}'", theme.name);
        Ok(Session { state, theme })
    }

    /// Begin the next round. Returns the round snapshot (center object,
    /// peripheral objects, display time) as JSON.
    pub fn begin_round(&mut self) -> Result<String, JsValue> {
        self.state
            .begin_round(&self.theme)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_json::to_string(&self.state).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Positions for the current round's objects, as a JSON array aligned
    /// with the round snapshot's object order
    pub fn placements(&self, aspect_ratio: f32) -> Result<String, JsValue> {
        serde_json::to_string(&self.state.placements(aspect_ratio))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Score the player's answers and advance the session. Returns the
    /// round outcome as JSON and persists progress.
    pub fn resolve(&mut self, center_guess: &str, clicked_sector: f64) -> Result<String, JsValue> {
        let outcome = self.state.resolve(center_guess, clicked_sector);
        SavedProgress::from_state(&self.state).save();
        serde_json::to_string(&outcome).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Reset the session and drop saved progress
    pub fn reset(&mut self) {
        SavedProgress::clear();
        self.state.reset();
    }

    #[wasm_bindgen(getter)]
    pub fn round(&self) -> u32 {
        self.state.round
    }

    #[wasm_bindgen(getter)]
    pub fn display_time_ms(&self) -> u32 {
        self.state.display_time_ms
    }

    #[wasm_bindgen(getter)]
    pub fn accuracy_percent(&self) -> u32 {
        self.state.accuracy_percent()
    }

    #[wasm_bindgen(getter)]
    pub fn game_over(&self) -> bool {
        self.state.phase == GamePhase::GameOver
    }

    #[wasm_bindgen(getter)]
    pub fn background_class(&self) -> String {
        self.theme.background_class.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn click_prompt(&self) -> String {
        self.theme.click_prompt.clone()
    }
}
