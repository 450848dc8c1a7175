//! Running statistics persisted between sessions
//!
//! Stored in LocalStorage on the web build; native builds keep everything
//! in memory. What survives across visits: the current display-time budget
//! and the lifetime attempt/correct counters.

use serde::{Deserialize, Serialize};

use crate::consts::{INITIAL_DISPLAY_TIME_MS, MAX_DISPLAY_TIME_MS, MIN_DISPLAY_TIME_MS};
use crate::sim::GameState;

/// Persisted slice of session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedProgress {
    pub display_time_ms: u32,
    pub total_attempts: u32,
    pub correct_answers: u32,
}

impl Default for SavedProgress {
    fn default() -> Self {
        Self {
            display_time_ms: INITIAL_DISPLAY_TIME_MS,
            total_attempts: 0,
            correct_answers: 0,
        }
    }
}

impl SavedProgress {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "double_decision_progress";

    pub fn from_state(state: &GameState) -> Self {
        Self {
            display_time_ms: state.display_time_ms,
            total_attempts: state.total_attempts,
            correct_answers: state.correct_answers,
        }
    }

    /// Restore the persisted counters into a session
    pub fn apply_to(&self, state: &mut GameState) {
        state.display_time_ms = self
            .display_time_ms
            .clamp(MIN_DISPLAY_TIME_MS, MAX_DISPLAY_TIME_MS);
        state.total_attempts = self.total_attempts;
        state.correct_answers = self.correct_answers;
    }

    /// Load saved progress from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(progress) = serde_json::from_str(&json) {
                    log::info!("Loaded saved progress");
                    return progress;
                }
            }
        }

        log::info!("No saved progress, starting fresh");
        Self::default()
    }

    /// Save progress to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Progress saved");
            }
        }
    }

    /// Remove saved progress (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn clear() {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.remove_item(Self::STORAGE_KEY);
            log::info!("Progress cleared");
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn clear() {
        // No-op for native
    }
}
