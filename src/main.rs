//! Double Decision entry point
//!
//! The browser build is driven through the `web::Session` facade; the
//! native binary runs a headless autoplay session per difficulty as a
//! smoke test of the deterministic core.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Double Decision core loaded");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use double_decision::sim::{Difficulty, GamePhase, GameState, ObjectKind};
    use double_decision::theme::Theme;

    env_logger::init();
    log::info!("Double Decision (native) starting headless autoplay...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2024);
    let theme = Theme::builtin().remove(0);
    if let Err(e) = theme.validate() {
        log::error!("theme rejected: {e}");
        std::process::exit(1);
    }

    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let mut state = GameState::new(seed, difficulty);
        while state.phase != GamePhase::GameOver {
            if let Err(e) = state.begin_round(&theme) {
                log::error!("allocation integrity failure: {e}");
                std::process::exit(1);
            }
            let points = state.placements(16.0 / 9.0);
            assert_eq!(points.len(), state.objects.len());

            // Perfect player: answer with the truth
            let target_sector = state
                .objects
                .iter()
                .find(|o| o.kind == ObjectKind::Correct)
                .map(|o| o.sector as f64)
                .unwrap_or(-1.0);
            let guess = state.center_object.clone();
            let outcome = state.resolve(&guess, target_sector);
            assert!(outcome.success);
        }
        println!(
            "{:>6}: {} rounds, accuracy {}%, final display time {}ms",
            difficulty.as_str(),
            state.total_attempts,
            state.accuracy_percent(),
            state.display_time_ms
        );
    }
    println!("✓ Autoplay sessions completed");
}
