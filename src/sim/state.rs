//! Session and round state
//!
//! All state the outer loop needs between rounds lives here. The state is
//! serializable and fully deterministic: every round draws from a `Pcg32`
//! derived from the session seed and the round number, so a session can be
//! replayed from `(seed, difficulty)` alone.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::outcome::is_click_on_correct_sector;
use super::place::{place, SpawnPoint};
use super::spawn::{allocate, Difficulty, PeripheralObject, SpawnError};
use crate::consts::*;
use crate::theme::Theme;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Between rounds, waiting for the outer loop to start the next one
    Ready,
    /// Objects are on screen (or hidden, awaiting the player's clicks)
    InRound,
    /// All rounds played
    GameOver,
}

/// What `resolve` decided about a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub center_correct: bool,
    pub sector_correct: bool,
    /// Both answers right
    pub success: bool,
    /// This was the final round of the session
    pub game_over: bool,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub difficulty: Difficulty,
    /// Current round number, 1-based
    pub round: u32,
    pub total_attempts: u32,
    pub correct_answers: u32,
    /// Shrinking display-time budget for the current round
    pub display_time_ms: u32,
    pub phase: GamePhase,
    /// This round's center object (asset ref drawn from the theme)
    pub center_object: String,
    /// This round's peripheral objects; immutable until `resolve`
    pub objects: Vec<PeripheralObject>,
}

impl GameState {
    pub fn new(seed: u64, difficulty: Difficulty) -> Self {
        Self {
            seed,
            difficulty,
            round: 1,
            total_attempts: 0,
            correct_answers: 0,
            display_time_ms: INITIAL_DISPLAY_TIME_MS.clamp(MIN_DISPLAY_TIME_MS, MAX_DISPLAY_TIME_MS),
            phase: GamePhase::Ready,
            center_object: String::new(),
            objects: Vec::new(),
        }
    }

    /// Deterministic per-round seed: golden-ratio hash of the round number
    /// mixed with the session seed, so rounds differ within a run while the
    /// run stays reproducible
    fn round_seed(&self) -> u64 {
        (self.round as u64)
            .wrapping_mul(2654435761)
            .wrapping_add(self.seed)
    }

    /// Start a new round: draw the center object and allocate this round's
    /// peripheral objects
    pub fn begin_round(&mut self, theme: &Theme) -> Result<(), SpawnError> {
        debug_assert!(self.phase != GamePhase::GameOver);
        let mut rng = Pcg32::seed_from_u64(self.round_seed());

        self.center_object =
            theme.center_objects[rng.random_range(0..theme.center_objects.len())].clone();
        self.objects = allocate(&mut rng, self.difficulty, theme, NUM_SECTORS)?;
        self.phase = GamePhase::InRound;

        log::debug!(
            "round {} ({}): {} objects, display {}ms",
            self.round,
            self.difficulty.as_str(),
            self.objects.len(),
            self.display_time_ms
        );
        Ok(())
    }

    /// On-screen positions for this round's objects, aligned index-for-index
    /// with `objects`. Recomputed per render rather than cached since the
    /// surface aspect ratio can change; the draw is seeded per round so the
    /// fakes do not jump between renders.
    pub fn placements(&self, aspect_ratio: f32) -> Vec<SpawnPoint> {
        // Offset stream keeps placement draws independent of allocation draws
        let mut rng = Pcg32::seed_from_u64(self.round_seed().wrapping_add(1));
        self.objects
            .iter()
            .map(|obj| place(&mut rng, obj.sector, obj.kind, NUM_SECTORS, aspect_ratio))
            .collect()
    }

    /// Score the player's answers, update the counters, shrink the display
    /// time, and advance to the next round (or end the session)
    pub fn resolve(&mut self, center_guess: &str, clicked_sector: f64) -> RoundOutcome {
        let center_correct = center_guess == self.center_object;
        let sector_correct =
            is_click_on_correct_sector(&self.objects, clicked_sector, NUM_SECTORS);
        let success = center_correct && sector_correct;

        self.total_attempts += 1;
        if success {
            self.correct_answers += 1;
        }
        // Harder every round: less time to see the objects
        self.display_time_ms =
            (self.display_time_ms.saturating_sub(DIFFICULTY_STEP_MS)).max(MIN_DISPLAY_TIME_MS);

        self.round += 1;
        let game_over = self.round > TOTAL_ROUNDS;
        self.phase = if game_over {
            GamePhase::GameOver
        } else {
            GamePhase::Ready
        };

        RoundOutcome {
            center_correct,
            sector_correct,
            success,
            game_over,
        }
    }

    /// Rounded percentage of successful rounds so far
    pub fn accuracy_percent(&self) -> u32 {
        if self.total_attempts == 0 {
            return 0;
        }
        ((self.correct_answers as f32 / self.total_attempts as f32) * 100.0).round() as u32
    }

    /// Reset for a fresh session, keeping seed and difficulty
    pub fn reset(&mut self) {
        *self = Self::new(self.seed, self.difficulty);
    }
}
