//! Deterministic round logic
//!
//! Everything that decides a round lives here. This module must be pure and
//! deterministic:
//! - Seeded RNG only (one `Pcg32` per round, derived from the session seed)
//! - No rendering or platform dependencies
//! - Every call completes synchronously; nothing here suspends or blocks

pub mod outcome;
pub mod place;
pub mod sector;
pub mod spawn;
pub mod state;

pub use outcome::{is_click_on_correct_sector, round_success};
pub use place::{place, SpawnPoint};
pub use sector::SectorSpan;
pub use spawn::{allocate, Difficulty, ObjectKind, PeripheralObject, SpawnError};
pub use state::{GamePhase, GameState, RoundOutcome};
