//! Random sector allocation for peripheral objects
//!
//! Each round spawns a set of peripheral objects, exactly one of which is
//! the real target. Every object is bound to a distinct sector via an
//! unbiased shuffle of the sector indices, so two objects can never share
//! a wedge. Downstream scoring and rendering assume both invariants
//! unconditionally, so they are verified before the set is returned.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::Theme;

/// Difficulty tier, controlling how many distractors spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a difficulty string; unrecognized values fail closed to Easy
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Objects spawned per round, capped at the sector count since every
    /// object needs its own sector
    pub fn object_count(&self, total_sectors: usize) -> usize {
        let count = match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 4,
            Difficulty::Hard => 8,
        };
        count.min(total_sectors)
    }
}

/// Whether an object is the real target or a distractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    Correct,
    Fake,
}

/// A spawned peripheral object, bound to one sector for the round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeripheralObject {
    pub kind: ObjectKind,
    /// Opaque asset reference from the active theme
    pub image: String,
    /// Sector index in `[0, total_sectors)`
    pub sector: usize,
}

/// Allocation failures. Integrity variants indicate a logic defect and
/// must abort the round, never be papered over.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpawnError {
    #[error("two peripheral objects assigned to sector {sector}")]
    DuplicateSector { sector: usize },
    #[error("peripheral object assigned to sector {sector}, field has {total}")]
    SectorOutOfRange { sector: usize, total: usize },
    #[error("allocation produced {count} correct objects, expected exactly 1")]
    CorrectCount { count: usize },
    #[error("active theme has no fake images but difficulty requires distractors")]
    EmptyFakePool,
}

/// Allocate this round's peripheral objects.
///
/// Shuffles the sector indices (Fisher-Yates via `SliceRandom::shuffle`)
/// and assigns the first `object_count` entries in order. Permutation slot
/// 0 is always the correct object; the rest draw independently from the
/// theme's fake-image pool.
pub fn allocate<R: Rng>(
    rng: &mut R,
    difficulty: Difficulty,
    theme: &Theme,
    total_sectors: usize,
) -> Result<Vec<PeripheralObject>, SpawnError> {
    debug_assert!(total_sectors >= 1);
    let count = difficulty.object_count(total_sectors);

    let mut sectors: Vec<usize> = (0..total_sectors).collect();
    sectors.shuffle(rng);

    let mut objects = Vec::with_capacity(count);
    objects.push(PeripheralObject {
        kind: ObjectKind::Correct,
        image: theme.correct_peripheral.clone(),
        sector: sectors[0],
    });

    if count > 1 && theme.fake_peripherals.is_empty() {
        return Err(SpawnError::EmptyFakePool);
    }
    for &sector in sectors.iter().take(count).skip(1) {
        let fake = &theme.fake_peripherals[rng.random_range(0..theme.fake_peripherals.len())];
        objects.push(PeripheralObject {
            kind: ObjectKind::Fake,
            image: fake.clone(),
            sector,
        });
    }

    verify_integrity(&objects, total_sectors)?;
    Ok(objects)
}

/// Structurally impossible given the shuffle, but scoring depends on these
/// invariants, so a corrupt set is rejected rather than returned.
fn verify_integrity(
    objects: &[PeripheralObject],
    total_sectors: usize,
) -> Result<(), SpawnError> {
    let mut seen = vec![false; total_sectors];
    let mut correct = 0usize;
    for obj in objects {
        if obj.sector >= total_sectors {
            return Err(SpawnError::SectorOutOfRange {
                sector: obj.sector,
                total: total_sectors,
            });
        }
        if seen[obj.sector] {
            return Err(SpawnError::DuplicateSector { sector: obj.sector });
        }
        seen[obj.sector] = true;
        if obj.kind == ObjectKind::Correct {
            correct += 1;
        }
    }
    if correct != 1 {
        return Err(SpawnError::CorrectCount { count: correct });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::NUM_SECTORS;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn theme() -> Theme {
        Theme::builtin().into_iter().next().unwrap()
    }

    #[test]
    fn test_count_by_difficulty() {
        let theme = theme();
        let mut rng = Pcg32::seed_from_u64(7);
        for (difficulty, expected) in [
            (Difficulty::Easy, 1),
            (Difficulty::Medium, 4),
            (Difficulty::Hard, 8),
        ] {
            let objects = allocate(&mut rng, difficulty, &theme, NUM_SECTORS).unwrap();
            assert_eq!(objects.len(), expected);
        }
    }

    #[test]
    fn test_count_capped_at_sector_count() {
        let theme = theme();
        let mut rng = Pcg32::seed_from_u64(7);
        let objects = allocate(&mut rng, Difficulty::Hard, &theme, 3).unwrap();
        assert_eq!(objects.len(), 3);
        assert!(objects.iter().all(|o| o.sector < 3));
    }

    #[test]
    fn test_many_allocations_hold_invariants() {
        let theme = theme();
        for seed in 0..10_000u64 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let objects = allocate(&mut rng, Difficulty::Hard, &theme, NUM_SECTORS).unwrap();

            let mut sectors: Vec<usize> = objects.iter().map(|o| o.sector).collect();
            sectors.sort_unstable();
            sectors.dedup();
            assert_eq!(sectors.len(), objects.len(), "seed {seed}: duplicate sector");

            let correct = objects
                .iter()
                .filter(|o| o.kind == ObjectKind::Correct)
                .count();
            assert_eq!(correct, 1, "seed {seed}: correct count {correct}");

            assert!(objects.iter().all(|o| o.sector < NUM_SECTORS));
        }
    }

    #[test]
    fn test_correct_object_uses_theme_target() {
        let theme = theme();
        let mut rng = Pcg32::seed_from_u64(42);
        let objects = allocate(&mut rng, Difficulty::Medium, &theme, NUM_SECTORS).unwrap();
        let correct = objects
            .iter()
            .find(|o| o.kind == ObjectKind::Correct)
            .unwrap();
        assert_eq!(correct.image, theme.correct_peripheral);
        for fake in objects.iter().filter(|o| o.kind == ObjectKind::Fake) {
            assert!(theme.fake_peripherals.contains(&fake.image));
        }
    }

    #[test]
    fn test_empty_fake_pool_rejected() {
        let mut theme = theme();
        theme.fake_peripherals.clear();
        let mut rng = Pcg32::seed_from_u64(1);
        // Easy needs no fakes, so an empty pool is fine
        assert!(allocate(&mut rng, Difficulty::Easy, &theme, NUM_SECTORS).is_ok());
        assert_eq!(
            allocate(&mut rng, Difficulty::Medium, &theme, NUM_SECTORS),
            Err(SpawnError::EmptyFakePool)
        );
    }

    #[test]
    fn test_verify_integrity_rejects_corrupt_sets() {
        let dup = vec![
            PeripheralObject {
                kind: ObjectKind::Correct,
                image: "a".into(),
                sector: 2,
            },
            PeripheralObject {
                kind: ObjectKind::Fake,
                image: "b".into(),
                sector: 2,
            },
        ];
        assert_eq!(
            verify_integrity(&dup, 8),
            Err(SpawnError::DuplicateSector { sector: 2 })
        );

        let two_correct = vec![
            PeripheralObject {
                kind: ObjectKind::Correct,
                image: "a".into(),
                sector: 0,
            },
            PeripheralObject {
                kind: ObjectKind::Correct,
                image: "a".into(),
                sector: 1,
            },
        ];
        assert_eq!(
            verify_integrity(&two_correct, 8),
            Err(SpawnError::CorrectCount { count: 2 })
        );
    }

    #[test]
    fn test_difficulty_parse_fails_closed() {
        assert_eq!(Difficulty::parse("medium"), Difficulty::Medium);
        assert_eq!(Difficulty::parse("HARD"), Difficulty::Hard);
        assert_eq!(Difficulty::parse("nightmare"), Difficulty::Easy);
        assert_eq!(Difficulty::parse(""), Difficulty::Easy);
    }

    proptest! {
        #[test]
        fn prop_allocation_invariants(
            seed in any::<u64>(),
            diff_idx in 0usize..3,
            total in 1usize..=12,
        ) {
            let difficulty = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard][diff_idx];
            let theme = theme();
            let mut rng = Pcg32::seed_from_u64(seed);
            let objects = allocate(&mut rng, difficulty, &theme, total).unwrap();

            prop_assert_eq!(objects.len(), difficulty.object_count(total));
            let mut sectors: Vec<usize> = objects.iter().map(|o| o.sector).collect();
            sectors.sort_unstable();
            sectors.dedup();
            prop_assert_eq!(sectors.len(), objects.len());
            prop_assert!(objects.iter().all(|o| o.sector < total));
            prop_assert_eq!(
                objects.iter().filter(|o| o.kind == ObjectKind::Correct).count(),
                1
            );
        }
    }
}
