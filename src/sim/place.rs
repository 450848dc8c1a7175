//! Polar placement of peripheral objects
//!
//! Converts a sector assignment into a normalized on-screen position. The
//! correct object always sits at its sector's exact center at the middle of
//! the radius band, so its position is deterministic given the sector.
//! Fakes wander: random radius in the band, random angle inside a safe
//! sub-interval that keeps the sprite's angular footprint clear of both
//! sector edges. When the safe interval collapses the fake drops to the
//! sector center instead - the object must always land in its own sector.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::sector::SectorSpan;
use super::spawn::ObjectKind;
use crate::consts::{
    CONTAINER_PIXEL_SIZE, MAX_SPAWN_RADIUS, MIN_SPAWN_RADIUS, OBJECT_PIXEL_SIZE,
};
use crate::polar_to_cartesian;

/// Clearance multiplier applied to the sprite's half-angular footprint when
/// carving the safe sub-interval out of a sector
const EDGE_CLEARANCE_FACTOR: f32 = 4.0;

/// Normalized position within the play field, 0-100 on each axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x_percent: f32,
    pub y_percent: f32,
}

/// Half the angle subtended by the sprite at the given spawn radius
fn half_footprint_angle(radius_percent: f32) -> f32 {
    let radius_px = radius_percent / 100.0 * CONTAINER_PIXEL_SIZE;
    (OBJECT_PIXEL_SIZE / 2.0).atan2(radius_px)
}

/// Radius of the deterministic mid-band placement used for correct objects
pub fn mid_band_radius() -> f32 {
    (MIN_SPAWN_RADIUS + MAX_SPAWN_RADIUS) / 2.0
}

/// Choose the polar position `(angle, radius)` for an object in `span`.
///
/// Only the `Fake` branch consumes randomness; a correct object's position
/// is a pure function of its sector.
pub fn spawn_polar<R: Rng>(rng: &mut R, span: SectorSpan, kind: ObjectKind) -> (f32, f32) {
    if kind == ObjectKind::Correct {
        return (span.center(), mid_band_radius());
    }

    let radius = rng.random_range(MIN_SPAWN_RADIUS..MAX_SPAWN_RADIUS);
    let half = half_footprint_angle(radius);
    let margin = EDGE_CLEARANCE_FACTOR * half;

    let safe_start = span.start + margin;
    let safe_end = span.end - margin;
    if safe_end <= safe_start {
        // Sector too narrow for the sprite at this radius
        log::debug!(
            "sector {} safe interval collapsed (margin {margin:.4}), centering fake",
            span.index
        );
        return (span.center(), radius);
    }

    let angle = rng.random_range(safe_start..safe_end);
    // Final safety net against float edge cases: the whole footprint must
    // stay inside the wedge
    if angle - half < span.start || angle + half > span.end {
        return (span.center(), radius);
    }
    (angle, radius)
}

/// Compute the on-screen position for an object in `sector`.
///
/// The horizontal radius component is divided by `aspect_ratio`
/// (width / height of the rendering surface) so equal radii trace a visual
/// circle on non-square surfaces. Re-invoke per render; the aspect ratio
/// can change between rounds.
pub fn place<R: Rng>(
    rng: &mut R,
    sector: usize,
    kind: ObjectKind,
    total_sectors: usize,
    aspect_ratio: f32,
) -> SpawnPoint {
    let span = SectorSpan::of(sector, total_sectors);
    let (angle, radius) = spawn_polar(rng, span, kind);
    let offset = polar_to_cartesian(radius, angle);
    SpawnPoint {
        x_percent: 50.0 + offset.x / aspect_ratio,
        y_percent: 50.0 + offset.y,
    }
}
