//! Sector geometry for the circular play field
//!
//! The field is divided into `total` equal angular wedges. Sector 0 begins
//! at the top of the circle (-π/2 in math orientation) and indices proceed
//! in increasing-angle order. The spawn logic and the UI's wedge overlay
//! must share this convention or clicks will misalign with spawned objects.

use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::normalize_angle;

/// The angular span of one sector index
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SectorSpan {
    /// Sector index in `[0, total)`
    pub index: usize,
    /// Start angle (radians, un-normalized; always < `end`)
    pub start: f32,
    /// End angle (radians)
    pub end: f32,
}

impl SectorSpan {
    /// Span of sector `index` out of `total` equal wedges.
    ///
    /// Angles are left un-normalized so `start < end` always holds; for an
    /// 8-sector field they cover `[-π/2, 3π/2)` going once around.
    pub fn of(index: usize, total: usize) -> Self {
        debug_assert!(total > 0 && index < total);
        let step = TAU / total as f32;
        let start = index as f32 * step - FRAC_PI_2;
        Self {
            index,
            start,
            end: start + step,
        }
    }

    /// Angular width of the wedge
    #[inline]
    pub fn width(&self) -> f32 {
        self.end - self.start
    }

    /// Center angle of the wedge
    #[inline]
    pub fn center(&self) -> f32 {
        self.start + self.width() / 2.0
    }

    /// Check if an angle falls within this wedge (inclusive ends)
    pub fn contains_angle(&self, theta: f32) -> bool {
        let t = wrap_into_field(theta);
        t >= self.start && t <= self.end
    }
}

/// Bring an arbitrary angle into the field's covering range `[-π/2, 3π/2)`
#[inline]
fn wrap_into_field(theta: f32) -> f32 {
    let t = normalize_angle(theta);
    if t < -FRAC_PI_2 { t + TAU } else { t }
}

/// Map an angle back to the sector index containing it
pub fn sector_of_angle(theta: f32, total: usize) -> usize {
    let step = TAU / total as f32;
    let t = wrap_into_field(theta) + FRAC_PI_2;
    ((t / step) as usize).min(total - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_spans_tile_the_circle() {
        let total = 8;
        for i in 0..total {
            let span = SectorSpan::of(i, total);
            assert!((span.width() - TAU / 8.0).abs() < EPS);
            if i > 0 {
                let prev = SectorSpan::of(i - 1, total);
                assert!((prev.end - span.start).abs() < EPS);
            }
        }
        // First sector starts at the top of the circle
        assert!((SectorSpan::of(0, total).start + FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn test_sector_zero_centered_at_top() {
        // Center of sector 0 sits between -π/2 and -π/4 for N=8
        let span = SectorSpan::of(0, 8);
        assert!((span.center() - (-FRAC_PI_2 + TAU / 16.0)).abs() < EPS);
        assert!(span.contains_angle(-FRAC_PI_2));
        assert!(span.contains_angle(span.center()));
        assert!(!span.contains_angle(0.0));
    }

    #[test]
    fn test_contains_angle_wraps() {
        // Sector 6 of 8 spans [π, 5π/4); query angles normalized to [-π, π)
        let span = SectorSpan::of(6, 8);
        assert!(span.contains_angle(PI));
        assert!(span.contains_angle(-PI + 0.1));
        assert!(!span.contains_angle(0.0));
    }

    #[test]
    fn test_angle_round_trips_to_index() {
        let total = 8;
        for i in 0..total {
            let span = SectorSpan::of(i, total);
            assert_eq!(sector_of_angle(span.center(), total), i);
            // Just inside the edges
            assert_eq!(sector_of_angle(span.start + 1e-3, total), i);
            assert_eq!(sector_of_angle(span.end - 1e-3, total), i);
        }
    }
}
