//! Round outcome evaluation
//!
//! The clicked sector arrives from the UI layer as an untrusted number;
//! anything malformed (NaN, fractional, negative, past the sector count)
//! scores as incorrect rather than failing, since a stale click must never
//! take the session down.

use super::spawn::{ObjectKind, PeripheralObject};

/// Validate a raw clicked-sector value into an index in `[0, total)`
pub fn coerce_sector(raw: f64, total_sectors: usize) -> Option<usize> {
    if !raw.is_finite() || raw.fract() != 0.0 || raw < 0.0 {
        return None;
    }
    let sector = raw as usize;
    (sector < total_sectors).then_some(sector)
}

/// True iff the clicked sector holds the correct object.
///
/// Checks kind and sector explicitly instead of leaning on the allocator's
/// one-object-per-sector invariant, so a hypothetically corrupt set still
/// evaluates to a boolean instead of crashing.
pub fn is_click_on_correct_sector(
    objects: &[PeripheralObject],
    clicked_sector: f64,
    total_sectors: usize,
) -> bool {
    let Some(sector) = coerce_sector(clicked_sector, total_sectors) else {
        return false;
    };
    objects
        .iter()
        .any(|obj| obj.sector == sector && obj.kind == ObjectKind::Correct)
}

/// Composite round rule: both the center-object guess and the sector click
/// must be right.
pub fn round_success(
    center_guess: &str,
    center_object: &str,
    objects: &[PeripheralObject],
    clicked_sector: f64,
    total_sectors: usize,
) -> bool {
    center_guess == center_object
        && is_click_on_correct_sector(objects, clicked_sector, total_sectors)
}
