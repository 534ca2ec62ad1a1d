//! Confining a footprint to the stand floor.

#[cfg(test)]
#[path = "clamp_test.rs"]
mod clamp_test;

use crate::geom::Point2;
use crate::stand::StandArea;

/// Clamp `(x, z)` so a footprint with half-extents `(half_w, half_d)` centred
/// there stays inside `stand`.
///
/// A footprint wider than the stand on some axis has no legal position on
/// that axis; it is centred on it instead.
#[must_use]
pub fn clamp(x: f64, z: f64, stand: &StandArea, half_w: f64, half_d: f64) -> Point2 {
    Point2 {
        x: clamp_axis(x, stand.half_width(), half_w),
        z: clamp_axis(z, stand.half_depth(), half_d),
    }
}

fn clamp_axis(value: f64, half_extent: f64, half_size: f64) -> f64 {
    let hi = half_extent - half_size;
    let lo = -hi;
    if lo > hi {
        return 0.0;
    }
    value.clamp(lo, hi)
}
