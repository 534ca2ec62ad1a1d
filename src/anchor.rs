//! Flush-mounting objects against a wall.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

use std::f64::consts::FRAC_PI_2;

use crate::geom::Point2;
use crate::stand::{StandArea, WallSide};

/// The axis a wall anchor pins, and the coordinate it pins it to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorAxis {
    X(f64),
    Z(f64),
}

/// Fixed coordinate and facing for an object flush against one wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallAnchor {
    pub axis: AnchorAxis,
    /// Rotation about the vertical axis that makes the object face the stand.
    pub rotation_y: f64,
}

impl WallAnchor {
    /// Pin the anchored axis of `point`, leaving the other axis as given.
    #[must_use]
    pub fn apply(&self, point: Point2) -> Point2 {
        match self.axis {
            AnchorAxis::X(x) => Point2 { x, z: point.z },
            AnchorAxis::Z(z) => Point2 { x: point.x, z },
        }
    }

    #[must_use]
    pub fn x(&self) -> Option<f64> {
        match self.axis {
            AnchorAxis::X(x) => Some(x),
            AnchorAxis::Z(_) => None,
        }
    }

    #[must_use]
    pub fn z(&self) -> Option<f64> {
        match self.axis {
            AnchorAxis::Z(z) => Some(z),
            AnchorAxis::X(_) => None,
        }
    }
}

/// Compute the anchor for `side`, `offset` metres in from the wall's usable face.
#[must_use]
pub fn anchor(side: WallSide, stand: &StandArea, offset: f64) -> WallAnchor {
    let inset = stand.wall_inset() + offset;
    match side {
        WallSide::Back => WallAnchor { axis: AnchorAxis::Z(-stand.half_depth() + inset), rotation_y: 0.0 },
        WallSide::Left => WallAnchor { axis: AnchorAxis::X(-stand.half_width() + inset), rotation_y: FRAC_PI_2 },
        WallSide::Right => WallAnchor { axis: AnchorAxis::X(stand.half_width() - inset), rotation_y: -FRAC_PI_2 },
    }
}

/// The wall whose interior face is closest to `point`.
///
/// Ties go to the back wall first, then left, then right.
#[must_use]
pub fn nearest_wall(point: Point2, stand: &StandArea) -> WallSide {
    let distance = |side: WallSide| match side {
        WallSide::Back => point.z + stand.half_depth(),
        WallSide::Left => point.x + stand.half_width(),
        WallSide::Right => stand.half_width() - point.x,
    };
    let mut best = WallSide::Back;
    for side in [WallSide::Left, WallSide::Right] {
        if distance(side) < distance(best) {
            best = side;
        }
    }
    best
}
