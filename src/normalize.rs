//! Turning a raw requested position into a legal one.

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;

use serde::Serialize;

use crate::anchor::{AnchorAxis, anchor};
use crate::clamp::clamp;
use crate::consts::MIN_HALF_EXTENT;
use crate::geom::Point2;
use crate::profile::{InteractionProfile, MountKind};
use crate::stand::StandArea;

/// Legal position (and facing, when a wall dictates one) for an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPlacement {
    pub position: Point2,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_y: Option<f64>,
}

/// Normalize `target` for an entity placed according to `profile`.
///
/// Wall-mounted profiles are pinned to their wall and clamped along it. Floor
/// profiles are clamped on both axes, then pinned to their wall as well when
/// they lean against one.
#[must_use]
pub fn normalize(target: Point2, profile: &InteractionProfile, stand: &StandArea) -> NormalizedPlacement {
    let gap = profile.snap_gap.unwrap_or(0.0);
    match profile.wall_side {
        Some(side) if profile.mount == MountKind::Wall => {
            let wall = anchor(side, stand, gap);
            let half_along = profile.size.w / 2.0;
            let clamped = match wall.axis {
                AnchorAxis::Z(_) => clamp(target.x, target.z, stand, half_along, MIN_HALF_EXTENT),
                AnchorAxis::X(_) => clamp(target.x, target.z, stand, MIN_HALF_EXTENT, half_along),
            };
            NormalizedPlacement { position: wall.apply(clamped), rotation_y: Some(wall.rotation_y) }
        }
        Some(side) if profile.stick_to_wall => {
            let wall = anchor(side, stand, gap);
            let (half_w, half_d) = profile.size.rotated(wall.rotation_y).half();
            let clamped = clamp(target.x, target.z, stand, half_w, half_d);
            NormalizedPlacement { position: wall.apply(clamped), rotation_y: Some(wall.rotation_y) }
        }
        _ => {
            let (half_w, half_d) = profile.size.half();
            NormalizedPlacement { position: clamp(target.x, target.z, stand, half_w, half_d), rotation_y: None }
        }
    }
}
