//! Per-entity-type placement policy.
//!
//! A profile says *how* an entity may be placed: how large its footprint is,
//! whether it stands on the floor or hangs on a wall, and how it snaps. It
//! carries no identity; [`profile_for`] is the single lookup from an entity
//! record to its profile.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};

use crate::consts::{COUNTER_WALL_GAP, TRUSS_COLUMN_INSET, TRUSS_COLUMN_SIZE};
use crate::geom::Size2;
use crate::layout::{Configuration, EntityRef, ScreenMount};
use crate::stand::WallSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MountKind {
    #[default]
    Floor,
    Wall,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionProfile {
    /// Footprint in the entity's own frame: `w` runs along the wall it faces.
    pub size: Size2,
    pub mount: MountKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_side: Option<WallSide>,
    /// Floor objects only: lean against `wall_side` without being wall-mounted.
    #[serde(default)]
    pub stick_to_wall: bool,
    /// Distance kept from the wall face when anchoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snap_gap: Option<f64>,
    /// Safety margin added around the footprint for collision tests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
}

impl InteractionProfile {
    /// Free-standing floor object with no wall relationship.
    #[must_use]
    pub fn floor(size: Size2) -> Self {
        Self { size, mount: MountKind::Floor, wall_side: None, stick_to_wall: false, snap_gap: None, padding: None }
    }

    /// Object hung flush on `side`.
    #[must_use]
    pub fn wall(size: Size2, side: WallSide) -> Self {
        Self { size, mount: MountKind::Wall, wall_side: Some(side), stick_to_wall: false, snap_gap: None, padding: None }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    #[must_use]
    pub fn with_snap_gap(mut self, gap: f64) -> Self {
        self.snap_gap = Some(gap);
        self
    }

    /// Floor object that leans against `side`.
    #[must_use]
    pub fn leaning_on(mut self, side: WallSide) -> Self {
        self.wall_side = Some(side);
        self.stick_to_wall = true;
        self
    }

    /// Whether the placement is pinned to a wall, by mount or by leaning.
    #[must_use]
    pub fn is_wall_bound(&self) -> bool {
        self.wall_side.is_some() && (self.mount == MountKind::Wall || self.stick_to_wall)
    }
}

/// Footprint spanned by the truss columns, used to keep every column on the floor.
#[must_use]
pub fn truss_span(configuration: &Configuration) -> Size2 {
    let stand = &configuration.stand;
    Size2::new(
        stand.width - 2.0 * TRUSS_COLUMN_INSET + TRUSS_COLUMN_SIZE,
        stand.depth - 2.0 * TRUSS_COLUMN_INSET + TRUSS_COLUMN_SIZE,
    )
}

/// Look up the placement profile for an entity in `configuration`.
///
/// `clearance` becomes the profile padding. Returns `None` for entities that
/// are not present (unknown id, disabled cabin or truss).
#[must_use]
pub fn profile_for(target: &EntityRef, configuration: &Configuration, clearance: f64) -> Option<InteractionProfile> {
    let profile = match target {
        EntityRef::Cabin => {
            let cabin = &configuration.cabin;
            if !cabin.enabled {
                return None;
            }
            InteractionProfile::floor(cabin.footprint())
        }
        EntityRef::Truss => {
            if !configuration.truss.enabled {
                return None;
            }
            InteractionProfile::floor(truss_span(configuration))
        }
        EntityRef::Counter(id) => {
            let counter = configuration.counter(id)?;
            let footprint = counter.footprint();
            match counter.wall_side {
                // Leaning counters keep their front facing the stand; the anchor
                // supplies the rotation, so the footprint stays in its own frame.
                Some(side) => InteractionProfile::floor(footprint)
                    .leaning_on(side)
                    .with_snap_gap(footprint.d / 2.0 + COUNTER_WALL_GAP),
                None => InteractionProfile::floor(footprint.rotated(counter.rotation_y)),
            }
        }
        EntityRef::Screen(id) => {
            let screen = configuration.screen(id)?;
            match screen.mount {
                // Flush against the panel face: no snap gap.
                ScreenMount::Wall => InteractionProfile::wall(screen.footprint(), screen.wall_side()),
                ScreenMount::Floor | ScreenMount::Truss => {
                    InteractionProfile::floor(screen.footprint().rotated(screen.rotation_y))
                }
            }
        }
    };
    Some(profile.with_padding(clearance))
}
