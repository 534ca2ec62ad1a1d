//! Configuration snapshot: the entity records the placement core reads, and
//! the patches it hands back.
//!
//! The external store owns these records. The core only ever proposes new
//! `position` / `rotationY` / `wallSide` values for a single entity at a time,
//! expressed as a [`PlacementPatch`]. Every other field is a read-only input
//! to footprint sizing.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BASIC_COUNTER_SIZE, DEFAULT_CABIN_SIZE, PREMIUM_COUNTER_SIZE, SCREEN_THICKNESS, TRUSS_COLUMN_INSET,
};
use crate::geom::{Point2, Size2};
use crate::stand::{StandArea, WallSide};

// =============================================================================
// ENTITY RECORDS
// =============================================================================

/// Counter model. Determines the default footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterVariant {
    #[default]
    Basic,
    Premium,
    Corner,
}

impl CounterVariant {
    /// Footprint used when a counter record carries no explicit size.
    #[must_use]
    pub fn default_size(self) -> Size2 {
        let (w, d) = match self {
            Self::Premium => PREMIUM_COUNTER_SIZE,
            Self::Basic | Self::Corner => BASIC_COUNTER_SIZE,
        };
        Size2::new(w, d)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counter {
    pub id: String,
    #[serde(default)]
    pub variant: CounterVariant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size2>,
    pub position: Point2,
    #[serde(default)]
    pub rotation_y: f64,
    /// Wall the counter leans against, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_side: Option<WallSide>,
}

impl Counter {
    /// Unrotated footprint.
    #[must_use]
    pub fn footprint(&self) -> Size2 {
        self.size.unwrap_or_else(|| self.variant.default_size())
    }
}

/// Where a screen hangs. Only floor screens stand in the floor band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenMount {
    #[default]
    Floor,
    Wall,
    Truss,
}

/// Screen diagonal class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScreenSize {
    #[serde(rename = "43")]
    Inch43,
    #[default]
    #[serde(rename = "55")]
    Inch55,
    #[serde(rename = "65")]
    Inch65,
    #[serde(rename = "75")]
    Inch75,
}

impl ScreenSize {
    /// Panel width in metres.
    #[must_use]
    pub fn width(self) -> f64 {
        match self {
            Self::Inch43 => 0.97,
            Self::Inch55 => 1.24,
            Self::Inch65 => 1.45,
            Self::Inch75 => 1.68,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub id: String,
    #[serde(default)]
    pub size: ScreenSize,
    #[serde(default)]
    pub mount: ScreenMount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_side: Option<WallSide>,
    pub position: Point2,
    #[serde(default)]
    pub rotation_y: f64,
}

impl Screen {
    /// Panel footprint facing the front of the stand (width × thickness).
    #[must_use]
    pub fn footprint(&self) -> Size2 {
        Size2::new(self.size.width(), SCREEN_THICKNESS)
    }

    /// Wall this screen is mounted on; back when unset.
    #[must_use]
    pub fn wall_side(&self) -> WallSide {
        self.wall_side.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cabin {
    pub enabled: bool,
    pub position: Point2,
    pub width: f64,
    pub depth: f64,
}

impl Default for Cabin {
    fn default() -> Self {
        Self { enabled: false, position: Point2::default(), width: DEFAULT_CABIN_SIZE.0, depth: DEFAULT_CABIN_SIZE.1 }
    }
}

impl Cabin {
    #[must_use]
    pub fn footprint(&self) -> Size2 {
        Size2::new(self.width, self.depth)
    }
}

/// Overhead truss rig. Its support columns stand at the stand corners,
/// shifted together by `offset`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrussRig {
    pub enabled: bool,
    pub offset: Point2,
}

impl TrussRig {
    /// Centres of the four support columns at the given offset, in
    /// back-left, back-right, front-left, front-right order.
    #[must_use]
    pub fn column_centers(stand: &StandArea, offset: Point2) -> [Point2; 4] {
        let cx = stand.half_width() - TRUSS_COLUMN_INSET;
        let cz = stand.half_depth() - TRUSS_COLUMN_INSET;
        [
            Point2::new(-cx, -cz).offset_by(offset),
            Point2::new(cx, -cz).offset_by(offset),
            Point2::new(-cx, cz).offset_by(offset),
            Point2::new(cx, cz).offset_by(offset),
        ]
    }
}

/// Committed configuration snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub stand: StandArea,
    #[serde(default)]
    pub cabin: Cabin,
    #[serde(default)]
    pub counters: Vec<Counter>,
    #[serde(default)]
    pub screens: Vec<Screen>,
    #[serde(default)]
    pub truss: TrussRig,
}

// =============================================================================
// ENTITY REFERENCES
// =============================================================================

/// Error returned when parsing an [`EntityRef`] from text.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EntityRefError {
    #[error("unknown entity kind in `{0}` (expected cabin, truss, counter:<id> or screen:<id>)")]
    UnknownKind(String),
    #[error("missing id in entity reference `{0}`")]
    MissingId(String),
}

/// Identifies one placeable entity in a [`Configuration`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EntityRef {
    Cabin,
    Counter(String),
    Screen(String),
    Truss,
}

impl EntityRef {
    /// Id carried by every collision box this entity contributes. Namespaced
    /// by kind, so a counter and a screen sharing a store id stay distinct.
    #[must_use]
    pub fn box_id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cabin => f.write_str("cabin"),
            Self::Truss => f.write_str("truss"),
            Self::Counter(id) => write!(f, "counter:{id}"),
            Self::Screen(id) => write!(f, "screen:{id}"),
        }
    }
}

impl FromStr for EntityRef {
    type Err = EntityRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            None if s == "cabin" => Ok(Self::Cabin),
            None if s == "truss" => Ok(Self::Truss),
            None if s == "counter" || s == "screen" => Err(EntityRefError::MissingId(s.to_string())),
            Some((_, "")) => Err(EntityRefError::MissingId(s.to_string())),
            Some(("counter", id)) => Ok(Self::Counter(id.to_string())),
            Some(("screen", id)) => Ok(Self::Screen(id.to_string())),
            _ => Err(EntityRefError::UnknownKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for EntityRef {
    type Error = EntityRefError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EntityRef> for String {
    fn from(value: EntityRef) -> Self {
        value.to_string()
    }
}

// =============================================================================
// PATCHES
// =============================================================================

/// Placement update for a single entity. Only present fields are applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementPatch {
    pub target: EntityRef,
    pub position: Point2,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_side: Option<WallSide>,
}

impl Configuration {
    /// Every placed entity, in scene-index order: cabin, counters, screens, truss.
    #[must_use]
    pub fn entity_refs(&self) -> Vec<EntityRef> {
        let mut refs = Vec::with_capacity(self.counters.len() + self.screens.len() + 2);
        if self.cabin.enabled {
            refs.push(EntityRef::Cabin);
        }
        refs.extend(self.counters.iter().map(|c| EntityRef::Counter(c.id.clone())));
        refs.extend(self.screens.iter().map(|s| EntityRef::Screen(s.id.clone())));
        if self.truss.enabled {
            refs.push(EntityRef::Truss);
        }
        refs
    }

    #[must_use]
    pub fn counter(&self, id: &str) -> Option<&Counter> {
        self.counters.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn screen(&self, id: &str) -> Option<&Screen> {
        self.screens.iter().find(|s| s.id == id)
    }

    /// Current position of an entity. For the truss this is its offset.
    /// Returns `None` for unknown ids and disabled cabin/truss.
    #[must_use]
    pub fn position_of(&self, target: &EntityRef) -> Option<Point2> {
        match target {
            EntityRef::Cabin => self.cabin.enabled.then_some(self.cabin.position),
            EntityRef::Truss => self.truss.enabled.then_some(self.truss.offset),
            EntityRef::Counter(id) => self.counter(id).map(|c| c.position),
            EntityRef::Screen(id) => self.screen(id).map(|s| s.position),
        }
    }

    /// Current facing of an entity. The cabin and truss never rotate.
    #[must_use]
    pub fn rotation_of(&self, target: &EntityRef) -> Option<f64> {
        match target {
            EntityRef::Cabin => self.cabin.enabled.then_some(0.0),
            EntityRef::Truss => self.truss.enabled.then_some(0.0),
            EntityRef::Counter(id) => self.counter(id).map(|c| c.rotation_y),
            EntityRef::Screen(id) => self.screen(id).map(|s| s.rotation_y),
        }
    }

    /// Apply a patch to the targeted entity. Returns false if it doesn't exist.
    ///
    /// `rotation_y` is ignored for the cabin and truss, which never rotate;
    /// `wall_side` is only meaningful for counters and screens.
    pub fn apply_patch(&mut self, patch: &PlacementPatch) -> bool {
        match &patch.target {
            EntityRef::Cabin => {
                if !self.cabin.enabled {
                    return false;
                }
                self.cabin.position = patch.position;
            }
            EntityRef::Truss => {
                if !self.truss.enabled {
                    return false;
                }
                self.truss.offset = patch.position;
            }
            EntityRef::Counter(id) => {
                let Some(counter) = self.counters.iter_mut().find(|c| &c.id == id) else {
                    return false;
                };
                counter.position = patch.position;
                if let Some(r) = patch.rotation_y {
                    counter.rotation_y = r;
                }
                if let Some(side) = patch.wall_side {
                    counter.wall_side = Some(side);
                }
            }
            EntityRef::Screen(id) => {
                let Some(screen) = self.screens.iter_mut().find(|s| &s.id == id) else {
                    return false;
                };
                screen.position = patch.position;
                if let Some(r) = patch.rotation_y {
                    screen.rotation_y = r;
                }
                if let Some(side) = patch.wall_side {
                    screen.wall_side = Some(side);
                }
            }
        }
        true
    }
}
