//! The bounded floor rectangle and the walls around it.
//!
//! The stand is centred on the origin: x spans `[-width/2, width/2]` and z
//! spans `[-depth/2, depth/2]`, with the back wall at `-depth/2`.

#[cfg(test)]
#[path = "stand_test.rs"]
mod stand_test;

use serde::{Deserialize, Serialize};

use crate::consts::{PANEL_GAP, WALL_THICKNESS};

/// Error returned when stand dimensions are not usable.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StandError {
    #[error("stand {axis} must be finite and positive, got {value}")]
    InvalidDimension { axis: &'static str, value: f64 },
    #[error("stand {field} must be finite and non-negative, got {value}")]
    InvalidWall { field: &'static str, value: f64 },
}

/// One of the three walls an object can be mounted against. The front is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallSide {
    #[default]
    Back,
    Left,
    Right,
}

impl WallSide {
    pub const ALL: [WallSide; 3] = [WallSide::Back, WallSide::Left, WallSide::Right];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Back => "back",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Immutable description of the stand floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandArea {
    pub width: f64,
    pub depth: f64,
    pub wall_thickness: f64,
    pub panel_gap: f64,
}

impl StandArea {
    /// Build a stand with the standard wall panels.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either dimension is not finite and positive.
    pub fn new(width: f64, depth: f64) -> Result<Self, StandError> {
        Self::with_walls(width, depth, WALL_THICKNESS, PANEL_GAP)
    }

    /// Build a stand with explicit wall thickness and panel gap.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` for a bad width/depth and `InvalidWall` for a
    /// negative or non-finite wall thickness or panel gap.
    pub fn with_walls(width: f64, depth: f64, wall_thickness: f64, panel_gap: f64) -> Result<Self, StandError> {
        let stand = Self { width, depth, wall_thickness, panel_gap };
        stand.validate()?;
        Ok(stand)
    }

    /// Check the invariants of a stand that may have been deserialized.
    ///
    /// # Errors
    ///
    /// Same conditions as [`StandArea::with_walls`].
    pub fn validate(&self) -> Result<(), StandError> {
        for (axis, value) in [("width", self.width), ("depth", self.depth)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(StandError::InvalidDimension { axis, value });
            }
        }
        for (field, value) in [("wall thickness", self.wall_thickness), ("panel gap", self.panel_gap)] {
            if !value.is_finite() || value < 0.0 {
                return Err(StandError::InvalidWall { field, value });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    #[must_use]
    pub fn half_depth(&self) -> f64 {
        self.depth / 2.0
    }

    /// Distance from the outer stand edge to the usable face of a wall.
    #[must_use]
    pub fn wall_inset(&self) -> f64 {
        self.wall_thickness + self.panel_gap
    }
}
