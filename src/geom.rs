#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point on the stand floor. `x` runs left to right, `z` back to front.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub z: f64,
}

impl Point2 {
    #[must_use]
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Component-wise sum.
    #[must_use]
    pub fn offset_by(self, other: Point2) -> Self {
        Self { x: self.x + other.x, z: self.z + other.z }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point2) -> f64 {
        (self.x - other.x).hypot(self.z - other.z)
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn delta_from(self, other: Point2) -> Self {
        Self { x: self.x - other.x, z: self.z - other.z }
    }
}

/// Horizontal footprint of an object: width along x, depth along z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size2 {
    pub w: f64,
    pub d: f64,
}

impl Size2 {
    #[must_use]
    pub fn new(w: f64, d: f64) -> Self {
        Self { w, d }
    }

    #[must_use]
    pub fn half(self) -> (f64, f64) {
        (self.w / 2.0, self.d / 2.0)
    }

    /// Footprint as occupied on the floor after rotating by `rotation_y`.
    ///
    /// Only quarter turns are honoured: anything closer to ±90° than to 0° or
    /// 180° swaps width and depth.
    #[must_use]
    pub fn rotated(self, rotation_y: f64) -> Self {
        if rotation_y.sin().abs() > std::f64::consts::FRAC_1_SQRT_2 {
            Self { w: self.d, d: self.w }
        } else {
            self
        }
    }
}
