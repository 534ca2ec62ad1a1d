//! Axis-aligned bounding boxes used as collision proxies.

#[cfg(test)]
#[path = "aabb_test.rs"]
mod aabb_test;

use serde::{Deserialize, Serialize};

use crate::geom::{Point2, Size2};

/// Horizontal bounding box. Always satisfies `min_x <= max_x` and `min_z <= max_z`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aabb {
    /// Id of the entity the box belongs to. Compound entities share one id
    /// across all of their boxes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub min_x: f64,
    pub max_x: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl Aabb {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn depth(&self) -> f64 {
        self.max_z - self.min_z
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new((self.min_x + self.max_x) / 2.0, (self.min_z + self.max_z) / 2.0)
    }

    #[must_use]
    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}

/// Box of `size` centred at `position`, grown by `padding` on every side.
///
/// Negative padding is treated as zero so the box never inverts.
#[must_use]
pub fn build_aabb(position: Point2, size: Size2, padding: f64, id: Option<&str>) -> Aabb {
    let pad = padding.max(0.0);
    let (half_w, half_d) = size.half();
    Aabb {
        id: id.map(str::to_string),
        min_x: position.x - half_w - pad,
        max_x: position.x + half_w + pad,
        min_z: position.z - half_d - pad,
        max_z: position.z + half_d + pad,
    }
}

/// True if the interiors of `a` and `b` overlap.
///
/// Boxes that only share an edge or a corner do not intersect.
#[must_use]
pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
    a.min_x < b.max_x && a.max_x > b.min_x && a.min_z < b.max_z && a.max_z > b.min_z
}
