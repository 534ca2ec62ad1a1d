//! Scene AABB index: the collision boxes of every placed entity.
//!
//! The index is a pure function of a committed [`Configuration`]. It is only
//! rebuilt when the committed configuration changes, never while a drag is
//! still in flight.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::aabb::{Aabb, build_aabb};
use crate::config::PlacementConfig;
use crate::consts::TRUSS_COLUMN_SIZE;
use crate::geom::{Point2, Size2};
use crate::layout::{Configuration, EntityRef, ScreenMount, TrussRig};

/// Boxes `target` would occupy at `position` facing `rotation_y`.
///
/// Entities outside the floor band (truss screens, and wall screens unless
/// `config.include_wall_screens`) contribute no boxes, and neither do unknown
/// or disabled entities. The truss contributes one box per support column.
#[must_use]
pub fn entity_boxes(
    configuration: &Configuration,
    target: &EntityRef,
    position: Point2,
    rotation_y: f64,
    padding: f64,
    config: &PlacementConfig,
) -> Vec<Aabb> {
    let box_id = target.box_id();
    let id = Some(box_id.as_str());
    let single = |size: Size2| vec![build_aabb(position, size.rotated(rotation_y), padding, id)];
    match target {
        EntityRef::Cabin if configuration.cabin.enabled => single(configuration.cabin.footprint()),
        EntityRef::Counter(counter_id) => match configuration.counter(counter_id) {
            Some(counter) => single(counter.footprint()),
            None => Vec::new(),
        },
        EntityRef::Screen(screen_id) => match configuration.screen(screen_id) {
            Some(screen) => match screen.mount {
                ScreenMount::Floor => single(screen.footprint()),
                ScreenMount::Wall if config.include_wall_screens => single(screen.footprint()),
                ScreenMount::Wall | ScreenMount::Truss => Vec::new(),
            },
            None => Vec::new(),
        },
        EntityRef::Truss if configuration.truss.enabled && config.include_truss_columns => {
            let column = Size2::new(TRUSS_COLUMN_SIZE, TRUSS_COLUMN_SIZE);
            TrussRig::column_centers(&configuration.stand, position)
                .iter()
                .map(|center| build_aabb(*center, column, padding, id))
                .collect()
        }
        EntityRef::Cabin | EntityRef::Truss => Vec::new(),
    }
}

/// Derive the boxes of every placed entity in `configuration`, padded by
/// `config.clearance`, in cabin, counters, screens, truss order.
#[must_use]
pub fn build_scene_index(configuration: &Configuration, config: &PlacementConfig) -> Vec<Aabb> {
    let mut index = Vec::new();
    for target in configuration.entity_refs() {
        let (Some(position), Some(rotation_y)) = (configuration.position_of(&target), configuration.rotation_of(&target))
        else {
            continue;
        };
        index.extend(entity_boxes(configuration, &target, position, rotation_y, config.clearance, config));
    }
    index
}
