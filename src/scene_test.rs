#![allow(clippy::float_cmp)]

use std::f64::consts::FRAC_PI_2;

use serde_json::json;

use super::*;
use crate::consts::SCREEN_THICKNESS;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn configuration() -> Configuration {
    serde_json::from_value(json!({
        "stand": { "width": 6.0, "depth": 4.0, "wallThickness": 0.06, "panelGap": 0.01 },
        "cabin": { "enabled": true, "position": { "x": 2.2, "z": -1.2 }, "width": 1.2, "depth": 1.0 },
        "counters": [
            { "id": "c1", "variant": "premium", "position": { "x": -1.4, "z": 1.2 } },
            { "id": "c2", "position": { "x": -0.1, "z": 1.3 } },
            { "id": "c3", "variant": "corner", "size": { "w": 1.0, "d": 0.4 }, "position": { "x": 0.0, "z": 0.0 }, "rotationY": FRAC_PI_2 }
        ],
        "screens": [
            { "id": "floor-tv", "size": "55", "mount": "floor", "position": { "x": 1.0, "z": 0.5 } },
            { "id": "wall-tv", "size": "65", "mount": "wall", "wallSide": "left", "position": { "x": -2.93, "z": 0.0 }, "rotationY": FRAC_PI_2 },
            { "id": "truss-tv", "size": "75", "mount": "truss", "position": { "x": 0.0, "z": 0.0 } }
        ],
        "truss": { "enabled": true, "offset": { "x": 0.0, "z": 0.0 } }
    }))
    .unwrap()
}

fn ids(index: &[Aabb]) -> Vec<&str> {
    index.iter().filter_map(|b| b.id.as_deref()).collect()
}

#[test]
fn default_index_covers_floor_entities_in_order() {
    let index = build_scene_index(&configuration(), &PlacementConfig::default());
    assert_eq!(ids(&index), vec![
            "cabin",
            "counter:c1",
            "counter:c2",
            "counter:c3",
            "screen:floor-tv",
            "truss",
            "truss",
            "truss",
            "truss",
        ]);
}

#[test]
fn cabin_box_is_padded_by_clearance() {
    let index = build_scene_index(&configuration(), &PlacementConfig::default());
    let cabin = &index[0];
    assert!(approx_eq(cabin.width(), 1.2 + 0.4));
    assert!(approx_eq(cabin.depth(), 1.0 + 0.4));
    assert!(approx_eq(cabin.center().x, 2.2));
}

#[test]
fn counter_defaults_follow_variant() {
    let index = build_scene_index(&configuration(), &PlacementConfig::default());
    assert!(approx_eq(index[1].width(), 1.4 + 0.4));
    assert!(approx_eq(index[1].depth(), 0.6 + 0.4));
    assert!(approx_eq(index[2].width(), 0.9 + 0.4));
    assert!(approx_eq(index[2].depth(), 0.5 + 0.4));
}

#[test]
fn rotated_counter_swaps_footprint() {
    let index = build_scene_index(&configuration(), &PlacementConfig::default());
    assert!(approx_eq(index[3].width(), 0.4 + 0.4));
    assert!(approx_eq(index[3].depth(), 1.0 + 0.4));
}

#[test]
fn floor_screen_uses_width_by_thickness() {
    let index = build_scene_index(&configuration(), &PlacementConfig::default());
    assert!(approx_eq(index[4].width(), 1.24 + 0.4));
    assert!(approx_eq(index[4].depth(), SCREEN_THICKNESS + 0.4));
}

#[test]
fn strict_config_boxes_wall_screens_rotated() {
    let config = PlacementConfig { include_wall_screens: true, ..PlacementConfig::default() };
    let index = build_scene_index(&configuration(), &config);
    let wall = index.iter().find(|b| b.has_id("screen:wall-tv")).unwrap();
    assert!(approx_eq(wall.width(), SCREEN_THICKNESS + 0.4));
    assert!(approx_eq(wall.depth(), 1.45 + 0.4));
    assert!(!index.iter().any(|b| b.has_id("screen:truss-tv")));
}

#[test]
fn truss_columns_can_be_excluded() {
    let config = PlacementConfig { include_truss_columns: false, ..PlacementConfig::default() };
    let index = build_scene_index(&configuration(), &config);
    assert!(!index.iter().any(|b| b.has_id("truss")));
}

#[test]
fn truss_columns_follow_offset() {
    let mut cfg = configuration();
    cfg.truss.offset = Point2::new(0.1, 0.05);
    let index = build_scene_index(&cfg, &PlacementConfig::default());
    let first = index.iter().find(|b| b.has_id("truss")).unwrap();
    let center = first.center();
    assert!(approx_eq(center.x, -3.0 + 0.35 + 0.1));
    assert!(approx_eq(center.z, -2.0 + 0.35 + 0.05));
    assert!(approx_eq(first.width(), TRUSS_COLUMN_SIZE + 0.4));
}

#[test]
fn disabled_cabin_and_truss_are_skipped() {
    let mut cfg = configuration();
    cfg.cabin.enabled = false;
    cfg.truss.enabled = false;
    let index = build_scene_index(&cfg, &PlacementConfig::default());
    assert_eq!(ids(&index), vec!["counter:c1", "counter:c2", "counter:c3", "screen:floor-tv"]);
}

#[test]
fn clearance_scales_padding() {
    let dense = PlacementConfig { clearance: 0.25, ..PlacementConfig::default() };
    let index = build_scene_index(&configuration(), &dense);
    assert!(approx_eq(index[2].width(), 0.9 + 0.5));
}

#[test]
fn entity_boxes_for_unknown_entity_is_empty() {
    let cfg = configuration();
    let boxes = entity_boxes(
        &cfg,
        &EntityRef::Counter("ghost".into()),
        Point2::new(0.0, 0.0),
        0.0,
        0.2,
        &PlacementConfig::default(),
    );
    assert!(boxes.is_empty());
}

#[test]
fn entity_boxes_use_candidate_position() {
    let cfg = configuration();
    let boxes =
        entity_boxes(&cfg, &EntityRef::Counter("c2".into()), Point2::new(1.0, -1.0), 0.0, 0.0, &PlacementConfig::default());
    assert_eq!(boxes.len(), 1);
    assert!(approx_eq(boxes[0].center().x, 1.0));
    assert!(approx_eq(boxes[0].center().z, -1.0));
}
