#![allow(clippy::float_cmp)]

use std::f64::consts::FRAC_PI_2;

use serde_json::json;

use super::*;

fn configuration() -> Configuration {
    serde_json::from_value(json!({
        "stand": { "width": 6.0, "depth": 4.0, "wallThickness": 0.06, "panelGap": 0.01 },
        "cabin": { "enabled": true, "position": { "x": 2.2, "z": -1.2 }, "width": 1.2, "depth": 1.0 },
        "counters": [
            { "id": "p", "variant": "premium", "position": { "x": 0.0, "z": 0.0 } },
            { "id": "r", "position": { "x": 0.0, "z": 0.0 }, "rotationY": FRAC_PI_2 },
            { "id": "lean", "variant": "premium", "wallSide": "back", "position": { "x": 0.0, "z": -1.6 } }
        ],
        "screens": [
            { "id": "w", "size": "43", "mount": "wall", "position": { "x": 0.0, "z": -1.93 } },
            { "id": "f", "size": "75", "mount": "floor", "position": { "x": 0.0, "z": 0.0 } }
        ],
        "truss": { "enabled": true }
    }))
    .unwrap()
}

#[test]
fn cabin_profile_uses_cabin_dimensions() {
    let p = profile_for(&EntityRef::Cabin, &configuration(), 0.2).unwrap();
    assert_eq!(p.size, Size2::new(1.2, 1.0));
    assert_eq!(p.mount, MountKind::Floor);
    assert_eq!(p.padding, Some(0.2));
}

#[test]
fn counter_profile_uses_variant_footprint() {
    let p = profile_for(&EntityRef::Counter("p".into()), &configuration(), 0.25).unwrap();
    assert_eq!(p.size, Size2::new(1.4, 0.6));
    assert!(!p.is_wall_bound());
    assert_eq!(p.padding, Some(0.25));
}

#[test]
fn rotated_counter_profile_swaps_footprint() {
    let p = profile_for(&EntityRef::Counter("r".into()), &configuration(), 0.2).unwrap();
    assert_eq!(p.size, Size2::new(0.5, 0.9));
}

#[test]
fn leaning_counter_sticks_to_wall_with_half_depth_gap() {
    let p = profile_for(&EntityRef::Counter("lean".into()), &configuration(), 0.2).unwrap();
    assert_eq!(p.mount, MountKind::Floor);
    assert!(p.stick_to_wall);
    assert_eq!(p.wall_side, Some(WallSide::Back));
    assert!((p.snap_gap.unwrap() - (0.3 + COUNTER_WALL_GAP)).abs() < 1e-12);
    assert!(p.is_wall_bound());
}

#[test]
fn wall_screen_defaults_to_back_wall() {
    let p = profile_for(&EntityRef::Screen("w".into()), &configuration(), 0.2).unwrap();
    assert_eq!(p.mount, MountKind::Wall);
    assert_eq!(p.wall_side, Some(WallSide::Back));
    assert_eq!(p.snap_gap, None);
    assert_eq!(p.size.w, 0.97);
}

#[test]
fn floor_screen_is_floor_mounted() {
    let p = profile_for(&EntityRef::Screen("f".into()), &configuration(), 0.2).unwrap();
    assert_eq!(p.mount, MountKind::Floor);
    assert_eq!(p.size.w, 1.68);
}

#[test]
fn truss_profile_spans_columns() {
    let p = profile_for(&EntityRef::Truss, &configuration(), 0.2).unwrap();
    assert!((p.size.w - (6.0 - 2.0 * TRUSS_COLUMN_INSET + TRUSS_COLUMN_SIZE)).abs() < 1e-12);
    assert!((p.size.d - (4.0 - 2.0 * TRUSS_COLUMN_INSET + TRUSS_COLUMN_SIZE)).abs() < 1e-12);
}

#[test]
fn missing_entities_have_no_profile() {
    let mut cfg = configuration();
    assert!(profile_for(&EntityRef::Counter("nope".into()), &cfg, 0.2).is_none());
    cfg.cabin.enabled = false;
    cfg.truss.enabled = false;
    assert!(profile_for(&EntityRef::Cabin, &cfg, 0.2).is_none());
    assert!(profile_for(&EntityRef::Truss, &cfg, 0.2).is_none());
}

#[test]
fn builder_helpers_compose() {
    let p = InteractionProfile::floor(Size2::new(1.0, 1.0)).leaning_on(WallSide::Right).with_snap_gap(0.1);
    assert!(p.stick_to_wall);
    assert_eq!(p.wall_side, Some(WallSide::Right));
    assert_eq!(p.snap_gap, Some(0.1));
    assert_eq!(p.padding, None);
}

#[test]
fn profile_serializes_camel_case() {
    let p = InteractionProfile::wall(Size2::new(1.0, 0.1), WallSide::Left);
    let v = serde_json::to_value(p).unwrap();
    assert_eq!(v["mount"], json!("wall"));
    assert_eq!(v["wallSide"], json!("left"));
    assert_eq!(v["stickToWall"], json!(false));
}
