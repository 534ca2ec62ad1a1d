//! Collision queries against the scene index.
//!
//! All queries are linear scans in index order and report the first hit; no
//! attempt is made to find the nearest or the "best" conflicting box.

#[cfg(test)]
#[path = "collision_test.rs"]
mod collision_test;

use crate::aabb::{Aabb, intersects};
use crate::config::PlacementConfig;
use crate::layout::Configuration;
use crate::scene::build_scene_index;

fn is_ignored(candidate: &Aabb, ignore_ids: &[&str]) -> bool {
    candidate.id.as_deref().is_some_and(|id| ignore_ids.contains(&id))
}

/// First box in `index` that overlaps `candidate`, skipping boxes whose id is
/// in `ignore_ids`.
#[must_use]
pub fn find_first_collision<'a>(candidate: &Aabb, index: &'a [Aabb], ignore_ids: &[&str]) -> Option<&'a Aabb> {
    index
        .iter()
        .filter(|b| !is_ignored(b, ignore_ids))
        .find(|b| intersects(candidate, b))
}

/// Like [`find_first_collision`] for an entity that occupies several boxes.
/// Stops at the first candidate that hits anything.
#[must_use]
pub fn find_collision_for_many<'a>(candidates: &[Aabb], index: &'a [Aabb], ignore_ids: &[&str]) -> Option<&'a Aabb> {
    candidates
        .iter()
        .find_map(|candidate| find_first_collision(candidate, index, ignore_ids))
}

/// Every pair of distinct entities whose committed boxes overlap, in index
/// order. Each pair is reported once.
#[must_use]
pub fn find_overlaps(configuration: &Configuration, config: &PlacementConfig) -> Vec<(String, String)> {
    let index = build_scene_index(configuration, config);
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (i, a) in index.iter().enumerate() {
        for b in &index[i + 1..] {
            let (Some(id_a), Some(id_b)) = (a.id.as_deref(), b.id.as_deref()) else {
                continue;
            };
            if id_a == id_b || !intersects(a, b) {
                continue;
            }
            let seen = pairs
                .iter()
                .any(|(x, y)| (x == id_a && y == id_b) || (x == id_b && y == id_a));
            if !seen {
                pairs.push((id_a.to_string(), id_b.to_string()));
            }
        }
    }
    pairs
}
