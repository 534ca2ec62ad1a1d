//! Last committed valid position per entity.

#[cfg(test)]
#[path = "rollback_test.rs"]
mod rollback_test;

use std::collections::HashMap;

use crate::geom::Point2;
use crate::layout::{Configuration, EntityRef};

/// Memory of where each entity last stood legally, used to snap a rejected
/// drag back to safety.
#[derive(Debug, Clone, Default)]
pub struct RollbackCache {
    positions: HashMap<EntityRef, Point2>,
}

impl RollbackCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every entry with the positions in `configuration`.
    pub fn seed(&mut self, configuration: &Configuration) {
        self.positions.clear();
        for target in configuration.entity_refs() {
            if let Some(position) = configuration.position_of(&target) {
                self.positions.insert(target, position);
            }
        }
    }

    /// Record a successful commit.
    pub fn record(&mut self, target: &EntityRef, position: Point2) {
        self.positions.insert(target.clone(), position);
    }

    #[must_use]
    pub fn get(&self, target: &EntityRef) -> Option<Point2> {
        self.positions.get(target).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
