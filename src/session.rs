//! Placement session: the thin mutable shell around the pure placement core.
//!
//! DESIGN
//! ======
//! The session owns the committed configuration snapshot, the scene index
//! derived from it, the rollback cache and the drag gesture. Every pointer
//! tick runs normalize → box → collide and either commits the new placement
//! or reverts to the last valid one. The host persists `Action::Commit`
//! patches to its store; nothing rejected is ever emitted as a commit.
//!
//! The index is rebuilt when the committed configuration changes outside a
//! drag (load, store patch, stand resize) and once when a drag ends. While a
//! drag is in flight the dragged entity's own boxes are ignored, so its stale
//! entry in the index never matters.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::aabb::Aabb;
use crate::anchor::nearest_wall;
use crate::collision::find_collision_for_many;
use crate::config::PlacementConfig;
use crate::consts::POSITION_EPSILON;
use crate::drag::DragState;
use crate::geom::Point2;
use crate::layout::{Configuration, EntityRef, PlacementPatch};
use crate::normalize::normalize;
use crate::profile::{MountKind, profile_for};
use crate::rollback::RollbackCache;
use crate::scene::{build_scene_index, entity_boxes};
use crate::stand::{StandArea, StandError};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SessionError {
    #[error("unknown entity: {0}")]
    UnknownEntity(EntityRef),
    #[error("drag already in progress for {0}")]
    DragInProgress(EntityRef),
    #[error("invalid stand: {0}")]
    Stand(#[from] StandError),
}

/// Actions returned from drag handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Persist this placement to the store.
    Commit(PlacementPatch),
    /// Show the entity at `position` again; nothing was committed.
    #[serde(rename_all = "camelCase")]
    Revert { target: EntityRef, position: Point2 },
    /// The collision feedback flag for `target` flipped.
    #[serde(rename_all = "camelCase")]
    CollisionChanged { target: EntityRef, colliding: bool },
}

pub struct PlacementSession {
    configuration: Configuration,
    config: PlacementConfig,
    index: Vec<Aabb>,
    rollback: RollbackCache,
    drag: DragState,
}

impl PlacementSession {
    #[must_use]
    pub fn new(configuration: Configuration, config: PlacementConfig) -> Self {
        let mut session = Self {
            configuration,
            config,
            index: Vec::new(),
            rollback: RollbackCache::new(),
            drag: DragState::Idle,
        };
        session.rebuild();
        session
    }

    // --- Data inputs ---

    /// Replace the committed snapshot, e.g. after entities were added or removed.
    ///
    /// A drag in progress survives only if its entity still exists.
    pub fn load_configuration(&mut self, configuration: Configuration) {
        self.configuration = configuration;
        if let Some(target) = self.drag.target() {
            if self.configuration.position_of(target).is_none() {
                warn!(entity = %target, "placement: dragged entity removed; drag dropped");
                self.drag = DragState::Idle;
            }
        }
        self.rebuild();
    }

    /// Apply a store-originated patch. Returns false if the entity doesn't exist.
    pub fn apply_patch(&mut self, patch: &PlacementPatch) -> bool {
        if !self.configuration.apply_patch(patch) {
            warn!(entity = %patch.target, "placement: patch for unknown entity ignored");
            return false;
        }
        self.rollback.record(&patch.target, patch.position);
        self.rebuild_index();
        true
    }

    /// Switch to new stand dimensions and re-normalize every entity against it.
    ///
    /// Previously legal positions may now be outside the floor, so every
    /// changed placement is committed as-is, without collision rejection.
    ///
    /// # Errors
    ///
    /// Returns `Stand` for invalid dimensions and `DragInProgress` while dragging.
    pub fn set_stand(&mut self, stand: StandArea) -> Result<Vec<PlacementPatch>, SessionError> {
        stand.validate()?;
        if let Some(target) = self.drag.target() {
            return Err(SessionError::DragInProgress(target.clone()));
        }
        self.configuration.stand = stand;

        let mut patches = Vec::new();
        for target in self.configuration.entity_refs() {
            let (Some(current), Some(rotation_y)) =
                (self.configuration.position_of(&target), self.configuration.rotation_of(&target))
            else {
                continue;
            };
            let Some(profile) = profile_for(&target, &self.configuration, self.config.clearance) else {
                continue;
            };
            let placement = normalize(current, &profile, &stand);
            let rotated = placement.rotation_y.is_some_and(|r| (r - rotation_y).abs() > POSITION_EPSILON);
            if placement.position.distance_to(current) <= POSITION_EPSILON && !rotated {
                continue;
            }
            let patch = PlacementPatch {
                target,
                position: placement.position,
                rotation_y: placement.rotation_y,
                wall_side: None,
            };
            self.configuration.apply_patch(&patch);
            patches.push(patch);
        }

        info!(width = stand.width, depth = stand.depth, moved = patches.len(), "placement: stand resized");
        self.rebuild();
        Ok(patches)
    }

    // --- Drag gesture ---

    /// Pointer-down on `target` with the pointer at `pointer`.
    ///
    /// # Errors
    ///
    /// Returns `DragInProgress` if another drag is active and `UnknownEntity`
    /// if `target` is not placed.
    pub fn begin_drag(&mut self, target: EntityRef, pointer: Point2) -> Result<(), SessionError> {
        if let Some(active) = self.drag.target() {
            return Err(SessionError::DragInProgress(active.clone()));
        }
        let position = self
            .configuration
            .position_of(&target)
            .ok_or_else(|| SessionError::UnknownEntity(target.clone()))?;
        debug!(entity = %target, x = position.x, z = position.z, "placement: drag started");
        self.drag = DragState::Dragging { target, grab_offset: position.delta_from(pointer), colliding: false };
        Ok(())
    }

    /// Pointer-move tick. Commits the normalized placement, or reverts to the
    /// last valid position when it would collide. Idle sessions do nothing.
    pub fn drag_to(&mut self, pointer: Point2) -> Vec<Action> {
        let DragState::Dragging { target, grab_offset, colliding: was_colliding } = &self.drag else {
            return Vec::new();
        };
        let (target, raw, was_colliding) = (target.clone(), pointer.offset_by(*grab_offset), *was_colliding);

        let Some(mut profile) = profile_for(&target, &self.configuration, self.config.clearance) else {
            warn!(entity = %target, "placement: dragged entity vanished; drag dropped");
            self.drag = DragState::Idle;
            return Vec::new();
        };
        let stand = self.configuration.stand;
        if profile.mount == MountKind::Wall && profile.wall_side.is_some() {
            profile.wall_side = Some(nearest_wall(raw, &stand));
        }

        let placement = normalize(raw, &profile, &stand);
        let rotation_y = placement
            .rotation_y
            .or_else(|| self.configuration.rotation_of(&target))
            .unwrap_or(0.0);
        let padding = profile.padding.unwrap_or(self.config.clearance);
        let candidates = entity_boxes(&self.configuration, &target, placement.position, rotation_y, padding, &self.config);
        let own_id = target.box_id();
        let hit = find_collision_for_many(&candidates, &self.index, &[own_id.as_str()])
            .map(|b| b.id.clone().unwrap_or_default());

        let mut actions = Vec::new();
        let colliding = hit.is_some();
        if colliding != was_colliding {
            actions.push(Action::CollisionChanged { target: target.clone(), colliding });
        }

        if let Some(hit_id) = hit {
            let position = self
                .rollback
                .get(&target)
                .or_else(|| self.configuration.position_of(&target))
                .unwrap_or(placement.position);
            debug!(
                entity = %target,
                x = placement.position.x,
                z = placement.position.z,
                hit = %hit_id,
                "placement: move rejected"
            );
            actions.push(Action::Revert { target: target.clone(), position });
        } else {
            let patch = PlacementPatch {
                target: target.clone(),
                position: placement.position,
                rotation_y: placement.rotation_y,
                wall_side: if profile.is_wall_bound() { profile.wall_side } else { None },
            };
            self.configuration.apply_patch(&patch);
            self.rollback.record(&target, placement.position);
            debug!(entity = %target, x = placement.position.x, z = placement.position.z, "placement: move committed");
            actions.push(Action::Commit(patch));
        }

        if let DragState::Dragging { colliding: flag, .. } = &mut self.drag {
            *flag = colliding;
        }
        actions
    }

    /// Pointer-up. The entity stays at its last committed position.
    pub fn end_drag(&mut self) -> Vec<Action> {
        self.finish_drag("released")
    }

    /// Escape / deselect. Behaves like a release; every commit already happened per tick.
    pub fn cancel_drag(&mut self) -> Vec<Action> {
        self.finish_drag("cancelled")
    }

    fn finish_drag(&mut self, reason: &'static str) -> Vec<Action> {
        let DragState::Dragging { target, colliding, .. } = std::mem::take(&mut self.drag) else {
            return Vec::new();
        };
        debug!(entity = %target, reason, "placement: drag finished");
        self.rebuild_index();
        if colliding {
            vec![Action::CollisionChanged { target, colliding: false }]
        } else {
            Vec::new()
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    #[must_use]
    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    #[must_use]
    pub fn scene_index(&self) -> &[Aabb] {
        &self.index
    }

    /// Entity currently being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<&EntityRef> {
        self.drag.target()
    }

    /// Whether the latest tick of the active drag was rejected.
    #[must_use]
    pub fn is_colliding(&self) -> bool {
        self.drag.is_colliding()
    }

    #[must_use]
    pub fn rollback_position(&self, target: &EntityRef) -> Option<Point2> {
        self.rollback.get(target)
    }

    // --- Derived state ---

    fn rebuild(&mut self) {
        self.rollback.seed(&self.configuration);
        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        self.index = build_scene_index(&self.configuration, &self.config);
        info!(boxes = self.index.len(), "placement: scene index rebuilt");
    }
}
