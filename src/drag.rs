//! Drag gesture state for the placement session.
//!
//! `Idle --(begin)--> Dragging --(tick)--> Dragging --(end/cancel)--> Idle`.
//! The colliding flag only lives inside `Dragging`; it cannot outlast the
//! gesture.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::geom::Point2;
use crate::layout::EntityRef;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// An entity is following the pointer.
    Dragging {
        /// Entity being moved.
        target: EntityRef,
        /// Entity position minus pointer position at pointer-down, so the
        /// entity does not jump to the pointer.
        grab_offset: Point2,
        /// Whether the latest tick was rejected.
        colliding: bool,
    },
}

impl DragState {
    #[must_use]
    pub fn target(&self) -> Option<&EntityRef> {
        match self {
            Self::Idle => None,
            Self::Dragging { target, .. } => Some(target),
        }
    }

    #[must_use]
    pub fn is_colliding(&self) -> bool {
        matches!(self, Self::Dragging { colliding: true, .. })
    }
}
