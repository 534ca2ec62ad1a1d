//! Placement and collision engine for the stand configurator.
//!
//! Given a rectangular stand floor and the entities placed on it (counters,
//! screens, a storage cabin, an overhead truss rig), this crate turns a raw
//! requested position into a legal one and rejects moves whose footprint
//! would overlap another entity, reverting the drag to its last valid
//! position. The host is responsible only for wiring pointer events to the
//! [`session::PlacementSession`] and persisting the resulting
//! [`session::Action`]s to its configuration store.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Per-drag orchestration: commit or revert, rollback, index refresh |
//! | [`layout`] | Configuration snapshot, entity records, entity references, patches |
//! | [`profile`] | Per-entity placement policy and the entity → profile lookup |
//! | [`normalize`] | Raw position → legal position (and facing) |
//! | [`clamp`] | Keeping a footprint on the floor |
//! | [`anchor`] | Flush wall anchors and nearest-wall selection |
//! | [`aabb`] | Bounding boxes and the overlap predicate |
//! | [`scene`] | Scene AABB index derived from a configuration |
//! | [`collision`] | First-hit collision queries and layout audit |
//! | [`rollback`] | Last committed valid position per entity |
//! | [`drag`] | Drag gesture state |
//! | [`stand`] | Stand floor dimensions and walls |
//! | [`geom`] | Points and footprints |
//! | [`config`] | Clearance presets and environment configuration |
//! | [`consts`] | Shared numeric constants (wall panels, default footprints, etc.) |

pub mod aabb;
pub mod anchor;
pub mod clamp;
pub mod collision;
pub mod config;
pub mod consts;
pub mod drag;
pub mod geom;
pub mod layout;
pub mod normalize;
pub mod profile;
pub mod rollback;
pub mod scene;
pub mod session;
pub mod stand;
