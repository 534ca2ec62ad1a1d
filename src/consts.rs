//! Shared numeric constants for the placement core.
//!
//! All lengths are in metres, all angles in radians.

// ── Stand ───────────────────────────────────────────────────────

/// Thickness of the stand's wall panels.
pub const WALL_THICKNESS: f64 = 0.06;

/// Gap between a wall panel's interior face and anything mounted on it.
pub const PANEL_GAP: f64 = 0.01;

/// Half-extent used on the fixed axis of wall-mounted objects so the
/// clamp never collapses them into the wall plane.
pub const MIN_HALF_EXTENT: f64 = 0.001;

// ── Collision ───────────────────────────────────────────────────

/// Default padding applied around every indexed footprint.
pub const DEFAULT_CLEARANCE: f64 = 0.2;

/// Padding used by the denser "playground" preset.
pub const PLAYGROUND_CLEARANCE: f64 = 0.25;

/// Movement below this is treated as no movement when re-normalizing.
pub const POSITION_EPSILON: f64 = 1e-9;

// ── Counters ────────────────────────────────────────────────────

/// Footprint (width, depth) of a premium counter.
pub const PREMIUM_COUNTER_SIZE: (f64, f64) = (1.4, 0.6);

/// Footprint (width, depth) of basic and corner counters.
pub const BASIC_COUNTER_SIZE: (f64, f64) = (0.9, 0.5);

/// Distance kept between a wall-leaning counter's back and the wall face.
pub const COUNTER_WALL_GAP: f64 = 0.02;

// ── Screens ─────────────────────────────────────────────────────

/// Depth of a screen panel, used as its footprint depth.
pub const SCREEN_THICKNESS: f64 = 0.08;

// ── Truss ───────────────────────────────────────────────────────

/// Side length of a square truss support column.
pub const TRUSS_COLUMN_SIZE: f64 = 0.3;

/// Distance from each stand edge to a truss column's centre at zero offset.
pub const TRUSS_COLUMN_INSET: f64 = 0.35;

// ── Cabin ───────────────────────────────────────────────────────

/// Footprint (width, depth) of a storage cabin when none is configured.
pub const DEFAULT_CABIN_SIZE: (f64, f64) = (1.0, 1.0);
