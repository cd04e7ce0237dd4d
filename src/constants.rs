//! Shared application-wide constants.
//! Centralizes tweakable values used across board layout, interaction
//! handling, and canvas rendering.

// Logical canvas
/// Width of the logical drawing space in board units.
pub const CANVAS_WIDTH: f32 = 600.0;
/// Height of the logical drawing space in board units.
pub const CANVAS_HEIGHT: f32 = 450.0;

// Work zone (the splice box that joints must be placed in)
/// Left edge of the work zone in board units.
pub const WORK_ZONE_X: f32 = 175.0;
/// Top edge of the work zone in board units.
pub const WORK_ZONE_Y: f32 = 100.0;
/// Work zone width in board units.
pub const WORK_ZONE_W: f32 = 250.0;
/// Work zone height in board units.
pub const WORK_ZONE_H: f32 = 220.0;
/// Tolerance band around the work zone within which taps still count.
pub const WORK_ZONE_MARGIN: f32 = 20.0;

// Interactions
/// Taps closer than this to an existing joint connect to it instead of
/// creating a new one (board units).
pub const SNAP_RADIUS: f32 = 25.0;
/// Hit radius for terminal taps (board units).
pub const TERMINAL_HIT_RADIUS: f32 = 15.0;
/// Maximum distance from a wire run at which a press grabs it (board units).
pub const SEGMENT_HIT_DISTANCE: f32 = 12.0;
/// How long a segment must be held down before it is deleted, in seconds.
pub const LONG_PRESS_SECS: f64 = 1.0;

// Rendering
/// Radius of a joint dot (board units).
pub const JOINT_RADIUS: f32 = 8.0;
/// Radius of a terminal circle (board units).
pub const TERMINAL_RADIUS: f32 = 12.0;
/// Spacing of the background dot grid (board units).
pub const DOT_GRID_SPACING: f32 = 20.0;
/// Corner radius of the work-zone rectangle (board units).
pub const WORK_ZONE_CORNER_RADIUS: f32 = 20.0;
