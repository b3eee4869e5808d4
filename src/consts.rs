//! Shared numeric constants for the floorplan crate.

// ── Grid ────────────────────────────────────────────────────────

/// Size of one grid cell in world units (1 cell = 10 cm).
pub const GRID_SIZE: f64 = 10.0;

/// Minimum world coordinate for placed content.
pub const CANVAS_MARGIN: f64 = 50.0;

/// Width of the drawable working area, excluding margins.
pub const WORKING_WIDTH: f64 = 950.0;

/// Height of the drawable working area, excluding margins.
pub const WORKING_HEIGHT: f64 = 950.0;

// ── Grouping ────────────────────────────────────────────────────

/// Per-axis proximity threshold for grouping, in grid cells.
pub const PROXIMITY_CELLS: f64 = 2.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Radius of a device or group icon in world units.
pub const DEVICE_ICON_RADIUS: f64 = 16.0;

/// Edge length of a room resize handle in world units.
pub const HANDLE_SIZE: f64 = 10.0;

// ── Viewport ────────────────────────────────────────────────────

/// Multiplicative step applied by zoom-in / zoom-out.
pub const ZOOM_STEP: f64 = 1.2;

/// Lowest accepted zoom level in percent of the fitted extent.
pub const MIN_ZOOM_PERCENT: f64 = 10.0;

/// Highest accepted zoom level in percent of the fitted extent.
pub const MAX_ZOOM_PERCENT: f64 = 1000.0;

// ── Rooms ───────────────────────────────────────────────────────

/// Position of a newly added room.
pub const DEFAULT_ROOM_X: f64 = 50.0;
/// Position of a newly added room.
pub const DEFAULT_ROOM_Y: f64 = 50.0;
/// Width of a newly added room.
pub const DEFAULT_ROOM_WIDTH: f64 = 200.0;
/// Height of a newly added room.
pub const DEFAULT_ROOM_HEIGHT: f64 = 150.0;
/// Fill color used for rooms without an explicit color.
pub const DEFAULT_ROOM_COLOR: &str = "#4B5563";

// ── Documents ───────────────────────────────────────────────────

/// Suggested file name for exported documents.
pub const EXPORT_FILE_NAME: &str = "smart-home-config.json";
