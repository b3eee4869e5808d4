//! Gesture model: the placement tool and the drag state machine.
//!
//! `Tool` is what the user has armed for the next background click.
//! `DragState` is the active gesture between pointer-down and pointer-up,
//! carrying the transform captured at pointer-down and the dragged entity's
//! starting geometry so every pointer-move can be computed from the start
//! rather than accumulated. The free functions at the bottom are the
//! per-mode update rules; they are pure and never touch the document.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::doc::{DeviceId, DeviceKind, GroupId, MountPosition, Room, RoomId, RoomPatch};
use crate::grid::Grid;
use crate::hit::ResizeDirection;
use crate::transform::{Point, Transform};

/// The placement tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Background clicks pan or deselect.
    #[default]
    Unarmed,
    /// The next background click places a device of this kind.
    Armed { kind: DeviceKind, mount: MountPosition },
}

impl Tool {
    /// Arm with `kind`, pre-selecting its usual mount position.
    #[must_use]
    pub fn arm(kind: DeviceKind) -> Self {
        Self::Armed { kind, mount: kind.default_mount() }
    }

    /// Override the mount position of an armed tool. No-op when unarmed.
    #[must_use]
    pub fn with_mount(self, mount: MountPosition) -> Self {
        match self {
            Self::Armed { kind, .. } => Self::Armed { kind, mount },
            Self::Unarmed => Self::Unarmed,
        }
    }

    #[must_use]
    pub fn is_armed(self) -> bool {
        matches!(self, Self::Armed { .. })
    }
}

/// Screen-to-world mapping and pointer position captured at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grip {
    pub transform: Transform,
    pub start_world: Point,
}

impl Grip {
    #[must_use]
    pub fn new(transform: Transform, start_screen: Point) -> Self {
        Self { transform, start_world: transform.to_world(start_screen) }
    }

    /// World-space displacement of `screen` from the gesture start.
    #[must_use]
    pub fn delta(&self, screen: Point) -> Point {
        let world = self.transform.to_world(screen);
        Point::new(world.x - self.start_world.x, world.y - self.start_world.y)
    }
}

/// A room's rectangle, detached from the room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RoomRect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn of(room: &Room) -> Self {
        Self::new(room.x, room.y, room.width, room.height)
    }

    #[must_use]
    pub fn to_patch(self) -> RoomPatch {
        RoomPatch::rect(self.x, self.y, self.width, self.height)
    }
}

/// The active gesture. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Tool armed and the background pressed; the device lands on release.
    PlacingDevice {
        /// World position of the press.
        at: Point,
    },
    DraggingDevice {
        id: DeviceId,
        grip: Grip,
        orig: Point,
    },
    DraggingGroup {
        id: GroupId,
        grip: Grip,
        orig: Point,
        /// How far the left-most and top-most members sit before `orig`.
        lead: Point,
    },
    DraggingRoom {
        id: RoomId,
        grip: Grip,
        orig: Point,
    },
    ResizingRoom {
        id: RoomId,
        direction: ResizeDirection,
        grip: Grip,
        orig: RoomRect,
    },
    /// Continuous, unsnapped camera drag.
    Panning {
        /// Screen position of the previous pointer event.
        last_screen: Point,
        /// On-screen size of the surface, for the pixel-to-world ratio.
        pixel_width: f64,
        pixel_height: f64,
        /// Whether the pointer moved since the press; a still press is a click.
        moved: bool,
    },
}

impl DragState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::PlacingDevice { .. } => "placing-device",
            Self::DraggingDevice { .. } => "dragging-device",
            Self::DraggingGroup { .. } => "dragging-group",
            Self::DraggingRoom { .. } => "dragging-room",
            Self::ResizingRoom { .. } => "resizing-room",
            Self::Panning { .. } => "panning",
        }
    }
}

// =============================================================================
// UPDATE RULES
// =============================================================================

/// Position of a dragged point entity: start plus delta, snapped, then held
/// inside the margin.
#[must_use]
pub fn drag_point(grid: &Grid, orig: Point, delta: Point) -> Point {
    Point::new(grid.snap_and_clamp(orig.x + delta.x), grid.snap_and_clamp(orig.y + delta.y))
}

/// Position of a dragged group.
///
/// Like [`drag_point`], but the group also stops where its left-most or
/// top-most member, `lead` before the group position, would reach the margin.
#[must_use]
pub fn drag_group(grid: &Grid, orig: Point, delta: Point, lead: Point) -> Point {
    let p = drag_point(grid, orig, delta);
    Point::new(p.x.max(grid.margin + lead.x), p.y.max(grid.margin + lead.y))
}

/// Rectangle of a room whose `direction` handle was dragged by `delta`.
///
/// Dragged edges snap to the grid and no edge may sit before the margin.
/// Each dimension keeps at least one grid cell; when a north or west edge
/// would cross that limit it stops one cell short of the fixed opposite edge.
#[must_use]
pub fn resize_room(grid: &Grid, orig: RoomRect, direction: ResizeDirection, delta: Point) -> RoomRect {
    let min = grid.size;
    let mut left = orig.x;
    let mut top = orig.y;
    let mut right = orig.x + orig.width;
    let mut bottom = orig.y + orig.height;

    if direction.west() {
        left = grid.snap(orig.x + delta.x);
    }
    if direction.east() {
        right = orig.x + grid.snap(orig.width + delta.x);
    }
    if direction.north() {
        top = grid.snap(orig.y + delta.y);
    }
    if direction.south() {
        bottom = orig.y + grid.snap(orig.height + delta.y);
    }

    left = grid.clamp_to_positive(left);
    top = grid.clamp_to_positive(top);

    if direction.west() {
        left = left.min(right - min);
    } else {
        right = right.max(left + min);
    }
    if direction.north() {
        top = top.min(bottom - min);
    } else {
        bottom = bottom.max(top + min);
    }

    RoomRect::new(left, top, right - left, bottom - top)
}
