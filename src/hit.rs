//! Pointer-down classification: what is under a world-space point.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{DEVICE_ICON_RADIUS, HANDLE_SIZE};
use crate::doc::{DeviceId, Document, GroupId, Room, RoomId};
use crate::transform::Point;
use crate::viewport::BoundingBox;

/// Which of a room's eight resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDirection {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeDirection {
    pub const ALL: [Self; 8] = [Self::Nw, Self::N, Self::Ne, Self::E, Self::Se, Self::S, Self::Sw, Self::W];

    /// Moves the top edge.
    #[must_use]
    pub fn north(self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    /// Moves the bottom edge.
    #[must_use]
    pub fn south(self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }

    /// Moves the right edge.
    #[must_use]
    pub fn east(self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }

    /// Moves the left edge.
    #[must_use]
    pub fn west(self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::Ne => "ne",
            Self::E => "e",
            Self::Se => "se",
            Self::S => "s",
            Self::Sw => "sw",
            Self::W => "w",
            Self::Nw => "nw",
        }
    }

    /// Center of this handle on `room`'s outline.
    #[must_use]
    pub fn anchor(self, room: &Room) -> Point {
        let x = if self.west() {
            room.x
        } else if self.east() {
            room.x + room.width
        } else {
            room.x + room.width * 0.5
        };
        let y = if self.north() {
            room.y
        } else if self.south() {
            room.y + room.height
        } else {
            room.y + room.height * 0.5
        };
        Point::new(x, y)
    }
}

/// The square a handle occupies, centered on its anchor.
#[must_use]
pub fn handle_rect(room: &Room, direction: ResizeDirection) -> BoundingBox {
    let c = direction.anchor(room);
    let half = HANDLE_SIZE * 0.5;
    BoundingBox { min_x: c.x - half, min_y: c.y - half, max_x: c.x + half, max_y: c.y + half }
}

/// Result of a hit test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// A resize handle of the selected room.
    Handle { room: RoomId, direction: ResizeDirection },
    /// A group's stacked icon.
    Group(GroupId),
    /// An ungrouped device icon.
    Device(DeviceId),
    /// The body of the selected room.
    Room(RoomId),
    /// Nothing draggable.
    Background,
}

/// Classify `world` against the document.
///
/// Checked top-down in render order: the selected room's handles, group
/// icons, ungrouped device icons (last drawn first), then the selected room's
/// body. Unselected rooms carry no drag affordance and count as background.
/// Grouped devices are only reachable through their group's icon.
#[must_use]
pub fn hit_test(world: Point, doc: &Document, selected_room: Option<&RoomId>) -> Hit {
    let room = selected_room.and_then(|id| doc.room(id));

    if let Some(room) = room {
        let handle = ResizeDirection::ALL
            .into_iter()
            .find(|&d| handle_rect(room, d).contains(world));
        if let Some(direction) = handle {
            return Hit::Handle { room: room.id.clone(), direction };
        }
    }

    if let Some(group) = doc.groups().iter().rev().find(|g| within_icon(world, g.x, g.y)) {
        return Hit::Group(group.id.clone());
    }

    if let Some(device) = doc
        .devices()
        .iter()
        .rev()
        .filter(|d| d.group_id.is_none())
        .find(|d| within_icon(world, d.x, d.y))
    {
        return Hit::Device(device.id.clone());
    }

    match room {
        Some(room) if room_contains(room, world) => Hit::Room(room.id.clone()),
        _ => Hit::Background,
    }
}

fn within_icon(p: Point, x: f64, y: f64) -> bool {
    let dx = p.x - x;
    let dy = p.y - y;
    dx * dx + dy * dy <= DEVICE_ICON_RADIUS * DEVICE_ICON_RADIUS
}

fn room_contains(room: &Room, p: Point) -> bool {
    p.x >= room.x && p.x <= room.x + room.width && p.y >= room.y && p.y <= room.y + room.height
}
