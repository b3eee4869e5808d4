//! Wall segments derived from room outlines.
//!
//! Every room contributes its four sides. Adjacent rooms share a side, so a
//! segment whose endpoints match an earlier one within a unit, in either
//! direction, is dropped.

#[cfg(test)]
#[path = "walls_test.rs"]
mod walls_test;

use serde::Serialize;

use crate::doc::{Room, RoomId};
use crate::transform::Point;

/// Endpoints closer than this on both axes are the same corner.
const SAME_POINT_TOLERANCE: f64 = 1.0;

/// Which side of its room a wall came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WallSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl WallSide {
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Wall {
    pub id: String,
    pub room_id: RoomId,
    pub side: WallSide,
    pub start: Point,
    pub end: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Segment length rounded to whole world units.
    pub length: f64,
}

impl Wall {
    fn of(room: &Room, side: WallSide) -> Self {
        let (left, top) = (room.x, room.y);
        let (right, bottom) = (room.x + room.width, room.y + room.height);
        let (start, end) = match side {
            WallSide::Top => (Point::new(left, top), Point::new(right, top)),
            WallSide::Right => (Point::new(right, top), Point::new(right, bottom)),
            WallSide::Bottom => (Point::new(left, bottom), Point::new(right, bottom)),
            WallSide::Left => (Point::new(left, top), Point::new(left, bottom)),
        };
        Self {
            id: format!("{}-{}", room.id, side.as_str()),
            room_id: room.id.clone(),
            side,
            start,
            end,
            color: room.color.clone(),
            length: (end.x - start.x).hypot(end.y - start.y).round(),
        }
    }

    /// Same segment as `other`, ignoring direction.
    #[must_use]
    pub fn coincides_with(&self, other: &Wall) -> bool {
        (near(self.start, other.start) && near(self.end, other.end))
            || (near(self.start, other.end) && near(self.end, other.start))
    }
}

fn near(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < SAME_POINT_TOLERANCE && (a.y - b.y).abs() < SAME_POINT_TOLERANCE
}

/// All distinct walls of `rooms`, in room order then top, right, bottom, left.
#[must_use]
pub fn derive_walls(rooms: &[Room]) -> Vec<Wall> {
    let mut walls: Vec<Wall> = Vec::with_capacity(rooms.len() * WallSide::ALL.len());
    for room in rooms {
        for side in WallSide::ALL {
            let wall = Wall::of(room, side);
            if !walls.iter().any(|w| w.coincides_with(&wall)) {
                walls.push(wall);
            }
        }
    }
    walls
}

/// Sum of all distinct wall lengths.
#[must_use]
pub fn total_length(walls: &[Wall]) -> f64 {
    walls.iter().map(|w| w.length).sum()
}
