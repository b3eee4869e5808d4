//! Grid snapping and canvas-margin clamping.
//!
//! All positions written by gestures pass through [`Grid`] so that content
//! lands on whole grid cells and never drifts above or left of the margin.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::consts::{CANVAS_MARGIN, GRID_SIZE};

/// Grid cell size and canvas margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Edge length of one cell in world units.
    pub size: f64,
    /// Smallest coordinate content may occupy.
    pub margin: f64,
}

impl Default for Grid {
    fn default() -> Self {
        Self { size: GRID_SIZE, margin: CANVAS_MARGIN }
    }
}

impl Grid {
    #[must_use]
    pub fn new(size: f64, margin: f64) -> Self {
        Self { size, margin }
    }

    /// Round `value` to the nearest multiple of the cell size.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        (value / self.size).round() * self.size
    }

    /// Floor `value` at the canvas margin.
    #[must_use]
    pub fn clamp_to_positive(&self, value: f64) -> f64 {
        value.max(self.margin)
    }

    /// Snap, then clamp. The order used for device and group placement.
    #[must_use]
    pub fn snap_and_clamp(&self, value: f64) -> f64 {
        self.clamp_to_positive(self.snap(value))
    }
}
