//! Screen-to-world coordinate mapping.
//!
//! The rendering surface shows the viewport's world rectangle scaled
//! uniformly to fit and centered along the slack axis (the SVG
//! `xMidYMid meet` rule). A [`Transform`] freezes that mapping for one
//! gesture: it is captured at pointer-down and reused for every move until
//! release, so the surface shifting mid-gesture cannot make content drift.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use serde::{Deserialize, Serialize};

use crate::viewport::Viewport;

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// On-screen placement of the rendering surface, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// A surface with zero or non-finite size has not been laid out yet.
    #[must_use]
    pub fn is_measurable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// A captured screen-to-world mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Screen pixels per world unit.
    scale: f64,
    /// Screen position of the viewport origin.
    offset_x: f64,
    offset_y: f64,
    /// World position shown at the offset.
    origin_x: f64,
    origin_y: f64,
}

impl Transform {
    /// Capture the mapping for `surface` showing `viewport`.
    ///
    /// Returns `None` when the surface is unmeasurable or the viewport is
    /// degenerate; callers must not start a gesture in that case.
    #[must_use]
    pub fn capture(surface: SurfaceRect, viewport: &Viewport) -> Option<Self> {
        if !surface.is_measurable() || viewport.width <= 0.0 || viewport.height <= 0.0 {
            return None;
        }
        let scale = (surface.width / viewport.width).min(surface.height / viewport.height);
        let pad_x = (surface.width - viewport.width * scale) * 0.5;
        let pad_y = (surface.height - viewport.height * scale) * 0.5;
        Some(Self {
            scale,
            offset_x: surface.left + pad_x,
            offset_y: surface.top + pad_y,
            origin_x: viewport.origin_x,
            origin_y: viewport.origin_y,
        })
    }

    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.offset_x) / self.scale + self.origin_x,
            y: (screen.y - self.offset_y) / self.scale + self.origin_y,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn to_screen(&self, world: Point) -> Point {
        Point {
            x: (world.x - self.origin_x) * self.scale + self.offset_x,
            y: (world.y - self.origin_y) * self.scale + self.offset_y,
        }
    }
}
