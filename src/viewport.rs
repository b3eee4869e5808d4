//! Camera window into world space and automatic fitting to content.
//!
//! The viewport is the world rectangle currently visible on the surface.
//! While the user has not touched the camera it tracks the content bounding
//! box exactly. Once the user pans or zooms, refits only refresh the size and
//! keep the user's origin, until [`Viewport::center`] hands control back.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ZOOM_PERCENT, MIN_ZOOM_PERCENT};
use crate::doc::{Device, Room};
use crate::transform::Point;

/// Smallest visible extent on either axis, in world units.
const MIN_VIEW_SIZE: f64 = 1.0;

/// Axis-aligned world-space extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }
}

/// Union of every room rectangle and device point, grown by `margin`.
///
/// Returns `fallback` unchanged when there is no content at all.
#[must_use]
pub fn compute_bounding_box(rooms: &[Room], devices: &[Device], margin: f64, fallback: BoundingBox) -> BoundingBox {
    let mut points = rooms
        .iter()
        .flat_map(|r| [(r.x, r.y), (r.x + r.width, r.y + r.height)])
        .chain(devices.iter().map(|d| (d.x, d.y)));

    let Some((x, y)) = points.next() else {
        return fallback;
    };
    let mut b = BoundingBox { min_x: x, min_y: y, max_x: x, max_y: y };
    for (x, y) in points {
        b.include(x, y);
    }
    BoundingBox {
        min_x: b.min_x - margin,
        min_y: b.min_y - margin,
        max_x: b.max_x + margin,
        max_y: b.max_y + margin,
    }
}

/// The visible world rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
    /// `true` once the user has panned or zoomed; auto-fit then keeps the origin.
    pub user_panned: bool,
    /// Size of the last fitted extent; the 100% reference for zoom levels.
    fit_width: f64,
    fit_height: f64,
}

impl Viewport {
    /// A viewport fitted exactly to `extent`.
    #[must_use]
    pub fn fitted(extent: BoundingBox) -> Self {
        let mut viewport = Self {
            origin_x: 0.0,
            origin_y: 0.0,
            width: MIN_VIEW_SIZE,
            height: MIN_VIEW_SIZE,
            user_panned: false,
            fit_width: MIN_VIEW_SIZE,
            fit_height: MIN_VIEW_SIZE,
        };
        viewport.auto_fit(extent);
        viewport
    }

    /// Refit to `extent`.
    ///
    /// With `user_panned == false` the visible rectangle becomes exactly
    /// `extent`. Otherwise only width and height are refreshed and the origin
    /// the user chose is kept.
    pub fn auto_fit(&mut self, extent: BoundingBox) {
        self.fit_width = extent.width().max(MIN_VIEW_SIZE);
        self.fit_height = extent.height().max(MIN_VIEW_SIZE);
        if !self.user_panned {
            self.origin_x = extent.min_x;
            self.origin_y = extent.min_y;
        }
        self.width = self.fit_width;
        self.height = self.fit_height;
    }

    /// Shift the origin by a screen-pixel delta.
    ///
    /// `pixel_width` / `pixel_height` are the on-screen size of the surface.
    /// Dragging right moves the content right, so the origin moves left.
    pub fn pan(&mut self, dx_screen: f64, dy_screen: f64, pixel_width: f64, pixel_height: f64) {
        if pixel_width <= 0.0 || pixel_height <= 0.0 {
            return;
        }
        self.origin_x -= dx_screen * (self.width / pixel_width);
        self.origin_y -= dy_screen * (self.height / pixel_height);
        self.user_panned = true;
    }

    /// Scale the visible size by `1 / factor` around the current center.
    ///
    /// `factor > 1` zooms in. The result is clamped to the zoom limits.
    pub fn zoom(&mut self, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.zoom_to(self.scale_percent() * factor);
    }

    /// Set the zoom level in percent of the fitted extent (100 = fitted size).
    pub fn zoom_to(&mut self, scale_percent: f64) {
        if !scale_percent.is_finite() {
            return;
        }
        let percent = scale_percent.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT);
        let center = self.center_point();
        self.width = self.fit_width * 100.0 / percent;
        self.height = self.fit_height * 100.0 / percent;
        self.origin_x = center.x - self.width * 0.5;
        self.origin_y = center.y - self.height * 0.5;
        self.user_panned = true;
    }

    /// Give control back to auto-fit and refit to `extent` immediately.
    pub fn center(&mut self, extent: BoundingBox) {
        self.user_panned = false;
        self.auto_fit(extent);
    }

    /// Current zoom level in percent of the fitted extent.
    #[must_use]
    pub fn scale_percent(&self) -> f64 {
        self.fit_width / self.width * 100.0
    }

    /// World point at the middle of the visible rectangle.
    #[must_use]
    pub fn center_point(&self) -> Point {
        Point::new(self.origin_x + self.width * 0.5, self.origin_y + self.height * 0.5)
    }

    /// The visible rectangle as a bounding box.
    #[must_use]
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox {
            min_x: self.origin_x,
            min_y: self.origin_y,
            max_x: self.origin_x + self.width,
            max_y: self.origin_y + self.height,
        }
    }

    /// The visible rectangle formatted as an SVG `viewBox` attribute.
    #[must_use]
    pub fn view_box(&self) -> String {
        format!("{} {} {} {}", self.origin_x, self.origin_y, self.width, self.height)
    }
}
