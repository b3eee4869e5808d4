//! Editor configuration parsed from environment variables.
//!
//! Every knob has a default from [`crate::consts`]; the environment only
//! overrides. Invalid values are logged and ignored rather than rejected so a
//! typo in a variable never prevents the editor from starting.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use tracing::warn;

use crate::consts::{CANVAS_MARGIN, GRID_SIZE, PROXIMITY_CELLS, WORKING_HEIGHT, WORKING_WIDTH, ZOOM_STEP};
use crate::grid::Grid;
use crate::viewport::BoundingBox;

pub const ENV_GRID_SIZE: &str = "FLOORPLAN_GRID_SIZE";
pub const ENV_MARGIN: &str = "FLOORPLAN_MARGIN";
pub const ENV_PROXIMITY_CELLS: &str = "FLOORPLAN_PROXIMITY_CELLS";
pub const ENV_ZOOM_STEP: &str = "FLOORPLAN_ZOOM_STEP";
pub const ENV_WORKING_WIDTH: &str = "FLOORPLAN_WORKING_WIDTH";
pub const ENV_WORKING_HEIGHT: &str = "FLOORPLAN_WORKING_HEIGHT";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// Grid cell size in world units.
    pub grid_size: f64,
    /// Minimum coordinate for dragged or placed content.
    pub margin: f64,
    /// Grouping proximity threshold, in grid cells.
    pub proximity_cells: f64,
    /// Zoom factor applied per zoom-in / zoom-out step.
    pub zoom_step: f64,
    /// Working area width, excluding margins.
    pub working_width: f64,
    /// Working area height, excluding margins.
    pub working_height: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            margin: CANVAS_MARGIN,
            proximity_cells: PROXIMITY_CELLS,
            zoom_step: ZOOM_STEP,
            working_width: WORKING_WIDTH,
            working_height: WORKING_HEIGHT,
        }
    }
}

impl EditorConfig {
    /// Build config from process environment variables.
    ///
    /// Optional:
    /// - `FLOORPLAN_GRID_SIZE`: default 10
    /// - `FLOORPLAN_MARGIN`: default 50
    /// - `FLOORPLAN_PROXIMITY_CELLS`: default 2
    /// - `FLOORPLAN_ZOOM_STEP`: default 1.2 (must be greater than 1)
    /// - `FLOORPLAN_WORKING_WIDTH` / `FLOORPLAN_WORKING_HEIGHT`: default 950
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Build config from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            grid_size: positive(&lookup, ENV_GRID_SIZE, defaults.grid_size),
            margin: non_negative(&lookup, ENV_MARGIN, defaults.margin),
            proximity_cells: non_negative(&lookup, ENV_PROXIMITY_CELLS, defaults.proximity_cells),
            zoom_step: parse_f64(&lookup, ENV_ZOOM_STEP, defaults.zoom_step, |v| v > 1.0),
            working_width: positive(&lookup, ENV_WORKING_WIDTH, defaults.working_width),
            working_height: positive(&lookup, ENV_WORKING_HEIGHT, defaults.working_height),
        }
    }

    /// Snapping grid with this config's cell size and margin.
    #[must_use]
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_size, self.margin)
    }

    /// Per-axis grouping threshold in world units.
    #[must_use]
    pub fn proximity_threshold(&self) -> f64 {
        self.proximity_cells * self.grid_size
    }

    /// Extent shown when the document is empty: the working area plus a margin on every side.
    #[must_use]
    pub fn default_extent(&self) -> BoundingBox {
        BoundingBox {
            min_x: 0.0,
            min_y: 0.0,
            max_x: self.working_width + self.margin * 2.0,
            max_y: self.working_height + self.margin * 2.0,
        }
    }
}

fn positive<F>(lookup: &F, key: &str, default: f64) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    parse_f64(lookup, key, default, |v| v > 0.0)
}

fn non_negative<F>(lookup: &F, key: &str, default: f64) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    parse_f64(lookup, key, default, |v| v >= 0.0)
}

fn parse_f64<F>(lookup: &F, key: &str, default: f64, valid: impl Fn(f64) -> bool) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && valid(value) => value,
        _ => {
            warn!(key, value = %raw, default, "ignoring invalid config value");
            default
        }
    }
}
