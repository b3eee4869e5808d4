#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_match_constants() {
    let cfg = EditorConfig::default();
    assert_eq!(cfg.grid_size, 10.0);
    assert_eq!(cfg.margin, 50.0);
    assert_eq!(cfg.proximity_cells, 2.0);
    assert_eq!(cfg.zoom_step, 1.2);
}

#[test]
fn from_lookup_empty_uses_defaults() {
    let cfg = EditorConfig::from_lookup(lookup_from(&[]));
    assert_eq!(cfg, EditorConfig::default());
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = EditorConfig::from_lookup(lookup_from(&[
        (ENV_GRID_SIZE, "20"),
        (ENV_MARGIN, " 0 "),
        (ENV_PROXIMITY_CELLS, "3"),
        (ENV_ZOOM_STEP, "1.5"),
        (ENV_WORKING_WIDTH, "500"),
        (ENV_WORKING_HEIGHT, "400"),
    ]));
    assert_eq!(cfg.grid_size, 20.0);
    assert_eq!(cfg.margin, 0.0);
    assert_eq!(cfg.proximity_cells, 3.0);
    assert_eq!(cfg.zoom_step, 1.5);
    assert_eq!(cfg.working_width, 500.0);
    assert_eq!(cfg.working_height, 400.0);
}

#[test]
fn from_lookup_rejects_garbage() {
    let cfg = EditorConfig::from_lookup(lookup_from(&[(ENV_GRID_SIZE, "ten"), (ENV_MARGIN, "NaN")]));
    assert_eq!(cfg.grid_size, 10.0);
    assert_eq!(cfg.margin, 50.0);
}

#[test]
fn from_lookup_rejects_non_positive_grid() {
    let cfg = EditorConfig::from_lookup(lookup_from(&[(ENV_GRID_SIZE, "0"), (ENV_WORKING_WIDTH, "-5")]));
    assert_eq!(cfg.grid_size, 10.0);
    assert_eq!(cfg.working_width, 950.0);
}

#[test]
fn from_lookup_rejects_zoom_step_at_or_below_one() {
    let cfg = EditorConfig::from_lookup(lookup_from(&[(ENV_ZOOM_STEP, "1.0")]));
    assert_eq!(cfg.zoom_step, 1.2);
}

#[test]
fn proximity_threshold_is_cells_times_grid() {
    let cfg = EditorConfig::default();
    assert_eq!(cfg.proximity_threshold(), 20.0);
}

#[test]
fn default_extent_includes_margins() {
    let extent = EditorConfig::default().default_extent();
    assert_eq!(extent.min_x, 0.0);
    assert_eq!(extent.min_y, 0.0);
    assert_eq!(extent.max_x, 1050.0);
    assert_eq!(extent.max_y, 1050.0);
}

#[test]
fn grid_uses_configured_cell_and_margin() {
    let config = EditorConfig::from_lookup(lookup_from(&[(ENV_GRID_SIZE, "25"), (ENV_MARGIN, "0")]));
    let grid = config.grid();
    assert_eq!(grid.snap(60.0), 50.0);
    assert_eq!(grid.clamp_to_positive(-5.0), 0.0);
}
