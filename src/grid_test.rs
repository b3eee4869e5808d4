#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_grid_is_ten_with_fifty_margin() {
    let grid = Grid::default();
    assert_eq!(grid.size, 10.0);
    assert_eq!(grid.margin, 50.0);
}

// --- snap ---

#[test]
fn snap_rounds_down_below_half() {
    assert_eq!(Grid::default().snap(124.0), 120.0);
}

#[test]
fn snap_rounds_up_above_half() {
    assert_eq!(Grid::default().snap(126.0), 130.0);
}

#[test]
fn snap_exact_multiple_is_unchanged() {
    assert_eq!(Grid::default().snap(120.0), 120.0);
}

#[test]
fn snap_negative_values() {
    assert_eq!(Grid::default().snap(-14.0), -10.0);
    assert_eq!(Grid::default().snap(-16.0), -20.0);
}

#[test]
fn snap_is_idempotent() {
    let grid = Grid::default();
    for v in [-123.4, -5.0, 0.0, 4.99, 5.0, 17.3, 205.0, 999.9, 12345.678] {
        let once = grid.snap(v);
        assert_eq!(grid.snap(once), once, "snap not idempotent for {v}");
    }
}

#[test]
fn snap_uses_custom_cell_size() {
    let grid = Grid::new(25.0, 0.0);
    assert_eq!(grid.snap(60.0), 50.0);
    assert_eq!(grid.snap(63.0), 75.0);
}

// --- clamp_to_positive ---

#[test]
fn clamp_raises_to_margin() {
    assert_eq!(Grid::default().clamp_to_positive(-30.0), 50.0);
    assert_eq!(Grid::default().clamp_to_positive(10.0), 50.0);
}

#[test]
fn clamp_keeps_values_past_margin() {
    assert_eq!(Grid::default().clamp_to_positive(51.0), 51.0);
}

#[test]
fn snap_and_clamp_combines_both() {
    let grid = Grid::default();
    assert_eq!(grid.snap_and_clamp(118.0), 120.0);
    assert_eq!(grid.snap_and_clamp(12.0), 50.0);
}
