#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::{DeviceKind, MountPosition, RoomId};

fn make_box(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BoundingBox {
    BoundingBox { min_x, min_y, max_x, max_y }
}

fn fallback() -> BoundingBox {
    make_box(0.0, 0.0, 1050.0, 1050.0)
}

fn make_room(x: f64, y: f64, w: f64, h: f64) -> Room {
    Room { id: RoomId::new(), name: "Room".into(), x, y, width: w, height: h, color: None }
}

fn make_device(x: f64, y: f64) -> Device {
    Device::new(DeviceKind::Socket, x, y, MountPosition::WallMedium)
}

// =============================================================
// compute_bounding_box
// =============================================================

#[test]
fn empty_content_uses_fallback() {
    assert_eq!(compute_bounding_box(&[], &[], 50.0, fallback()), fallback());
}

#[test]
fn rooms_and_devices_are_unioned_with_margin() {
    let rooms = [make_room(100.0, 100.0, 200.0, 100.0)];
    let devices = [make_device(400.0, 50.0)];
    let b = compute_bounding_box(&rooms, &devices, 50.0, fallback());
    assert_eq!(b, make_box(50.0, 0.0, 450.0, 250.0));
}

#[test]
fn single_device_box_is_margin_square() {
    let b = compute_bounding_box(&[], &[make_device(200.0, 200.0)], 50.0, fallback());
    assert_eq!(b, make_box(150.0, 150.0, 250.0, 250.0));
    assert_eq!(b.width(), 100.0);
}

#[test]
fn bounding_box_contains_edges() {
    let b = make_box(0.0, 0.0, 10.0, 10.0);
    assert!(b.contains(Point::new(10.0, 0.0)));
    assert!(!b.contains(Point::new(10.1, 0.0)));
}

// =============================================================
// Fitting
// =============================================================

#[test]
fn fitted_matches_extent() {
    let v = Viewport::fitted(make_box(-20.0, 10.0, 180.0, 110.0));
    assert_eq!(v.bounds(), make_box(-20.0, 10.0, 180.0, 110.0));
    assert_eq!(v.scale_percent(), 100.0);
    assert!(!v.user_panned);
}

#[test]
fn auto_fit_follows_content_until_panned() {
    let mut v = Viewport::fitted(fallback());
    v.auto_fit(make_box(100.0, 100.0, 300.0, 300.0));
    assert_eq!((v.origin_x, v.origin_y), (100.0, 100.0));
    assert_eq!((v.width, v.height), (200.0, 200.0));
}

#[test]
fn degenerate_extent_keeps_minimum_size() {
    let v = Viewport::fitted(make_box(5.0, 5.0, 5.0, 5.0));
    assert!(v.width >= 1.0 && v.height >= 1.0);
}

#[test]
fn view_box_string() {
    let v = Viewport::fitted(make_box(0.0, 0.0, 1050.0, 1050.0));
    assert_eq!(v.view_box(), "0 0 1050 1050");
}

// =============================================================
// Pan
// =============================================================

#[test]
fn pan_moves_origin_opposite_to_drag() {
    let mut v = Viewport::fitted(make_box(0.0, 0.0, 1000.0, 1000.0));
    v.pan(100.0, -50.0, 500.0, 500.0);
    assert_eq!((v.origin_x, v.origin_y), (-200.0, 100.0));
    assert!(v.user_panned);
}

#[test]
fn pan_with_unmeasured_surface_is_ignored() {
    let mut v = Viewport::fitted(fallback());
    v.pan(100.0, 100.0, 0.0, 500.0);
    assert_eq!((v.origin_x, v.origin_y), (0.0, 0.0));
    assert!(!v.user_panned);
}

#[test]
fn panned_viewport_keeps_origin_on_refit() {
    let mut v = Viewport::fitted(make_box(0.0, 0.0, 1000.0, 1000.0));
    v.pan(100.0, 0.0, 1000.0, 1000.0);
    v.auto_fit(make_box(0.0, 0.0, 2000.0, 1500.0));
    assert_eq!(v.origin_x, -100.0);
    assert_eq!((v.width, v.height), (2000.0, 1500.0));
}

// =============================================================
// Zoom
// =============================================================

#[test]
fn zoom_in_shrinks_around_center() {
    let mut v = Viewport::fitted(make_box(0.0, 0.0, 1000.0, 1000.0));
    v.zoom(2.0);
    assert_eq!((v.width, v.height), (500.0, 500.0));
    assert_eq!(v.center_point(), Point::new(500.0, 500.0));
    assert_eq!(v.scale_percent(), 200.0);
    assert!(v.user_panned);
}

#[test]
fn zoom_is_clamped() {
    let mut v = Viewport::fitted(make_box(0.0, 0.0, 1000.0, 1000.0));
    v.zoom_to(50_000.0);
    assert_eq!(v.scale_percent(), 1000.0);
    v.zoom_to(1.0);
    assert_eq!(v.scale_percent(), 10.0);
}

#[test]
fn zoom_rejects_nonsense_factor() {
    let mut v = Viewport::fitted(make_box(0.0, 0.0, 1000.0, 1000.0));
    v.zoom(0.0);
    v.zoom(f64::NAN);
    assert_eq!(v.scale_percent(), 100.0);
    assert!(!v.user_panned);
}

// =============================================================
// Pan, add far content, center
// =============================================================

#[test]
fn center_brings_far_content_back_into_view() {
    let mut v = Viewport::fitted(compute_bounding_box(&[], &[make_device(200.0, 200.0)], 50.0, fallback()));
    v.pan(-1000.0, -1000.0, 100.0, 100.0);
    let panned_origin = (v.origin_x, v.origin_y);

    let devices = [make_device(200.0, 200.0), make_device(2000.0, 2000.0)];
    let extent = compute_bounding_box(&[], &devices, 50.0, fallback());
    v.auto_fit(extent);
    assert_eq!((v.origin_x, v.origin_y), panned_origin);
    assert_eq!((v.width, v.height), (extent.width(), extent.height()));

    v.center(extent);
    assert!(!v.user_panned);
    assert!(v.bounds().contains(Point::new(2000.0, 2000.0)));
    assert!(v.bounds().contains(Point::new(200.0, 200.0)));
}
