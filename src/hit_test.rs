use super::*;
use crate::doc::{Device, DeviceKind, MountPosition, RoomPatch};

fn make_room(doc: &mut Document, x: f64, y: f64, w: f64, h: f64) -> RoomId {
    let id = doc.add_room("Hall", None);
    doc.update_room(&id, RoomPatch::rect(x, y, w, h)).unwrap();
    id
}

fn make_device(doc: &mut Document, x: f64, y: f64) -> DeviceId {
    doc.insert_device(Device::new(DeviceKind::Light, x, y, MountPosition::Ceiling))
        .unwrap()
}

// =============================================================
// ResizeDirection
// =============================================================

#[test]
fn direction_edges() {
    assert!(ResizeDirection::Nw.north() && ResizeDirection::Nw.west());
    assert!(!ResizeDirection::N.east() && !ResizeDirection::N.west());
    assert!(ResizeDirection::Se.south() && ResizeDirection::Se.east());
    assert_eq!(ResizeDirection::Sw.as_str(), "sw");
}

#[test]
fn anchors_sit_on_outline() {
    let mut doc = Document::new();
    let id = make_room(&mut doc, 100.0, 100.0, 200.0, 100.0);
    let room = doc.room(&id).unwrap();
    assert_eq!(ResizeDirection::Nw.anchor(room), Point::new(100.0, 100.0));
    assert_eq!(ResizeDirection::E.anchor(room), Point::new(300.0, 150.0));
    assert_eq!(ResizeDirection::S.anchor(room), Point::new(200.0, 200.0));
}

// =============================================================
// hit_test
// =============================================================

#[test]
fn empty_document_is_background() {
    let doc = Document::new();
    assert_eq!(hit_test(Point::new(10.0, 10.0), &doc, None), Hit::Background);
}

#[test]
fn device_within_icon_radius() {
    let mut doc = Document::new();
    let id = make_device(&mut doc, 200.0, 200.0);
    assert_eq!(hit_test(Point::new(210.0, 205.0), &doc, None), Hit::Device(id));
    assert_eq!(hit_test(Point::new(220.0, 220.0), &doc, None), Hit::Background);
}

#[test]
fn topmost_device_wins() {
    let mut doc = Document::new();
    make_device(&mut doc, 200.0, 200.0);
    let top = make_device(&mut doc, 205.0, 200.0);
    assert_eq!(hit_test(Point::new(202.0, 200.0), &doc, None), Hit::Device(top));
}

#[test]
fn grouped_devices_hit_through_group() {
    let mut doc = Document::new();
    let a = make_device(&mut doc, 200.0, 200.0);
    let b = make_device(&mut doc, 200.0, 200.0);
    let group = doc.create_group(&[a, b]).unwrap();
    assert_eq!(hit_test(Point::new(200.0, 200.0), &doc, None), Hit::Group(group));
}

#[test]
fn unselected_room_is_background() {
    let mut doc = Document::new();
    make_room(&mut doc, 100.0, 100.0, 200.0, 100.0);
    assert_eq!(hit_test(Point::new(150.0, 150.0), &doc, None), Hit::Background);
}

#[test]
fn selected_room_body() {
    let mut doc = Document::new();
    let id = make_room(&mut doc, 100.0, 100.0, 200.0, 100.0);
    assert_eq!(hit_test(Point::new(150.0, 150.0), &doc, Some(&id)), Hit::Room(id));
}

#[test]
fn selected_room_handle_beats_body() {
    let mut doc = Document::new();
    let id = make_room(&mut doc, 100.0, 100.0, 200.0, 100.0);
    assert_eq!(
        hit_test(Point::new(103.0, 102.0), &doc, Some(&id)),
        Hit::Handle { room: id.clone(), direction: ResizeDirection::Nw }
    );
    assert_eq!(
        hit_test(Point::new(300.0, 150.0), &doc, Some(&id)),
        Hit::Handle { room: id, direction: ResizeDirection::E }
    );
}

#[test]
fn device_inside_selected_room_beats_body() {
    let mut doc = Document::new();
    let room = make_room(&mut doc, 100.0, 100.0, 200.0, 100.0);
    let device = make_device(&mut doc, 200.0, 150.0);
    assert_eq!(hit_test(Point::new(200.0, 150.0), &doc, Some(&room)), Hit::Device(device));
}

#[test]
fn stale_room_selection_is_ignored() {
    let doc = Document::new();
    let ghost = RoomId::from("room-gone");
    assert_eq!(hit_test(Point::new(150.0, 150.0), &doc, Some(&ghost)), Hit::Background);
}
