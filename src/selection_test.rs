use super::*;
use crate::doc::{Device, DeviceKind, MountPosition};

fn make_doc() -> (Document, DeviceId, DeviceId, DeviceId) {
    let mut doc = Document::new();
    let mut add = |x: f64| {
        doc.insert_device(Device::new(DeviceKind::Switch, x, 100.0, MountPosition::WallHigh))
            .unwrap()
    };
    let a = add(100.0);
    let b = add(100.0);
    let c = add(300.0);
    doc.create_group(&[a.clone(), b.clone()]).unwrap();
    (doc, a, b, c)
}

fn count_selected(sel: &Selection) -> usize {
    usize::from(sel.device().is_some()) + usize::from(sel.group().is_some()) + usize::from(sel.room().is_some())
}

// =============================================================
// resolve_selection
// =============================================================

#[test]
fn ungrouped_device_resolves_to_itself() {
    let (doc, _, _, c) = make_doc();
    assert_eq!(resolve_selection(&doc, &c), Selected::Device(c));
}

#[test]
fn grouped_device_resolves_to_group() {
    let (doc, a, _, _) = make_doc();
    let group = doc.device(&a).unwrap().group_id.clone().unwrap();
    assert_eq!(resolve_selection(&doc, &a), Selected::Group(group));
}

#[test]
fn unknown_device_resolves_to_none() {
    let (doc, _, _, _) = make_doc();
    assert_eq!(resolve_selection(&doc, &DeviceId::from("ghost")), Selected::None);
}

// =============================================================
// Exclusivity and details panel
// =============================================================

#[test]
fn setters_are_mutually_exclusive() {
    let (doc, _, _, c) = make_doc();
    let mut sel = Selection::new();
    sel.select_device(&doc, &c);
    assert_eq!(count_selected(&sel), 1);
    sel.select_room(&RoomId::from("room-1"));
    assert_eq!(count_selected(&sel), 1);
    assert!(sel.room().is_some());
    sel.select_group(&doc.groups()[0].id);
    assert_eq!(count_selected(&sel), 1);
    sel.select_none();
    assert_eq!(count_selected(&sel), 0);
}

#[test]
fn select_grouped_device_selects_group() {
    let (doc, _, b, _) = make_doc();
    let mut sel = Selection::new();
    sel.select_device(&doc, &b);
    assert!(sel.device().is_none());
    assert_eq!(sel.group(), Some(&doc.groups()[0].id));
}

#[test]
fn device_selection_opens_details_room_closes_it() {
    let (doc, _, _, c) = make_doc();
    let mut sel = Selection::new();
    sel.select_device(&doc, &c);
    assert!(sel.details_open());
    sel.select_room(&RoomId::from("room-1"));
    assert!(!sel.details_open());
}

#[test]
fn select_none_closes_details() {
    let mut sel = Selection::new();
    sel.select_group(&GroupId::from("g"));
    assert!(sel.details_open());
    sel.select_none();
    assert!(!sel.details_open());
    assert_eq!(sel.current(), &Selected::None);
}

// =============================================================
// reconcile
// =============================================================

#[test]
fn reconcile_clears_deleted_device() {
    let (mut doc, _, _, c) = make_doc();
    let mut sel = Selection::new();
    sel.select_device(&doc, &c);
    doc.delete_device(&c).unwrap();
    assert!(sel.reconcile(&doc));
    assert_eq!(sel.current(), &Selected::None);
    assert!(!sel.details_open());
}

#[test]
fn reconcile_redirects_newly_grouped_device() {
    let (mut doc, _, _, c) = make_doc();
    let mut sel = Selection::new();
    sel.select_device(&doc, &c);
    let group = doc.groups()[0].id.clone();
    doc.add_device_to_group(&c, &group).unwrap();
    assert!(sel.reconcile(&doc));
    assert_eq!(sel.group(), Some(&group));
    assert!(sel.details_open());
}

#[test]
fn reconcile_clears_dissolved_group() {
    let (mut doc, a, _, _) = make_doc();
    let mut sel = Selection::new();
    sel.select_device(&doc, &a);
    let group = sel.group().cloned().unwrap();
    doc.remove_device_from_group(&a, &group).unwrap();
    assert!(sel.reconcile(&doc));
    assert_eq!(sel.current(), &Selected::None);
}

#[test]
fn reconcile_keeps_live_selection() {
    let (doc, _, _, c) = make_doc();
    let mut sel = Selection::new();
    sel.select_device(&doc, &c);
    assert!(!sel.reconcile(&doc));
    assert_eq!(sel.device(), Some(&c));
}
