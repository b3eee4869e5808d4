#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::{DeviceKind, MountPosition};

const THRESHOLD: f64 = 20.0;

fn add(doc: &mut Document, x: f64, y: f64) -> DeviceId {
    doc.insert_device(Device::new(DeviceKind::Socket, x, y, MountPosition::WallMedium))
        .unwrap()
}

#[test]
fn lone_device_is_unchanged() {
    let mut doc = Document::new();
    let a = add(&mut doc, 200.0, 200.0);
    add(&mut doc, 300.0, 300.0);
    assert_eq!(group_after_drag(&mut doc, &a, THRESHOLD).unwrap(), GroupingOutcome::Unchanged);
    assert!(doc.groups().is_empty());
}

#[test]
fn missing_device_errors() {
    let mut doc = Document::new();
    let err = group_after_drag(&mut doc, &DeviceId::from("ghost"), THRESHOLD).unwrap_err();
    assert!(matches!(err, DocError::DeviceNotFound(_)));
}

#[test]
fn two_nearby_devices_form_group() {
    let mut doc = Document::new();
    let b = add(&mut doc, 205.0, 205.0);
    let a = add(&mut doc, 210.0, 210.0);
    let outcome = group_after_drag(&mut doc, &a, THRESHOLD).unwrap();
    let GroupingOutcome::Created(group) = outcome else {
        panic!("expected a new group, got {outcome:?}");
    };
    assert_eq!(doc.member_count(&group), 2);
    assert_eq!(doc.device(&b).unwrap().group_id.as_ref(), Some(&group));
    assert_eq!(doc.ungrouped_devices().count(), 0);
}

#[test]
fn new_group_is_anchored_on_dragged_device() {
    let mut doc = Document::new();
    add(&mut doc, 205.0, 205.0);
    let a = add(&mut doc, 210.0, 210.0);
    doc.set_device_mount(&a, MountPosition::WallLow).unwrap();
    let GroupingOutcome::Created(group) = group_after_drag(&mut doc, &a, THRESHOLD).unwrap() else {
        panic!("expected a new group");
    };
    let g = doc.group(&group).unwrap();
    assert_eq!((g.x, g.y), (210.0, 210.0));
    assert_eq!(g.position, MountPosition::WallLow);
}

#[test]
fn threshold_is_inclusive_per_axis() {
    let mut doc = Document::new();
    add(&mut doc, 220.0, 180.0);
    let a = add(&mut doc, 200.0, 200.0);
    assert!(matches!(group_after_drag(&mut doc, &a, THRESHOLD).unwrap(), GroupingOutcome::Created(_)));
}

#[test]
fn one_axis_out_of_range_is_not_a_candidate() {
    let mut doc = Document::new();
    add(&mut doc, 200.0, 221.0);
    let a = add(&mut doc, 200.0, 200.0);
    assert_eq!(group_after_drag(&mut doc, &a, THRESHOLD).unwrap(), GroupingOutcome::Unchanged);
}

#[test]
fn grouped_candidate_is_joined() {
    let mut doc = Document::new();
    let x = add(&mut doc, 200.0, 200.0);
    let y = add(&mut doc, 200.0, 200.0);
    let existing = doc.create_group(&[x, y]).unwrap();
    add(&mut doc, 205.0, 200.0);
    let a = add(&mut doc, 210.0, 200.0);
    assert_eq!(group_after_drag(&mut doc, &a, THRESHOLD).unwrap(), GroupingOutcome::Joined(existing.clone()));
    assert_eq!(doc.member_count(&existing), 3);
    assert_eq!(doc.groups().len(), 1);
}

#[test]
fn joining_does_not_overwrite_mount() {
    let mut doc = Document::new();
    let x = add(&mut doc, 200.0, 200.0);
    let y = add(&mut doc, 200.0, 200.0);
    let existing = doc.create_group(&[x, y]).unwrap();
    doc.set_group_mount(&existing, MountPosition::Ceiling).unwrap();
    let a = add(&mut doc, 200.0, 200.0);
    group_after_drag(&mut doc, &a, THRESHOLD).unwrap();
    assert_eq!(doc.device(&a).unwrap().position, MountPosition::WallMedium);
}

#[test]
fn nearest_ungrouped_candidate_wins() {
    let mut doc = Document::new();
    add(&mut doc, 215.0, 200.0);
    let near = add(&mut doc, 205.0, 200.0);
    let a = add(&mut doc, 200.0, 200.0);
    group_after_drag(&mut doc, &a, THRESHOLD).unwrap();
    assert!(doc.device(&near).unwrap().group_id.is_some());
    assert_eq!(doc.ungrouped_devices().count(), 1);
}

#[test]
fn equal_distance_prefers_document_order() {
    let mut doc = Document::new();
    let first = add(&mut doc, 190.0, 200.0);
    add(&mut doc, 210.0, 200.0);
    let a = add(&mut doc, 200.0, 200.0);
    group_after_drag(&mut doc, &a, THRESHOLD).unwrap();
    assert!(doc.device(&first).unwrap().group_id.is_some());
}

#[test]
fn already_grouped_device_is_not_reevaluated() {
    let mut doc = Document::new();
    let x = add(&mut doc, 200.0, 200.0);
    let y = add(&mut doc, 200.0, 200.0);
    doc.create_group(&[x.clone(), y]).unwrap();
    add(&mut doc, 205.0, 205.0);
    assert_eq!(group_after_drag(&mut doc, &x, THRESHOLD).unwrap(), GroupingOutcome::Unchanged);
    assert_eq!(doc.ungrouped_devices().count(), 1);
}
