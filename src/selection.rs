//! Single-entity selection and the details-panel flag that follows it.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::doc::{DeviceId, Document, GroupId, RoomId};

/// What is currently selected. At most one entity at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selected {
    #[default]
    None,
    Device(DeviceId),
    Group(GroupId),
    Room(RoomId),
}

/// Map a clicked device to what should actually be selected.
///
/// A grouped device resolves to its group; device-level selection of a group
/// member is never allowed. Unknown devices resolve to nothing.
#[must_use]
pub fn resolve_selection(doc: &Document, clicked: &DeviceId) -> Selected {
    match doc.device(clicked) {
        Some(device) => match &device.group_id {
            Some(group) => Selected::Group(group.clone()),
            None => Selected::Device(clicked.clone()),
        },
        None => Selected::None,
    }
}

/// Selection state plus whether the details side panel is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    current: Selected,
    details_open: bool,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a device, redirecting to its group when it has one.
    pub fn select_device(&mut self, doc: &Document, id: &DeviceId) {
        let target = resolve_selection(doc, id);
        self.details_open = !matches!(target, Selected::None);
        self.current = target;
    }

    pub fn select_group(&mut self, id: &GroupId) {
        self.current = Selected::Group(id.clone());
        self.details_open = true;
    }

    /// Select a room. Closes the details panel.
    pub fn select_room(&mut self, id: &RoomId) {
        self.current = Selected::Room(id.clone());
        self.details_open = false;
    }

    /// Clear the selection. Closes the details panel.
    pub fn select_none(&mut self) {
        self.current = Selected::None;
        self.details_open = false;
    }

    #[must_use]
    pub fn current(&self) -> &Selected {
        &self.current
    }

    #[must_use]
    pub fn details_open(&self) -> bool {
        self.details_open
    }

    #[must_use]
    pub fn device(&self) -> Option<&DeviceId> {
        match &self.current {
            Selected::Device(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn group(&self) -> Option<&GroupId> {
        match &self.current {
            Selected::Group(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn room(&self) -> Option<&RoomId> {
        match &self.current {
            Selected::Room(id) => Some(id),
            _ => None,
        }
    }

    /// Drop the selection if it names something no longer in `doc`, or a
    /// device that has since joined a group.
    ///
    /// Returns `true` when the selection changed.
    pub fn reconcile(&mut self, doc: &Document) -> bool {
        let next = match &self.current {
            Selected::None => return false,
            Selected::Device(id) => resolve_selection(doc, id),
            Selected::Group(id) if doc.group(id).is_some() => return false,
            Selected::Room(id) if doc.room(id).is_some() => return false,
            Selected::Group(_) | Selected::Room(_) => Selected::None,
        };
        if next == self.current {
            return false;
        }
        if next == Selected::None {
            self.select_none();
        } else {
            self.current = next;
        }
        true
    }
}
