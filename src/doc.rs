//! Document model: rooms, devices, device groups, and the mutation surface.
//!
//! This module defines what is on the floorplan (`Room`, `Device`,
//! `DeviceGroup`) and the store that owns them (`Document`). Every change to
//! the plan goes through one of the `Document` operations, each of which
//! checks its preconditions before touching anything, so a failed operation
//! leaves the document exactly as it was.
//!
//! Group membership is stored once, on the device (`Device::group_id`). A
//! group's member list is derived by filtering devices on that field; groups
//! keep no copies of their members.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::consts::{DEFAULT_ROOM_COLOR, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH, DEFAULT_ROOM_X, DEFAULT_ROOM_Y};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh random id.
            #[must_use]
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(format!(concat!($prefix, "-{}"), Uuid::new_v4()))
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

entity_id!(
    /// Unique identifier for a device.
    DeviceId,
    "device"
);
entity_id!(
    /// Unique identifier for a device group.
    GroupId,
    "group"
);
entity_id!(
    /// Unique identifier for a room.
    RoomId,
    "room"
);

// =============================================================================
// ENUMS
// =============================================================================

/// Kind of electrical or IoT fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceKind {
    Socket,
    Switch,
    MotionSensor,
    TemperatureSensor,
    Light,
    SmartSocket,
    SmartSwitch,
    Ethernet,
    TvOutlet,
    Thermostat,
    CeilingLight,
    CeilingSensor,
}

impl DeviceKind {
    /// Every kind, in catalog order.
    pub const ALL: [Self; 12] = [
        Self::Socket,
        Self::Switch,
        Self::SmartSocket,
        Self::SmartSwitch,
        Self::MotionSensor,
        Self::TemperatureSensor,
        Self::Light,
        Self::CeilingLight,
        Self::CeilingSensor,
        Self::Ethernet,
        Self::TvOutlet,
        Self::Thermostat,
    ];

    /// Mount position pre-selected when the placement tool is armed with this kind.
    #[must_use]
    pub fn default_mount(self) -> MountPosition {
        match self {
            Self::CeilingLight | Self::CeilingSensor => MountPosition::Ceiling,
            Self::Switch | Self::SmartSwitch | Self::Thermostat => MountPosition::WallHigh,
            _ => MountPosition::WallMedium,
        }
    }

    /// Human-readable catalog label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Socket => "Socket",
            Self::Switch => "Switch",
            Self::MotionSensor => "Motion Sensor",
            Self::TemperatureSensor => "Temperature Sensor",
            Self::Light => "Wall Light",
            Self::SmartSocket => "Smart Socket",
            Self::SmartSwitch => "Smart Switch",
            Self::Ethernet => "Ethernet",
            Self::TvOutlet => "TV Outlet",
            Self::Thermostat => "Thermostat",
            Self::CeilingLight => "Ceiling Light",
            Self::CeilingSensor => "Ceiling Sensor",
        }
    }
}

/// Installation height of a device, independent of its x/y placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MountPosition {
    WallLow,
    #[default]
    WallMedium,
    WallHigh,
    Ceiling,
}

impl MountPosition {
    /// Single-letter badge: `L`, `M`, `H`, or `C`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::WallLow => "L",
            Self::WallMedium => "M",
            Self::WallHigh => "H",
            Self::Ceiling => "C",
        }
    }

    /// Approximate mounting height above the floor in centimeters. `None` for ceiling.
    #[must_use]
    pub fn approx_height_cm(self) -> Option<u32> {
        match self {
            Self::WallLow => Some(30),
            Self::WallMedium => Some(80),
            Self::WallHigh => Some(120),
            Self::Ceiling => None,
        }
    }
}

/// Quarter-turn rotation of a device icon. Serialized as degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// Rotate clockwise by 90°, wrapping at 360.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::R0 => Self::R90,
            Self::R90 => Self::R180,
            Self::R180 => Self::R270,
            Self::R270 => Self::R0,
        }
    }

    #[must_use]
    pub fn degrees(self) -> u16 {
        match self {
            Self::R0 => 0,
            Self::R90 => 90,
            Self::R180 => 180,
            Self::R270 => 270,
        }
    }
}

/// A rotation that is not a whole number of quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("rotation must be a multiple of 90 degrees, got {0}")]
pub struct InvalidRotation(pub i64);

impl TryFrom<i64> for Rotation {
    type Error = InvalidRotation;

    fn try_from(degrees: i64) -> Result<Self, Self::Error> {
        match degrees.rem_euclid(360) {
            0 => Ok(Self::R0),
            90 => Ok(Self::R90),
            180 => Ok(Self::R180),
            270 => Ok(Self::R270),
            _ => Err(InvalidRotation(degrees)),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

// =============================================================================
// ENTITIES
// =============================================================================

/// A point-like fixture placed on the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: DeviceId,
    #[serde(rename = "type")]
    pub kind: DeviceKind,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: Rotation,
    #[serde(default)]
    pub position: MountPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Owning group, if any. Always names a group that exists in the same document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
}

impl Device {
    /// A fresh ungrouped, unrotated device.
    #[must_use]
    pub fn new(kind: DeviceKind, x: f64, y: f64, position: MountPosition) -> Self {
        Self {
            id: DeviceId::new(),
            kind,
            x,
            y,
            rotation: Rotation::R0,
            position,
            description: None,
            notes: None,
            group_id: None,
        }
    }
}

/// Two or more devices stacked at (near-)identical coordinates.
///
/// Members are the devices whose `group_id` names this group.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceGroup {
    pub id: GroupId,
    pub x: f64,
    pub y: f64,
    pub notes: String,
    /// Mount position shared by every member.
    pub position: MountPosition,
}

/// A named axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Sparse update for a room. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomPatch {
    pub name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub color: Option<String>,
}

impl RoomPatch {
    /// A patch that only moves and resizes.
    #[must_use]
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x: Some(x), y: Some(y), width: Some(width), height: Some(height), ..Default::default() }
    }
}

/// Why a document operation was refused.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DocError {
    #[error("device not found: {0}")]
    DeviceNotFound(DeviceId),
    #[error("group not found: {0}")]
    GroupNotFound(GroupId),
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),
    #[error("device {device} already belongs to group {group}")]
    AlreadyGrouped { device: DeviceId, group: GroupId },
    #[error("device {device} is not a member of group {group}")]
    NotAMember { device: DeviceId, group: GroupId },
    #[error("a group needs at least 2 distinct devices, got {0}")]
    TooFewMembers(usize),
    #[error("room {0} must have a positive, finite size")]
    InvalidRoomSize(RoomId),
    #[error("duplicate id: {0}")]
    DuplicateId(String),
    #[error("device {device} references missing group {group}")]
    DanglingGroup { device: DeviceId, group: GroupId },
    #[error("group {0} has fewer than 2 members")]
    UndersizedGroup(GroupId),
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// In-memory floorplan. Collections keep insertion order, which is also draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    rooms: Vec<Room>,
    devices: Vec<Device>,
    groups: Vec<DeviceGroup>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from loaded parts.
    ///
    /// Device `group_id`s naming unknown groups are cleared and groups with
    /// fewer than 2 members are dissolved. Duplicate ids and rooms with a
    /// non-positive size are rejected.
    pub fn from_parts(rooms: Vec<Room>, devices: Vec<Device>, groups: Vec<DeviceGroup>) -> Result<Self, DocError> {
        let mut seen = HashSet::new();
        for id in rooms
            .iter()
            .map(|r| r.id.as_str())
            .chain(devices.iter().map(|d| d.id.as_str()))
            .chain(groups.iter().map(|g| g.id.as_str()))
        {
            if !seen.insert(id) {
                return Err(DocError::DuplicateId(id.to_owned()));
            }
        }
        if let Some(room) = rooms.iter().find(|r| !valid_size(r.width, r.height)) {
            return Err(DocError::InvalidRoomSize(room.id.clone()));
        }

        let mut doc = Self { rooms, devices, groups };
        let known: HashSet<GroupId> = doc.groups.iter().map(|g| g.id.clone()).collect();
        for device in &mut doc.devices {
            if device.group_id.as_ref().is_some_and(|g| !known.contains(g)) {
                device.group_id = None;
            }
        }
        let undersized: Vec<GroupId> = doc
            .groups
            .iter()
            .filter(|g| doc.member_count(&g.id) < 2)
            .map(|g| g.id.clone())
            .collect();
        for id in undersized {
            doc.dissolve(&id);
        }
        Ok(doc)
    }

    /// Check every structural invariant.
    pub fn validate(&self) -> Result<(), DocError> {
        for room in &self.rooms {
            if !valid_size(room.width, room.height) {
                return Err(DocError::InvalidRoomSize(room.id.clone()));
            }
        }
        for device in &self.devices {
            if let Some(group) = &device.group_id {
                if self.group(group).is_none() {
                    return Err(DocError::DanglingGroup { device: device.id.clone(), group: group.clone() });
                }
            }
        }
        for group in &self.groups {
            if self.member_count(&group.id) < 2 {
                return Err(DocError::UndersizedGroup(group.id.clone()));
            }
        }
        Ok(())
    }

    // --- Queries ---

    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    #[must_use]
    pub fn groups(&self) -> &[DeviceGroup] {
        &self.groups
    }

    #[must_use]
    pub fn device(&self, id: &DeviceId) -> Option<&Device> {
        self.devices.iter().find(|d| &d.id == id)
    }

    #[must_use]
    pub fn group(&self, id: &GroupId) -> Option<&DeviceGroup> {
        self.groups.iter().find(|g| &g.id == id)
    }

    #[must_use]
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| &r.id == id)
    }

    /// Devices belonging to `group`, in document order.
    pub fn members<'a>(&'a self, group: &'a GroupId) -> impl Iterator<Item = &'a Device> + 'a {
        self.devices
            .iter()
            .filter(move |d| d.group_id.as_ref() == Some(group))
    }

    #[must_use]
    pub fn member_count(&self, group: &GroupId) -> usize {
        self.members(group).count()
    }

    /// Devices that are drawn individually.
    pub fn ungrouped_devices(&self) -> impl Iterator<Item = &Device> {
        self.devices.iter().filter(|d| d.group_id.is_none())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty() && self.devices.is_empty()
    }

    // --- Devices ---

    /// Add an ungrouped device. Any `group_id` on the input is discarded.
    pub fn insert_device(&mut self, mut device: Device) -> Result<DeviceId, DocError> {
        if self.contains_id(device.id.as_str()) {
            return Err(DocError::DuplicateId(device.id.to_string()));
        }
        device.group_id = None;
        let id = device.id.clone();
        self.devices.push(device);
        Ok(id)
    }

    pub fn move_device(&mut self, id: &DeviceId, x: f64, y: f64) -> Result<(), DocError> {
        let device = self.device_mut(id)?;
        device.x = x;
        device.y = y;
        Ok(())
    }

    pub fn set_device_mount(&mut self, id: &DeviceId, position: MountPosition) -> Result<(), DocError> {
        self.device_mut(id)?.position = position;
        Ok(())
    }

    /// Rotate a device a quarter turn clockwise, returning the new rotation.
    pub fn rotate_device(&mut self, id: &DeviceId) -> Result<Rotation, DocError> {
        let device = self.device_mut(id)?;
        device.rotation = device.rotation.next();
        Ok(device.rotation)
    }

    /// Replace a device's notes. Blank text clears them.
    pub fn set_device_notes(&mut self, id: &DeviceId, notes: &str) -> Result<(), DocError> {
        self.device_mut(id)?.notes = if notes.trim().is_empty() { None } else { Some(notes.to_owned()) };
        Ok(())
    }

    /// Remove a device. A group left with a single member is dissolved.
    pub fn delete_device(&mut self, id: &DeviceId) -> Result<Device, DocError> {
        let index = self
            .devices
            .iter()
            .position(|d| &d.id == id)
            .ok_or_else(|| DocError::DeviceNotFound(id.clone()))?;
        let device = self.devices.remove(index);
        if let Some(group) = &device.group_id {
            self.dissolve_if_undersized(group);
        }
        Ok(device)
    }

    // --- Groups ---

    /// Group `ids` together. The first id is the anchor: the group takes its
    /// position and mount position.
    pub fn create_group(&mut self, ids: &[DeviceId]) -> Result<GroupId, DocError> {
        let mut distinct: Vec<&DeviceId> = Vec::with_capacity(ids.len());
        for id in ids {
            if !distinct.contains(&id) {
                distinct.push(id);
            }
        }
        if distinct.len() < 2 {
            return Err(DocError::TooFewMembers(distinct.len()));
        }
        for id in &distinct {
            let device = self.device(id).ok_or_else(|| DocError::DeviceNotFound((*id).clone()))?;
            if let Some(group) = &device.group_id {
                return Err(DocError::AlreadyGrouped { device: (*id).clone(), group: group.clone() });
            }
        }

        let anchor = self.device(distinct[0]).ok_or_else(|| DocError::DeviceNotFound(distinct[0].clone()))?;
        let group = DeviceGroup {
            id: GroupId::new(),
            x: anchor.x,
            y: anchor.y,
            notes: String::new(),
            position: anchor.position,
        };
        let group_id = group.id.clone();
        for device in &mut self.devices {
            if distinct.contains(&&device.id) {
                device.group_id = Some(group_id.clone());
            }
        }
        self.groups.push(group);
        info!(group = %group_id, members = distinct.len(), "device group created");
        Ok(group_id)
    }

    /// Move a group to `(x, y)`; every member shifts by the same delta.
    pub fn move_group(&mut self, id: &GroupId, x: f64, y: f64) -> Result<(), DocError> {
        let group = self.group_mut(id)?;
        let dx = x - group.x;
        let dy = y - group.y;
        group.x = x;
        group.y = y;
        for device in self.devices.iter_mut().filter(|d| d.group_id.as_ref() == Some(id)) {
            device.x += dx;
            device.y += dy;
        }
        Ok(())
    }

    /// Set the group's mount position and propagate it to every member.
    pub fn set_group_mount(&mut self, id: &GroupId, position: MountPosition) -> Result<(), DocError> {
        self.group_mut(id)?.position = position;
        for device in self.devices.iter_mut().filter(|d| d.group_id.as_ref() == Some(id)) {
            device.position = position;
        }
        Ok(())
    }

    pub fn set_group_notes(&mut self, id: &GroupId, notes: &str) -> Result<(), DocError> {
        notes.clone_into(&mut self.group_mut(id)?.notes);
        Ok(())
    }

    /// Add an ungrouped device to an existing group.
    ///
    /// Adding a device that is already a member of `group` is a no-op.
    pub fn add_device_to_group(&mut self, device: &DeviceId, group: &GroupId) -> Result<(), DocError> {
        if self.group(group).is_none() {
            return Err(DocError::GroupNotFound(group.clone()));
        }
        let record = self.device_mut(device)?;
        if let Some(current) = &record.group_id {
            if current == group {
                return Ok(());
            }
            return Err(DocError::AlreadyGrouped { device: device.clone(), group: current.clone() });
        }
        record.group_id = Some(group.clone());
        Ok(())
    }

    /// Take a device out of a group, keeping the device.
    ///
    /// Returns `true` when this left the group with fewer than 2 members and
    /// it was dissolved.
    pub fn remove_device_from_group(&mut self, device: &DeviceId, group: &GroupId) -> Result<bool, DocError> {
        if self.group(group).is_none() {
            return Err(DocError::GroupNotFound(group.clone()));
        }
        let record = self.device_mut(device)?;
        if record.group_id.as_ref() != Some(group) {
            return Err(DocError::NotAMember { device: device.clone(), group: group.clone() });
        }
        record.group_id = None;
        Ok(self.dissolve_if_undersized(group))
    }

    /// Dissolve a group, keeping its devices as ungrouped devices.
    pub fn ungroup(&mut self, id: &GroupId) -> Result<(), DocError> {
        if self.group(id).is_none() {
            return Err(DocError::GroupNotFound(id.clone()));
        }
        self.dissolve(id);
        Ok(())
    }

    /// Delete a group and every member device.
    pub fn delete_group(&mut self, id: &GroupId) -> Result<Vec<Device>, DocError> {
        let index = self
            .groups
            .iter()
            .position(|g| &g.id == id)
            .ok_or_else(|| DocError::GroupNotFound(id.clone()))?;
        self.groups.remove(index);
        let (removed, kept): (Vec<Device>, Vec<Device>) = std::mem::take(&mut self.devices)
            .into_iter()
            .partition(|d| d.group_id.as_ref() == Some(id));
        self.devices = kept;
        Ok(removed)
    }

    // --- Rooms ---

    /// Add a room with the default position and size. Without a color the
    /// room gets the default wall color.
    pub fn add_room(&mut self, name: &str, color: Option<String>) -> RoomId {
        let room = Room {
            id: RoomId::new(),
            name: name.to_owned(),
            x: DEFAULT_ROOM_X,
            y: DEFAULT_ROOM_Y,
            width: DEFAULT_ROOM_WIDTH,
            height: DEFAULT_ROOM_HEIGHT,
            color: Some(color.unwrap_or_else(|| DEFAULT_ROOM_COLOR.to_owned())),
        };
        let id = room.id.clone();
        self.rooms.push(room);
        id
    }

    /// Add a fully specified room.
    pub fn insert_room(&mut self, room: Room) -> Result<RoomId, DocError> {
        if self.contains_id(room.id.as_str()) {
            return Err(DocError::DuplicateId(room.id.to_string()));
        }
        if !valid_size(room.width, room.height) {
            return Err(DocError::InvalidRoomSize(room.id));
        }
        let id = room.id.clone();
        self.rooms.push(room);
        Ok(id)
    }

    /// Apply a partial update. The resulting size must stay positive.
    pub fn update_room(&mut self, id: &RoomId, patch: RoomPatch) -> Result<(), DocError> {
        let room = self.room_mut(id)?;
        let width = patch.width.unwrap_or(room.width);
        let height = patch.height.unwrap_or(room.height);
        if !valid_size(width, height) {
            return Err(DocError::InvalidRoomSize(id.clone()));
        }
        if let Some(name) = patch.name {
            room.name = name;
        }
        if let Some(x) = patch.x {
            room.x = x;
        }
        if let Some(y) = patch.y {
            room.y = y;
        }
        room.width = width;
        room.height = height;
        if let Some(color) = patch.color {
            room.color = Some(color);
        }
        Ok(())
    }

    pub fn delete_room(&mut self, id: &RoomId) -> Result<Room, DocError> {
        let index = self
            .rooms
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| DocError::RoomNotFound(id.clone()))?;
        Ok(self.rooms.remove(index))
    }

    // --- Internals ---

    fn device_mut(&mut self, id: &DeviceId) -> Result<&mut Device, DocError> {
        self.devices
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or_else(|| DocError::DeviceNotFound(id.clone()))
    }

    fn group_mut(&mut self, id: &GroupId) -> Result<&mut DeviceGroup, DocError> {
        self.groups
            .iter_mut()
            .find(|g| &g.id == id)
            .ok_or_else(|| DocError::GroupNotFound(id.clone()))
    }

    fn room_mut(&mut self, id: &RoomId) -> Result<&mut Room, DocError> {
        self.rooms
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| DocError::RoomNotFound(id.clone()))
    }

    fn contains_id(&self, id: &str) -> bool {
        self.rooms.iter().any(|r| r.id.as_str() == id)
            || self.devices.iter().any(|d| d.id.as_str() == id)
            || self.groups.iter().any(|g| g.id.as_str() == id)
    }

    fn dissolve_if_undersized(&mut self, id: &GroupId) -> bool {
        if self.group(id).is_some() && self.member_count(id) < 2 {
            self.dissolve(id);
            return true;
        }
        false
    }

    fn dissolve(&mut self, id: &GroupId) {
        for device in self.devices.iter_mut().filter(|d| d.group_id.as_ref() == Some(id)) {
            device.group_id = None;
        }
        self.groups.retain(|g| &g.id != id);
        info!(group = %id, "device group dissolved");
    }
}

fn valid_size(width: f64, height: f64) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}
