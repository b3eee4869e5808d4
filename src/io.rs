//! Document export and import.
//!
//! The file format is a JSON object with `rooms`, `devices` and an optional
//! `deviceGroups` array. Group records carry full copies of their member
//! devices so older readers can still render stacks; on import those copies
//! only establish membership and fill in devices missing from `devices`.

#[cfg(test)]
#[path = "io_test.rs"]
mod io_test;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::doc::{Device, DeviceGroup, DocError, Document, GroupId, MountPosition, Room};

/// Errors from reading or writing a document file.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A required top-level array is absent or not an array.
    #[error("document has no `{0}` array")]
    MissingField(&'static str),
    /// The content parsed but breaks a document invariant.
    #[error("document is inconsistent: {0}")]
    Invalid(#[from] DocError),
    #[error("document i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// One entry of `deviceGroups`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    pub id: GroupId,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub devices: Vec<Device>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub position: MountPosition,
}

/// The on-disk shape of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFile {
    pub rooms: Vec<Room>,
    pub devices: Vec<Device>,
    #[serde(default)]
    pub device_groups: Vec<GroupRecord>,
}

impl DocumentFile {
    /// Snapshot `doc`, expanding each group's member list.
    #[must_use]
    pub fn from_document(doc: &Document) -> Self {
        let device_groups = doc
            .groups()
            .iter()
            .map(|g| GroupRecord {
                id: g.id.clone(),
                x: g.x,
                y: g.y,
                devices: doc.members(&g.id).cloned().collect(),
                notes: g.notes.clone(),
                position: g.position,
            })
            .collect();
        Self { rooms: doc.rooms().to_vec(), devices: doc.devices().to_vec(), device_groups }
    }

    /// Build a document, reconciling group records with device records.
    ///
    /// A device listed in a group record belongs to that group; a member copy
    /// with no entry in `devices` is added. Memberships pointing at unknown
    /// groups are dropped and groups left with fewer than two members are
    /// dissolved.
    ///
    /// # Errors
    ///
    /// `Invalid` on duplicate ids or rooms without a positive size.
    pub fn into_document(self) -> Result<Document, DocumentError> {
        let Self { rooms, mut devices, device_groups } = self;
        let mut groups = Vec::with_capacity(device_groups.len());

        for record in device_groups {
            for copy in record.devices {
                match devices.iter_mut().find(|d| d.id == copy.id) {
                    Some(device) => device.group_id = Some(record.id.clone()),
                    None => devices.push(Device { group_id: Some(record.id.clone()), ..copy }),
                }
            }
            groups.push(DeviceGroup {
                id: record.id,
                x: record.x,
                y: record.y,
                notes: record.notes,
                position: record.position,
            });
        }

        Ok(Document::from_parts(rooms, devices, groups)?)
    }
}

/// Serialize `doc` as pretty-printed JSON.
///
/// # Errors
///
/// `Parse` if serialization fails, which only happens for non-finite numbers.
pub fn export_json(doc: &Document) -> Result<String, DocumentError> {
    Ok(serde_json::to_string_pretty(&DocumentFile::from_document(doc))?)
}

/// Parse a document from JSON text.
///
/// `rooms` and `devices` must both be present as arrays; `deviceGroups` may
/// be absent.
///
/// # Errors
///
/// `Parse` for malformed JSON or records, `MissingField` for an absent
/// required array, `Invalid` for content that breaks document invariants.
pub fn import_json(text: &str) -> Result<Document, DocumentError> {
    let value: Value = serde_json::from_str(text)?;
    for field in ["rooms", "devices"] {
        if !value.get(field).is_some_and(Value::is_array) {
            return Err(DocumentError::MissingField(field));
        }
    }
    let file: DocumentFile = serde_json::from_value(value)?;
    let doc = file.into_document()?;
    info!(
        rooms = doc.rooms().len(),
        devices = doc.devices().len(),
        groups = doc.groups().len(),
        "document parsed"
    );
    Ok(doc)
}

/// Read and parse a document file.
///
/// # Errors
///
/// `Io` when the file cannot be read, otherwise as [`import_json`].
pub fn read_file(path: &Path) -> Result<Document, DocumentError> {
    let text = fs::read_to_string(path)?;
    import_json(&text)
}

/// Write `doc` to `path` as pretty-printed JSON.
///
/// # Errors
///
/// `Io` when the file cannot be written.
pub fn write_file(path: &Path, doc: &Document) -> Result<(), DocumentError> {
    let text = export_json(doc)?;
    fs::write(path, text)?;
    Ok(())
}
