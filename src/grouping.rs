//! Proximity grouping of a device at the end of its drag.

#[cfg(test)]
#[path = "grouping_test.rs"]
mod grouping_test;

use tracing::{debug, info};

use crate::doc::{Device, DeviceId, DocError, Document, GroupId};

/// What grouping did with the dragged device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupingOutcome {
    /// Already grouped, or nothing close enough.
    Unchanged,
    /// Joined the group of a nearby device.
    Joined(GroupId),
    /// Formed a new group with the nearest ungrouped device.
    Created(GroupId),
}

/// Group `dragged` with a nearby device, if there is one.
///
/// Candidates are the other devices within `threshold` of `dragged` on both
/// axes. The nearest candidate that already has a group wins; failing that,
/// the nearest candidate overall forms a new group anchored on `dragged`.
/// Distance is Chebyshev, ties go to document order. Devices that are
/// already grouped are never re-evaluated.
///
/// # Errors
///
/// `DeviceNotFound` when `dragged` is not in the document.
pub fn group_after_drag(doc: &mut Document, dragged: &DeviceId, threshold: f64) -> Result<GroupingOutcome, DocError> {
    let device = doc.device(dragged).ok_or_else(|| DocError::DeviceNotFound(dragged.clone()))?;
    if device.group_id.is_some() {
        return Ok(GroupingOutcome::Unchanged);
    }

    let candidates: Vec<(f64, &Device)> = doc
        .devices()
        .iter()
        .filter(|other| other.id != device.id)
        .filter_map(|other| {
            let dx = (other.x - device.x).abs();
            let dy = (other.y - device.y).abs();
            (dx <= threshold && dy <= threshold).then_some((dx.max(dy), other))
        })
        .collect();

    let nearest = |grouped: bool| {
        candidates
            .iter()
            .filter(|(_, d)| d.group_id.is_some() == grouped)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, d)| *d)
    };

    let join = nearest(true).and_then(|d| d.group_id.clone());
    let partner = nearest(false).map(|d| d.id.clone());

    if let Some(group) = join {
        doc.add_device_to_group(dragged, &group)?;
        info!(device = %dragged, group = %group, "device joined nearby group");
        return Ok(GroupingOutcome::Joined(group));
    }

    if let Some(partner) = partner {
        let group = doc.create_group(&[dragged.clone(), partner])?;
        return Ok(GroupingOutcome::Created(group));
    }

    debug!(device = %dragged, "no grouping candidates");
    Ok(GroupingOutcome::Unchanged)
}
