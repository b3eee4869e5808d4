//! Editor engine: the single owner of document, selection, camera and gesture.
//!
//! Hosts forward pointer and keyboard events and panel commands to an
//! [`Engine`] and get back the [`Action`]s describing what changed. Nothing
//! here fails outward: a refused operation is logged and leaves every piece
//! of state as it was. Pointer-up must be delivered from a window-level
//! listener so a release outside the surface still ends the gesture.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::mem;

use tracing::{debug, info, warn};

use crate::config::EditorConfig;
use crate::consts::EXPORT_FILE_NAME;
use crate::doc::{Device, DeviceId, DeviceKind, DocError, Document, GroupId, MountPosition, RoomId, RoomPatch};
use crate::drag::{DragState, Grip, RoomRect, Tool, drag_group, drag_point, resize_room};
use crate::grid::Grid;
use crate::grouping::{GroupingOutcome, group_after_drag};
use crate::hit::{Hit, hit_test};
use crate::io::{DocumentError, export_json, import_json};
use crate::selection::{Selected, Selection};
use crate::store::{KeyValueStore, StoreError, load_document, save_document};
use crate::transform::{Point, SurfaceRect, Transform};
use crate::viewport::{BoundingBox, Viewport, compute_bounding_box};
use crate::walls::{Wall, derive_walls};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    DeviceCreated(DeviceId),
    DeviceUpdated(DeviceId),
    DeviceDeleted(DeviceId),
    GroupCreated(GroupId),
    GroupUpdated(GroupId),
    GroupDeleted(GroupId),
    RoomCreated(RoomId),
    RoomUpdated(RoomId),
    RoomDeleted(RoomId),
    /// The whole document was swapped out by an import or a load.
    DocumentReplaced,
    SelectionChanged,
    ViewportChanged,
    SetCursor(String),
    RenderNeeded,
}

/// A serialized document ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub contents: String,
}

/// Owns the document and every piece of editor state; the single entry point for host UIs.
pub struct Engine {
    doc: Document,
    selection: Selection,
    viewport: Viewport,
    /// Content extent the viewport was last fitted to.
    extent: BoundingBox,
    drag: DragState,
    tool: Tool,
    config: EditorConfig,
    grid: Grid,
    surface: Option<SurfaceRect>,
    read_only: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Engine {
    /// An engine over an empty document.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self::with_document(Document::new(), config)
    }

    /// An engine over `doc`, with the camera fitted to its content.
    #[must_use]
    pub fn with_document(doc: Document, config: EditorConfig) -> Self {
        let extent = compute_bounding_box(doc.rooms(), doc.devices(), config.margin, config.default_extent());
        Self {
            doc,
            selection: Selection::new(),
            viewport: Viewport::fitted(extent),
            extent,
            drag: DragState::Idle,
            tool: Tool::Unarmed,
            grid: config.grid(),
            config,
            surface: None,
            read_only: false,
        }
    }

    // --- Host setup ---

    /// Record where the rendering surface sits on screen.
    ///
    /// Until this is called with a measurable rectangle no gesture can start.
    pub fn set_surface(&mut self, surface: SurfaceRect) {
        self.surface = Some(surface);
    }

    /// Switch between editing and viewing.
    ///
    /// A read-only engine still selects, pans and zooms but refuses every
    /// document change. Entering read-only disarms the tool and drops any
    /// edit gesture in progress.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
        if read_only {
            self.tool = Tool::Unarmed;
            if !matches!(self.drag, DragState::Idle | DragState::Panning { .. }) {
                debug!(state = self.drag.name(), "edit gesture dropped for read-only mode");
                self.drag = DragState::Idle;
            }
        }
    }

    // --- Tool ---

    /// Arm the placement tool with `kind` and its default mount position.
    pub fn arm_tool(&mut self, kind: DeviceKind) -> Vec<Action> {
        if self.read_only {
            debug!(?kind, "read-only; tool not armed");
            return Vec::new();
        }
        self.tool = Tool::arm(kind);
        vec![Action::SetCursor(self.idle_cursor().to_owned())]
    }

    /// Override the mount position the armed tool will place with.
    pub fn set_tool_mount(&mut self, mount: MountPosition) {
        self.tool = self.tool.with_mount(mount);
    }

    pub fn disarm_tool(&mut self) -> Vec<Action> {
        self.tool = Tool::Unarmed;
        vec![Action::SetCursor(self.idle_cursor().to_owned())]
    }

    // --- Pointer input ---

    /// Classify the press and start the matching gesture.
    pub fn on_pointer_down(&mut self, screen: Point) -> Vec<Action> {
        if !self.drag.is_idle() {
            debug!(state = self.drag.name(), "pointer-down during active gesture ignored");
            return Vec::new();
        }
        let Some((surface, transform)) = self.capture() else {
            debug!("surface not measurable; gesture not started");
            return Vec::new();
        };
        let world = transform.to_world(screen);
        let grip = Grip::new(transform, screen);
        let mut actions = Vec::new();

        match hit_test(world, &self.doc, self.selection.room()) {
            Hit::Handle { room, direction } => {
                if let Some(r) = self.doc.room(&room).filter(|_| !self.read_only) {
                    self.drag = DragState::ResizingRoom { id: room, direction, grip, orig: RoomRect::of(r) };
                }
            }
            Hit::Group(id) => {
                self.track_selection(&mut actions, |sel, _| sel.select_group(&id));
                if let Some(g) = self.doc.group(&id).filter(|_| !self.read_only) {
                    let orig = Point::new(g.x, g.y);
                    let lead = member_lead(&self.doc, &id, orig);
                    self.drag = DragState::DraggingGroup { id, grip, orig, lead };
                }
            }
            Hit::Device(id) => {
                self.track_selection(&mut actions, |sel, doc| sel.select_device(doc, &id));
                if let Some(d) = self.doc.device(&id).filter(|_| !self.read_only) {
                    let orig = Point::new(d.x, d.y);
                    self.drag = DragState::DraggingDevice { id, grip, orig };
                }
            }
            Hit::Room(id) => {
                if let Some(r) = self.doc.room(&id).filter(|_| !self.read_only) {
                    let orig = Point::new(r.x, r.y);
                    self.drag = DragState::DraggingRoom { id, grip, orig };
                }
            }
            Hit::Background => {
                self.drag = if self.tool.is_armed() && !self.read_only {
                    DragState::PlacingDevice { at: world }
                } else {
                    DragState::Panning {
                        last_screen: screen,
                        pixel_width: surface.width,
                        pixel_height: surface.height,
                        moved: false,
                    }
                };
            }
        }

        if !self.drag.is_idle() {
            debug!(state = self.drag.name(), x = world.x, y = world.y, "gesture started");
            actions.push(Action::SetCursor(self.gesture_cursor()));
        }
        actions
    }

    /// Feed the pointer position to the active gesture.
    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        match &mut self.drag {
            DragState::Idle | DragState::PlacingDevice { .. } => Vec::new(),
            DragState::DraggingDevice { id, grip, orig } => {
                let to = drag_point(&self.grid, *orig, grip.delta(screen));
                move_device(&mut self.doc, id, to)
            }
            DragState::DraggingGroup { id, grip, orig, lead } => {
                let to = drag_group(&self.grid, *orig, grip.delta(screen), *lead);
                move_group(&mut self.doc, id, to)
            }
            DragState::DraggingRoom { id, grip, orig } => {
                let to = drag_point(&self.grid, *orig, grip.delta(screen));
                reshape_room(&mut self.doc, id, |r| RoomRect { x: to.x, y: to.y, ..r })
            }
            DragState::ResizingRoom { id, direction, grip, orig } => {
                let rect = resize_room(&self.grid, *orig, *direction, grip.delta(screen));
                reshape_room(&mut self.doc, id, |_| rect)
            }
            DragState::Panning { last_screen, pixel_width, pixel_height, moved } => {
                if screen == *last_screen {
                    return Vec::new();
                }
                self.viewport
                    .pan(screen.x - last_screen.x, screen.y - last_screen.y, *pixel_width, *pixel_height);
                *last_screen = screen;
                *moved = true;
                vec![Action::ViewportChanged, Action::RenderNeeded]
            }
        }
    }

    /// End the active gesture, committing its last position.
    pub fn on_pointer_up(&mut self, screen: Point) -> Vec<Action> {
        let mut actions = self.on_pointer_move(screen);
        let state = mem::take(&mut self.drag);
        let name = state.name();

        match state {
            DragState::Idle => return actions,
            DragState::PlacingDevice { at } => actions.extend(self.place_device_at(at)),
            DragState::DraggingDevice { id, .. } => {
                match group_after_drag(&mut self.doc, &id, self.config.proximity_threshold()) {
                    Ok(GroupingOutcome::Joined(group)) => actions.push(Action::GroupUpdated(group)),
                    Ok(GroupingOutcome::Created(group)) => actions.push(Action::GroupCreated(group)),
                    Ok(GroupingOutcome::Unchanged) => {}
                    Err(e) => log_refused("group after drag", &e),
                }
                self.settle(&mut actions);
            }
            DragState::DraggingGroup { .. } | DragState::DraggingRoom { .. } | DragState::ResizingRoom { .. } => {
                self.settle(&mut actions);
            }
            DragState::Panning { moved, .. } => {
                if !moved {
                    self.track_selection(&mut actions, |sel, _| sel.select_none());
                }
            }
        }

        debug!(state = name, "gesture ended");
        actions.push(Action::SetCursor(self.idle_cursor().to_owned()));
        actions
    }

    /// Keyboard shortcuts: delete, escape and rotate.
    pub fn on_key_down(&mut self, key: &str) -> Vec<Action> {
        match key {
            "Delete" | "Backspace" => self.delete_selection(),
            "Escape" => {
                let mut actions = self.disarm_tool();
                self.track_selection(&mut actions, |sel, _| sel.select_none());
                actions
            }
            "r" | "R" => match self.selection.device().cloned() {
                Some(id) => self.rotate_device(&id),
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    // --- Placement ---

    /// Place a device of the armed kind at `world`, snapped and clamped.
    ///
    /// Disarms the tool. A no-op when nothing is armed.
    pub fn place_device_at(&mut self, world: Point) -> Vec<Action> {
        if !self.can_edit("place device") {
            return Vec::new();
        }
        let Tool::Armed { kind, mount } = self.tool else {
            debug!("no device kind armed; placement ignored");
            return Vec::new();
        };
        let device = Device::new(kind, self.grid.snap_and_clamp(world.x), self.grid.snap_and_clamp(world.y), mount);
        let (x, y) = (device.x, device.y);
        match self.doc.insert_device(device) {
            Ok(id) => {
                info!(device = %id, ?kind, x, y, "device placed");
                self.tool = Tool::Unarmed;
                self.finish(vec![Action::DeviceCreated(id)])
            }
            Err(e) => {
                log_refused("place device", &e);
                Vec::new()
            }
        }
    }

    // --- Selection ---

    /// Select a device, or its group when it belongs to one.
    pub fn select_device(&mut self, id: &DeviceId) -> Vec<Action> {
        let mut actions = Vec::new();
        self.track_selection(&mut actions, |sel, doc| sel.select_device(doc, id));
        actions
    }

    pub fn select_group(&mut self, id: &GroupId) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.doc.group(id).is_some() {
            self.track_selection(&mut actions, |sel, _| sel.select_group(id));
        }
        actions
    }

    pub fn select_room(&mut self, id: &RoomId) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.doc.room(id).is_some() {
            self.track_selection(&mut actions, |sel, _| sel.select_room(id));
        }
        actions
    }

    pub fn select_none(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.track_selection(&mut actions, |sel, _| sel.select_none());
        actions
    }

    // --- Devices ---

    pub fn rotate_device(&mut self, id: &DeviceId) -> Vec<Action> {
        match self.edit("rotate device", |doc| doc.rotate_device(id)) {
            Some(_) => self.finish(vec![Action::DeviceUpdated(id.clone())]),
            None => Vec::new(),
        }
    }

    pub fn set_device_mount(&mut self, id: &DeviceId, mount: MountPosition) -> Vec<Action> {
        match self.edit("set device mount", |doc| doc.set_device_mount(id, mount)) {
            Some(()) => self.finish(vec![Action::DeviceUpdated(id.clone())]),
            None => Vec::new(),
        }
    }

    pub fn set_device_notes(&mut self, id: &DeviceId, notes: &str) -> Vec<Action> {
        match self.edit("set device notes", |doc| doc.set_device_notes(id, notes)) {
            Some(()) => self.finish(vec![Action::DeviceUpdated(id.clone())]),
            None => Vec::new(),
        }
    }

    /// Delete a device; a group it leaves with a single member is dissolved.
    pub fn delete_device(&mut self, id: &DeviceId) -> Vec<Action> {
        let group = self.doc.device(id).and_then(|d| d.group_id.clone());
        if self.edit("delete device", |doc| doc.delete_device(id)).is_none() {
            return Vec::new();
        }
        let mut actions = vec![Action::DeviceDeleted(id.clone())];
        if let Some(group) = group {
            actions.push(self.group_change(group));
        }
        self.finish(actions)
    }

    // --- Groups ---

    /// Group the given devices explicitly.
    pub fn create_group(&mut self, ids: &[DeviceId]) -> Vec<Action> {
        match self.edit("create group", |doc| doc.create_group(ids)) {
            Some(group) => self.finish(vec![Action::GroupCreated(group)]),
            None => Vec::new(),
        }
    }

    pub fn add_device_to_group(&mut self, device: &DeviceId, group: &GroupId) -> Vec<Action> {
        match self.edit("add device to group", |doc| doc.add_device_to_group(device, group)) {
            Some(()) => self.finish(vec![Action::DeviceUpdated(device.clone()), Action::GroupUpdated(group.clone())]),
            None => Vec::new(),
        }
    }

    /// Take a device out of its group, dissolving the group below two members.
    pub fn remove_device_from_group(&mut self, device: &DeviceId, group: &GroupId) -> Vec<Action> {
        match self.edit("remove device from group", |doc| doc.remove_device_from_group(device, group)) {
            Some(dissolved) => {
                let change =
                    if dissolved { Action::GroupDeleted(group.clone()) } else { Action::GroupUpdated(group.clone()) };
                self.finish(vec![Action::DeviceUpdated(device.clone()), change])
            }
            None => Vec::new(),
        }
    }

    pub fn set_group_mount(&mut self, id: &GroupId, mount: MountPosition) -> Vec<Action> {
        match self.edit("set group mount", |doc| doc.set_group_mount(id, mount)) {
            Some(()) => self.finish(vec![Action::GroupUpdated(id.clone())]),
            None => Vec::new(),
        }
    }

    pub fn set_group_notes(&mut self, id: &GroupId, notes: &str) -> Vec<Action> {
        match self.edit("set group notes", |doc| doc.set_group_notes(id, notes)) {
            Some(()) => self.finish(vec![Action::GroupUpdated(id.clone())]),
            None => Vec::new(),
        }
    }

    /// Dissolve a group, keeping its devices.
    pub fn ungroup(&mut self, id: &GroupId) -> Vec<Action> {
        let members: Vec<DeviceId> = self.doc.members(id).map(|d| d.id.clone()).collect();
        if self.edit("ungroup", |doc| doc.ungroup(id)).is_none() {
            return Vec::new();
        }
        let mut actions = vec![Action::GroupDeleted(id.clone())];
        actions.extend(members.into_iter().map(Action::DeviceUpdated));
        self.finish(actions)
    }

    /// Delete a group together with its member devices.
    pub fn delete_group(&mut self, id: &GroupId) -> Vec<Action> {
        let Some(removed) = self.edit("delete group", |doc| doc.delete_group(id)) else {
            return Vec::new();
        };
        let mut actions = vec![Action::GroupDeleted(id.clone())];
        actions.extend(removed.into_iter().map(|d| Action::DeviceDeleted(d.id)));
        self.finish(actions)
    }

    // --- Rooms ---

    /// Add a room with the default geometry and select it.
    pub fn add_room(&mut self, name: &str, color: Option<String>) -> Vec<Action> {
        if !self.can_edit("add room") {
            return Vec::new();
        }
        let id = self.doc.add_room(name, color);
        info!(room = %id, name, "room added");
        let mut actions = vec![Action::RoomCreated(id.clone())];
        self.track_selection(&mut actions, |sel, _| sel.select_room(&id));
        self.finish(actions)
    }

    pub fn update_room(&mut self, id: &RoomId, patch: RoomPatch) -> Vec<Action> {
        match self.edit("update room", |doc| doc.update_room(id, patch)) {
            Some(()) => self.finish(vec![Action::RoomUpdated(id.clone())]),
            None => Vec::new(),
        }
    }

    pub fn delete_room(&mut self, id: &RoomId) -> Vec<Action> {
        match self.edit("delete room", |doc| doc.delete_room(id)) {
            Some(_) => self.finish(vec![Action::RoomDeleted(id.clone())]),
            None => Vec::new(),
        }
    }

    /// Delete whatever is selected.
    pub fn delete_selection(&mut self) -> Vec<Action> {
        match self.selection.current().clone() {
            Selected::None => Vec::new(),
            Selected::Device(id) => self.delete_device(&id),
            Selected::Group(id) => self.delete_group(&id),
            Selected::Room(id) => self.delete_room(&id),
        }
    }

    // --- Documents ---

    /// Serialize the document for download.
    ///
    /// # Errors
    ///
    /// Serialization failure, which only non-finite coordinates can cause.
    pub fn export(&self) -> Result<ExportedFile, DocumentError> {
        let contents = export_json(&self.doc)?;
        Ok(ExportedFile { file_name: EXPORT_FILE_NAME.to_owned(), contents })
    }

    /// Replace the document with one parsed from `text`.
    ///
    /// Invalid input is logged and the current document is kept.
    pub fn import(&mut self, text: &str) -> Vec<Action> {
        if !self.can_edit("import") {
            return Vec::new();
        }
        match import_json(text) {
            Ok(doc) => {
                info!(devices = doc.devices().len(), rooms = doc.rooms().len(), "document imported");
                self.replace_document(doc)
            }
            Err(e) => {
                warn!(error = %e, "import rejected; keeping current document");
                Vec::new()
            }
        }
    }

    /// Replace the document with the persisted state in `store`.
    pub fn load_from(&mut self, store: &dyn KeyValueStore) -> Vec<Action> {
        if !self.drag.is_idle() {
            debug!(state = self.drag.name(), "load during active gesture ignored");
            return Vec::new();
        }
        let doc = load_document(store);
        info!(devices = doc.devices().len(), rooms = doc.rooms().len(), "persisted state loaded");
        self.replace_document(doc)
    }

    /// Persist the document into `store`.
    ///
    /// # Errors
    ///
    /// The store's write failure.
    pub fn save_to(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        save_document(store, &self.doc)
    }

    // --- Viewport ---

    /// Hand the camera back to auto-fit and fit to the content now.
    pub fn center_view(&mut self) -> Vec<Action> {
        self.extent = self.content_extent();
        self.viewport.center(self.extent);
        info!(view_box = %self.viewport.view_box(), "view centered");
        vec![Action::ViewportChanged, Action::RenderNeeded]
    }

    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.viewport.zoom(self.config.zoom_step);
        vec![Action::ViewportChanged, Action::RenderNeeded]
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.viewport.zoom(1.0 / self.config.zoom_step);
        vec![Action::ViewportChanged, Action::RenderNeeded]
    }

    /// Zoom to `percent` of the fitted size.
    pub fn zoom_to(&mut self, percent: f64) -> Vec<Action> {
        self.viewport.zoom_to(percent);
        vec![Action::ViewportChanged, Action::RenderNeeded]
    }

    // --- Queries ---

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Distinct wall segments of the current rooms.
    #[must_use]
    pub fn walls(&self) -> Vec<Wall> {
        derive_walls(self.doc.rooms())
    }

    // --- Internals ---

    fn capture(&self) -> Option<(SurfaceRect, Transform)> {
        let surface = self.surface?;
        Transform::capture(surface, &self.viewport).map(|t| (surface, t))
    }

    fn can_edit(&self, op: &'static str) -> bool {
        if self.read_only {
            debug!(op, "read-only; ignored");
            return false;
        }
        if !self.drag.is_idle() {
            debug!(op, state = self.drag.name(), "gesture in progress; ignored");
            return false;
        }
        true
    }

    /// Run a document operation if editing is allowed, logging refusals.
    fn edit<T>(&mut self, op: &'static str, f: impl FnOnce(&mut Document) -> Result<T, DocError>) -> Option<T> {
        if !self.can_edit(op) {
            return None;
        }
        match f(&mut self.doc) {
            Ok(value) => Some(value),
            Err(e) => {
                log_refused(op, &e);
                None
            }
        }
    }

    fn replace_document(&mut self, doc: Document) -> Vec<Action> {
        self.doc = doc;
        self.finish(vec![Action::DocumentReplaced])
    }

    fn finish(&mut self, mut actions: Vec<Action>) -> Vec<Action> {
        self.settle(&mut actions);
        actions
    }

    /// Post-commit bookkeeping: repair the selection, refit the camera if the
    /// content extent moved, and request a render.
    fn settle(&mut self, actions: &mut Vec<Action>) {
        if self.selection.reconcile(&self.doc) {
            actions.push(Action::SelectionChanged);
        }
        let extent = self.content_extent();
        if extent != self.extent {
            self.extent = extent;
            self.viewport.auto_fit(extent);
            actions.push(Action::ViewportChanged);
        }
        actions.push(Action::RenderNeeded);
    }

    fn content_extent(&self) -> BoundingBox {
        compute_bounding_box(self.doc.rooms(), self.doc.devices(), self.config.margin, self.config.default_extent())
    }

    fn track_selection(&mut self, actions: &mut Vec<Action>, change: impl FnOnce(&mut Selection, &Document)) {
        let before = self.selection.clone();
        change(&mut self.selection, &self.doc);
        if self.selection != before {
            actions.push(Action::SelectionChanged);
        }
    }

    fn group_change(&self, group: GroupId) -> Action {
        if self.doc.group(&group).is_some() { Action::GroupUpdated(group) } else { Action::GroupDeleted(group) }
    }

    fn idle_cursor(&self) -> &'static str {
        if self.tool.is_armed() { "crosshair" } else { "grab" }
    }

    fn gesture_cursor(&self) -> String {
        match &self.drag {
            DragState::ResizingRoom { direction, .. } => format!("{}-resize", direction.as_str()),
            DragState::PlacingDevice { .. } => "crosshair".to_owned(),
            DragState::DraggingRoom { .. } => "move".to_owned(),
            _ => "grabbing".to_owned(),
        }
    }
}

fn log_refused(op: &'static str, err: &DocError) {
    debug!(op, error = %err, "operation refused");
}

fn move_device(doc: &mut Document, id: &DeviceId, to: Point) -> Vec<Action> {
    if doc.device(id).is_some_and(|d| Point::new(d.x, d.y) == to) {
        return Vec::new();
    }
    match doc.move_device(id, to.x, to.y) {
        Ok(()) => vec![Action::DeviceUpdated(id.clone()), Action::RenderNeeded],
        Err(e) => {
            log_refused("move device", &e);
            Vec::new()
        }
    }
}

/// Distance from `orig` back to the group's left-most and top-most members.
fn member_lead(doc: &Document, id: &GroupId, orig: Point) -> Point {
    let (min_x, min_y) = doc
        .members(id)
        .fold((orig.x, orig.y), |(x, y), d| (x.min(d.x), y.min(d.y)));
    Point::new(orig.x - min_x, orig.y - min_y)
}

fn move_group(doc: &mut Document, id: &GroupId, to: Point) -> Vec<Action> {
    if doc.group(id).is_some_and(|g| Point::new(g.x, g.y) == to) {
        return Vec::new();
    }
    match doc.move_group(id, to.x, to.y) {
        Ok(()) => vec![Action::GroupUpdated(id.clone()), Action::RenderNeeded],
        Err(e) => {
            log_refused("move group", &e);
            Vec::new()
        }
    }
}

fn reshape_room(doc: &mut Document, id: &RoomId, reshape: impl FnOnce(RoomRect) -> RoomRect) -> Vec<Action> {
    let Some(current) = doc.room(id).map(RoomRect::of) else {
        return Vec::new();
    };
    let next = reshape(current);
    if next == current {
        return Vec::new();
    }
    match doc.update_room(id, next.to_patch()) {
        Ok(()) => vec![Action::RoomUpdated(id.clone()), Action::RenderNeeded],
        Err(e) => {
            log_refused("reshape room", &e);
            Vec::new()
        }
    }
}
