//! Floor-plan editing engine for placing smart-home devices on a room layout.
//!
//! The crate owns everything between raw pointer input and the persisted
//! document: snapping to the world grid, the pan/zoom viewport, hit-testing,
//! the drag state machine, proximity grouping of stacked devices, and JSON
//! export/import. Host UIs feed pointer and keyboard events into
//! [`engine::Engine`] and render from the resulting [`engine::Action`]s and
//! read-only queries. No rendering happens here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine that wires every component together |
//! | [`doc`] | Rooms, devices, groups and the document that owns them |
//! | [`selection`] | Single-entity selection and the details-panel flag |
//! | [`hit`] | Pointer-down classification and resize handles |
//! | [`drag`] | Placement tool, drag state machine and update rules |
//! | [`grouping`] | Merging devices dropped next to each other |
//! | [`grid`] | Grid snapping and margin clamping |
//! | [`transform`] | Screen/world coordinate conversion |
//! | [`viewport`] | Visible world rectangle, auto-fit, pan and zoom |
//! | [`walls`] | Wall segments derived from room rectangles |
//! | [`io`] | Document export and import |
//! | [`store`] | Persisted key/value layout |
//! | [`config`] | Editor configuration from the environment |
//! | [`consts`] | Shared numeric defaults |

pub mod config;
pub mod consts;
pub mod doc;
pub mod drag;
pub mod engine;
pub mod grid;
pub mod grouping;
pub mod hit;
pub mod io;
pub mod selection;
pub mod store;
pub mod transform;
pub mod viewport;
pub mod walls;
