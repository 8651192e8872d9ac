//! A headless drag-to-reorder engine for virtualized lists.
//!
//! For the async edge (awaiting row measurements, driving scroll and haptics, the lift
//! animation), see the `reorderable-adapter` crate.
//!
//! The engine turns a moving touch point into a drop position even though rows are measured
//! lazily as they scroll into view: measured rows are stamped into a pixel → index map, and
//! probes that land in unmeasured gaps are resolved by scanning in the direction of travel.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the item sequence and a stable key per item
//! - the indexes currently visible, and row geometry once measured
//! - the container position and the list scroll offset
//! - drag start / move / end events
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod commit;
mod engine;
mod error;
mod geometry;
mod key;
mod options;
mod resolver;
mod session;
mod spacer;
mod types;


pub use commit::commit_reorder;
pub use engine::ReorderEngine;
pub use error::DragError;
pub use geometry::{GeometryCache, PixelIndexMap};
pub use key::ItemKey;
pub use options::{KeyExtractor, OnReorderedCallback, ReorderOptions};
pub use resolver::{ResolveInput, probe_pixel, resolve_drop_slot};
pub use session::DragSession;
pub use spacer::SpacerController;
pub use types::{
    Container, DropOutcome, Edge, ItemMeasure, LiftedRow, MoveEvent, MoveOutcome, RawMeasure,
    RowFlags, SpacerState,
};
