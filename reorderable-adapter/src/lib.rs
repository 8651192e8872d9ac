//! Adapter utilities for the `reorderable` crate.
//!
//! The `reorderable` crate is synchronous and UI-agnostic. This crate provides the async edge
//! an adapter needs around it:
//!
//! - Collaborator traits for row measurement, list scrolling and haptic feedback
//! - `ensure_measured`, the batched suspend point awaited before a drag starts
//! - A tween for the lift animation
//! - `DragController`, which routes touch and visibility events into the engine
//!
//! This crate is intentionally framework-agnostic (no toolkit bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod collaborators;
mod controller;
mod scheduler;
mod tween;

#[cfg(test)]
mod tests;

pub use collaborators::{Feedback, ListScroller, NoFeedback, RowMeasurer};
pub use controller::{DragController, LiftFrame};
pub use scheduler::{MeasureReport, ensure_measured};
pub use tween::{Easing, Tween};
