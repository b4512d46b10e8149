//! Workspace geometry and slot bookkeeping.
//!
//! - `geometry` turns a layout template and container size into pixel
//!   rectangles.
//! - `slots` tracks which of the four fixed workspace slots are taken.

pub mod geometry;
pub mod slots;

pub use geometry::{compute_layout, LayoutEngine, LayoutTemplate, Orientation};
pub use slots::{
    Availability, HalfPair, ParseSizeClassError, SizeClass, SlotAllocator, SlotSet, SLOT_COUNT,
};
