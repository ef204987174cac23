//! Frame-exact timeline resolution for raid mechanic animations.
//!
//! A [`MechanicData`] holds an arena, initial players and enemies, and a sparse list of
//! frame-stamped events. [`resolve`] (or [`TimelineIndex::resolve`] when querying many frames)
//! turns it into a [`Snapshot`] of everything visible at a frame, as a pure function of that
//! frame: scrubbing, undo/redo and parallel export never replay state.
//!
//! This crate does no rendering and no I/O. JSON interchange lives behind the `json` feature.

#![forbid(unsafe_code)]

mod error;
mod geometry;
mod history;
mod model;
mod runtime;
mod validate;
mod version;

#[cfg(feature = "json")]
pub mod json;

pub use error::*;
pub use geometry::*;
pub use history::*;
pub use model::*;
pub use runtime::*;
pub use version::*;




#[cfg(all(test, feature = "json"))]
mod json_tests;
