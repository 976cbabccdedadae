//! fretboard-rs: renderer-agnostic guitar chord diagram core.
//!
//! Parses the `"2|3|2|0|x|x"` fingering shorthand into markers, resolves
//! per-string edits, and maps a requested fret window onto the grid a
//! rendering backend draws.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{DiagramConfig, FretboardEngine};
pub use error::{FretboardError, FretboardResult};
