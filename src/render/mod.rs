mod frame;
mod null_renderer;
mod primitives;

pub use frame::DiagramFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{CellMarker, ColumnBoundary, FretColumn, GridCell, GutterLabel};

use crate::error::FretboardResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `DiagramFrame` so drawing code stays
/// isolated from fingering parsing and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &DiagramFrame) -> FretboardResult<()>;
}
