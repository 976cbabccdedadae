use crate::error::FretboardResult;
use crate::render::{DiagramFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests catch inconsistent grids before
/// a real backend consumes them.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_cell_count: usize,
    pub last_marked_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &DiagramFrame) -> FretboardResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_cell_count = frame.cells.len();
        self.last_marked_count = frame.marked_cells().count();
        Ok(())
    }
}
