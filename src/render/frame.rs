use serde::{Deserialize, Serialize};

use crate::core::{DiagramMetrics, FretWindow};
use crate::error::{FretboardError, FretboardResult};
use crate::render::{CellMarker, FretColumn, GridCell, GutterLabel};

/// Backend-agnostic scene for one chord diagram draw pass.
///
/// Cells are row-major: row 0 is the highest string number, the last row is
/// string 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramFrame {
    pub window: FretWindow,
    pub metrics: DiagramMetrics,
    pub columns: Vec<FretColumn>,
    pub cells: Vec<GridCell>,
    pub gutter: Vec<GutterLabel>,
}

impl DiagramFrame {
    #[must_use]
    pub fn row_count(&self) -> u32 {
        self.metrics.string_count
    }

    #[must_use]
    pub fn column_count(&self) -> u32 {
        self.metrics.column_count
    }

    #[must_use]
    pub fn cell(&self, string_number: u32, fret_number: u32) -> Option<&GridCell> {
        self.cells
            .iter()
            .find(|cell| cell.string_number == string_number && cell.fret_number == fret_number)
    }

    /// Cells that carry a note or mute.
    pub fn marked_cells(&self) -> impl Iterator<Item = &GridCell> {
        self.cells
            .iter()
            .filter(|cell| cell.marker != CellMarker::Empty)
    }

    pub fn validate(&self) -> FretboardResult<()> {
        let columns = self.window.column_count();
        if self.metrics.column_count != columns || self.columns.len() != columns as usize {
            return Err(FretboardError::InvalidData(format!(
                "frame column count does not match window ({columns} columns)"
            )));
        }
        if self.gutter.len() != columns as usize {
            return Err(FretboardError::InvalidData(
                "gutter must carry one label slot per column".to_owned(),
            ));
        }

        let expected_cells = u64::from(columns) * u64::from(self.metrics.string_count);
        if self.cells.len() as u64 != expected_cells {
            return Err(FretboardError::InvalidData(format!(
                "frame must carry {expected_cells} cells, found {}",
                self.cells.len()
            )));
        }

        for cell in &self.cells {
            cell.validate()?;
            if cell.string_number > self.metrics.string_count
                || self.window.column_of(cell.fret_number) != Some(cell.column as usize)
            {
                return Err(FretboardError::InvalidData(format!(
                    "cell (string {}, fret {}) lies outside the frame grid",
                    cell.string_number, cell.fret_number
                )));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marked_cells().next().is_none()
    }
}
