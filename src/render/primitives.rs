use serde::{Deserialize, Serialize};

use crate::core::PitchClass;
use crate::error::{FretboardError, FretboardResult};

/// What a renderer draws in one (string, fret) grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellMarker {
    Empty,
    Note { pitch: PitchClass, open: bool },
    Muted,
}

/// One grid cell of the marker layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub row: u32,
    pub column: u32,
    pub string_number: u32,
    pub fret_number: u32,
    pub marker: CellMarker,
}

impl GridCell {
    pub fn validate(self) -> FretboardResult<()> {
        if self.string_number == 0 {
            return Err(FretboardError::InvalidStringNumber {
                string_number: self.string_number,
            });
        }
        if let CellMarker::Note { open: true, .. } = self.marker {
            if self.column != 0 {
                return Err(FretboardError::InvalidData(format!(
                    "open string marker outside the first column (column {})",
                    self.column
                )));
            }
        }
        Ok(())
    }
}

/// Boundary drawn on the right of a fret column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnBoundary {
    Nut,
    Fretwire,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FretColumn {
    pub fret_number: u32,
    pub boundary: ColumnBoundary,
}

impl FretColumn {
    #[must_use]
    pub fn new(fret_number: u32) -> Self {
        let boundary = if fret_number == 0 {
            ColumnBoundary::Nut
        } else {
            ColumnBoundary::Fretwire
        };
        Self {
            fret_number,
            boundary,
        }
    }
}

/// Fret-number label under one column; `text` is `None` when suppressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GutterLabel {
    pub column: u32,
    pub fret_number: u32,
    pub text: Option<String>,
}
