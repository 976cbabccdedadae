use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{FretboardError, FretboardResult};

/// Normalized fret range actually laid out for a requested `from..to` window.
///
/// When the window starts above the nut, one lead-in column is prepended so
/// the preceding fretwire is drawn; a window starting at the nut needs none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFretWindow", into = "RawFretWindow")]
pub struct FretWindow {
    from_fret: u32,
    to_fret: u32,
    display_from: u32,
}

/// Validates `0 <= from_fret < to_fret` and derives the displayed range.
pub fn normalize_window(from_fret: i64, to_fret: i64) -> FretboardResult<FretWindow> {
    let invalid = || FretboardError::InvalidFretRange { from_fret, to_fret };
    if from_fret < 0 || from_fret >= to_fret {
        return Err(invalid());
    }
    let from = u32::try_from(from_fret).map_err(|_| invalid())?;
    let to = u32::try_from(to_fret).map_err(|_| invalid())?;

    Ok(FretWindow {
        from_fret: from,
        to_fret: to,
        display_from: from.saturating_sub(1),
    })
}

impl FretWindow {
    pub fn new(from_fret: i64, to_fret: i64) -> FretboardResult<Self> {
        normalize_window(from_fret, to_fret)
    }

    #[must_use]
    pub fn from_fret(self) -> u32 {
        self.from_fret
    }

    #[must_use]
    pub fn to_fret(self) -> u32 {
        self.to_fret
    }

    /// First fret column rendered.
    #[must_use]
    pub fn display_from(self) -> u32 {
        self.display_from
    }

    /// Number of grid columns.
    #[must_use]
    pub fn column_count(self) -> u32 {
        self.to_fret - self.display_from
    }

    #[must_use]
    pub fn has_lead_in(self) -> bool {
        self.display_from != self.from_fret
    }

    /// Fret numbers of every displayed column, left to right.
    #[must_use]
    pub fn columns(self) -> Range<u32> {
        self.display_from..self.to_fret
    }

    #[must_use]
    pub fn column_of(self, fret_number: u32) -> Option<usize> {
        self.columns()
            .contains(&fret_number)
            .then(|| (fret_number - self.display_from) as usize)
    }

    #[must_use]
    pub fn fret_at(self, column: usize) -> Option<u32> {
        let column = u32::try_from(column).ok()?;
        (column < self.column_count()).then(|| self.display_from + column)
    }

    /// Whether the gutter under `fret_number` carries a label.
    ///
    /// The nut is always labelled; the lead-in column never is.
    #[must_use]
    pub fn shows_gutter_label(self, fret_number: u32) -> bool {
        self.columns().contains(&fret_number)
            && (fret_number == 0 || fret_number != self.display_from)
    }

    /// Per-column label, `None` where the label is suppressed.
    #[must_use]
    pub fn gutter_labels(self) -> Vec<Option<u32>> {
        self.columns()
            .map(|fret| self.shows_gutter_label(fret).then_some(fret))
            .collect()
    }
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct RawFretWindow {
    from_fret: i64,
    to_fret: i64,
}

impl TryFrom<RawFretWindow> for FretWindow {
    type Error = FretboardError;

    fn try_from(raw: RawFretWindow) -> FretboardResult<Self> {
        normalize_window(raw.from_fret, raw.to_fret)
    }
}

impl From<FretWindow> for RawFretWindow {
    fn from(window: FretWindow) -> Self {
        Self {
            from_fret: i64::from(window.from_fret),
            to_fret: i64::from(window.to_fret),
        }
    }
}
