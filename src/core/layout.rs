use serde::{Deserialize, Serialize};

use crate::core::FretWindow;
use crate::error::{FretboardError, FretboardResult};

const BASE_MARKER_CONTAINER_HEIGHT: f64 = 16.0;
const BASE_FRET_WIDTH: f64 = 24.0;
const BASE_STRING_LEFT_PADDING: f64 = 10.0;
const BASE_MARKER_SIZE: f64 = 14.0;
const BASE_MUTED_MARKER_RIGHT_PADDING: f64 = 4.0;
const BASE_NUT_COLUMN_WIDTH: f64 = 16.0;
const BASE_NUT_WIDTH: f64 = 8.0;
const BASE_FRETWIRE_WIDTH: f64 = 3.0;
const BASE_STRING_THICKNESS: f64 = 5.0;
const MIN_STRING_THICKNESS: f64 = 3.0;
const BASE_GUTTER_HEIGHT: f64 = 16.0;
const BASE_GUTTER_PADDING_RIGHT: f64 = 4.0;

pub const DEFAULT_SCALE: f64 = 1.5;

/// Scaled sizes a renderer needs to lay out one chord diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramMetrics {
    pub scale: f64,
    pub column_count: u32,
    pub string_count: u32,
    pub fret_width_px: f64,
    pub marker_container_height_px: f64,
    pub marker_size_px: f64,
    pub muted_marker_right_padding_px: f64,
    pub string_left_padding_px: f64,
    pub nut_column_width_px: f64,
    pub nut_width_px: f64,
    pub fretwire_width_px: f64,
    pub gutter_height_px: f64,
    pub gutter_padding_right_px: f64,
}

impl DiagramMetrics {
    pub fn new(window: FretWindow, string_count: u32, scale: f64) -> FretboardResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(FretboardError::InvalidData(
                "diagram scale must be finite and > 0".to_owned(),
            ));
        }
        if string_count == 0 {
            return Err(FretboardError::InvalidData(
                "diagram must show at least one string".to_owned(),
            ));
        }

        Ok(Self {
            scale,
            column_count: window.column_count(),
            string_count,
            fret_width_px: BASE_FRET_WIDTH * scale,
            marker_container_height_px: BASE_MARKER_CONTAINER_HEIGHT * scale,
            marker_size_px: BASE_MARKER_SIZE * scale,
            muted_marker_right_padding_px: BASE_MUTED_MARKER_RIGHT_PADDING * scale,
            string_left_padding_px: BASE_STRING_LEFT_PADDING * scale,
            nut_column_width_px: BASE_NUT_COLUMN_WIDTH * scale,
            nut_width_px: BASE_NUT_WIDTH * scale,
            fretwire_width_px: BASE_FRETWIRE_WIDTH * scale,
            gutter_height_px: BASE_GUTTER_HEIGHT * scale,
            gutter_padding_right_px: BASE_GUTTER_PADDING_RIGHT * scale,
        })
    }

    #[must_use]
    pub fn board_width_px(self) -> f64 {
        self.fret_width_px * f64::from(self.column_count)
    }

    /// One marker row per string.
    #[must_use]
    pub fn board_height_px(self) -> f64 {
        self.marker_container_height_px * f64::from(self.string_count)
    }

    #[must_use]
    pub fn total_height_px(self) -> f64 {
        self.board_height_px() + self.gutter_height_px
    }

    /// Drawn thickness of the string in row `row` (row 0 is the top row).
    ///
    /// Thins by one base unit per row and never drops below 3px.
    #[must_use]
    pub fn string_thickness_px(self, row: u32) -> f64 {
        ((BASE_STRING_THICKNESS - f64::from(row)) * self.scale)
            .trunc()
            .max(MIN_STRING_THICKNESS)
    }

    /// Left edge of grid column `column`.
    #[must_use]
    pub fn column_left_px(self, column: u32) -> f64 {
        self.fret_width_px * f64::from(column)
    }

    /// Vertical center of marker row `row`.
    #[must_use]
    pub fn row_center_px(self, row: u32) -> f64 {
        self.marker_container_height_px * (f64::from(row) + 0.5)
    }
}
