use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{DiagramMetrics, Fingering, FretWindow, Marker, Tuning};
use crate::error::{FretboardError, FretboardResult};
use crate::render::{DiagramFrame, Renderer};

use super::config::validate_window_request;
use super::{DiagramConfig, build_diagram_frame};

/// Result of a press on the diagram grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressEvent {
    pub string_number: u32,
    /// Fret of the pressed column as displayed.
    pub fret_number: u32,
    /// Marker written into the fingering.
    pub committed: Marker,
    /// Marker it replaced on the same string, if any.
    pub replaced: Option<Marker>,
}

/// Main orchestration facade consumed by host applications.
///
/// `FretboardEngine` owns the chord's fingering, the displayed fret window and
/// the renderer, and turns grid presses into single-string edits.
pub struct FretboardEngine<R: Renderer> {
    renderer: R,
    window: FretWindow,
    metrics: DiagramMetrics,
    tuning: Tuning,
    fingering: Fingering,
}

impl<R: Renderer> FretboardEngine<R> {
    pub fn new(renderer: R, config: DiagramConfig) -> FretboardResult<Self> {
        let window = config.validate()?;
        let metrics = DiagramMetrics::new(window, config.string_count, config.scale)?;
        debug!(
            from_fret = window.from_fret(),
            to_fret = window.to_fret(),
            display_from = window.display_from(),
            string_count = config.string_count,
            "create fretboard engine"
        );

        Ok(Self {
            renderer,
            window,
            metrics,
            tuning: config.tuning,
            fingering: Fingering::default(),
        })
    }

    #[must_use]
    pub fn fingering(&self) -> &Fingering {
        &self.fingering
    }

    #[must_use]
    pub fn window(&self) -> FretWindow {
        self.window
    }

    #[must_use]
    pub fn metrics(&self) -> DiagramMetrics {
        self.metrics
    }

    #[must_use]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    #[must_use]
    pub fn string_count(&self) -> u32 {
        self.metrics.string_count
    }

    /// Replaces the whole fingering.
    pub fn set_fingering(&mut self, fingering: impl Into<Fingering>) {
        let fingering = fingering.into();
        debug!(
            marker_count = fingering.len(),
            fingering = %fingering,
            "set fingering"
        );
        self.fingering = fingering;
    }

    /// Parses `text` as a fingering and installs it.
    ///
    /// The current fingering is kept when parsing fails.
    pub fn set_fingering_str(&mut self, text: &str) -> FretboardResult<()> {
        match text.parse::<Fingering>() {
            Ok(fingering) => {
                self.set_fingering(fingering);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "rejecting fingering");
                Err(err)
            }
        }
    }

    /// Changes the displayed window; the fingering is untouched.
    pub fn set_window(&mut self, from_fret: i64, to_fret: i64) -> FretboardResult<()> {
        let window = validate_window_request(from_fret, to_fret).inspect_err(|err| {
            warn!(error = %err, "rejecting fret window");
        })?;
        self.metrics = DiagramMetrics::new(window, self.metrics.string_count, self.metrics.scale)?;
        self.window = window;
        debug!(
            from_fret,
            to_fret,
            column_count = window.column_count(),
            "set fret window"
        );
        Ok(())
    }

    /// Commits a note at the pressed grid coordinate.
    ///
    /// The pressed fret is committed as-is, including in the first column.
    pub fn press(&mut self, string_number: u32, fret_number: u32) -> FretboardResult<PressEvent> {
        self.check_string(string_number)?;
        if self.window.column_of(fret_number).is_none() {
            warn!(fret_number, "press outside fret window");
            return Err(FretboardError::InvalidData(format!(
                "fret {fret_number} is outside the displayed window {}..{}",
                self.window.display_from(),
                self.window.to_fret()
            )));
        }

        let committed = Marker::fretted(string_number, fret_number)?;
        let replaced = self.fingering.replace_on_same_string(committed);
        trace!(
            string_number,
            fret_number,
            fingering = %self.fingering,
            "press fret"
        );

        Ok(PressEvent {
            string_number,
            fret_number,
            committed,
            replaced,
        })
    }

    /// Marks `string_number` as not played. Returns the replaced marker.
    pub fn mute(&mut self, string_number: u32) -> FretboardResult<Option<Marker>> {
        self.check_string(string_number)?;
        let replaced = self
            .fingering
            .replace_on_same_string(Marker::mute(string_number)?);
        trace!(string_number, fingering = %self.fingering, "mute string");
        Ok(replaced)
    }

    pub fn build_frame(&self) -> FretboardResult<DiagramFrame> {
        build_diagram_frame(&self.fingering, self.window, self.metrics, &self.tuning)
    }

    pub fn render(&mut self) -> FretboardResult<()> {
        let frame = self.build_frame()?;
        trace!(
            cells = frame.cells.len(),
            marked = frame.marked_cells().count(),
            "render diagram"
        );
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn check_string(&self, string_number: u32) -> FretboardResult<()> {
        if string_number == 0 || string_number > self.metrics.string_count {
            warn!(string_number, "press outside string range");
            return Err(FretboardError::InvalidData(format!(
                "string {string_number} is outside 1..={}",
                self.metrics.string_count
            )));
        }
        Ok(())
    }
}
