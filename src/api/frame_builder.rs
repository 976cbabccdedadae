use crate::core::{DiagramMetrics, FretWindow, Marker, Tuning, collection};
use crate::error::FretboardResult;
use crate::render::{CellMarker, DiagramFrame, FretColumn, GridCell, GutterLabel};

/// Materializes the marker layer, fret columns and gutter for one draw pass.
///
/// The first column shows each string's open/mute state, an open note taking
/// precedence over a mute. Every other column shows the note held at its fret.
pub fn build_diagram_frame(
    markers: &[Marker],
    window: FretWindow,
    metrics: DiagramMetrics,
    tuning: &Tuning,
) -> FretboardResult<DiagramFrame> {
    let string_count = metrics.string_count;
    let mut cells = Vec::with_capacity(window.column_count() as usize * string_count as usize);

    for row in 0..string_count {
        let string_number = string_count - row;
        for (column, fret_number) in window.columns().enumerate() {
            let marker = if column == 0 {
                first_column_marker(markers, string_number, tuning)
            } else {
                fretted_marker(markers, string_number, fret_number, tuning)
            };
            cells.push(GridCell {
                row,
                column: column as u32,
                string_number,
                fret_number,
                marker,
            });
        }
    }

    let columns = window.columns().map(FretColumn::new).collect();
    let gutter = window
        .columns()
        .enumerate()
        .map(|(column, fret_number)| GutterLabel {
            column: column as u32,
            fret_number,
            text: window
                .shows_gutter_label(fret_number)
                .then(|| fret_number.to_string()),
        })
        .collect();

    let frame = DiagramFrame {
        window,
        metrics,
        columns,
        cells,
        gutter,
    };
    frame.validate()?;
    Ok(frame)
}

fn first_column_marker(markers: &[Marker], string_number: u32, tuning: &Tuning) -> CellMarker {
    if let Some(open) = collection::find_open_string(markers, string_number) {
        return CellMarker::Note {
            pitch: open.pitch(tuning),
            open: true,
        };
    }
    if collection::find_muted_string(markers, string_number).is_some() {
        return CellMarker::Muted;
    }
    CellMarker::Empty
}

fn fretted_marker(
    markers: &[Marker],
    string_number: u32,
    fret_number: u32,
    tuning: &Tuning,
) -> CellMarker {
    match collection::find_fretted_note(markers, string_number, fret_number) {
        Some(note) => CellMarker::Note {
            pitch: note.pitch(tuning),
            open: false,
        },
        None => CellMarker::Empty,
    }
}
