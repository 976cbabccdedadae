use crate::core::{FrettedNote, Marker, Mute};

/// First open (fret 0) note on `string_number`.
#[must_use]
pub fn find_open_string(markers: &[Marker], string_number: u32) -> Option<FrettedNote> {
    find_fretted_note(markers, string_number, 0)
}

/// First mute on `string_number`.
#[must_use]
pub fn find_muted_string(markers: &[Marker], string_number: u32) -> Option<Mute> {
    markers
        .iter()
        .filter_map(|marker| marker.as_mute())
        .find(|mute| mute.string_number() == string_number)
}

/// First note held at exactly `fret_number` on `string_number`.
#[must_use]
pub fn find_fretted_note(
    markers: &[Marker],
    string_number: u32,
    fret_number: u32,
) -> Option<FrettedNote> {
    markers
        .iter()
        .filter_map(|marker| marker.as_fretted_note())
        .find(|note| note.string_number() == string_number && note.fret_number() == fret_number)
}

/// Overwrites the first marker on the same string as `marker`, or appends it.
///
/// Matching ignores the variant, so a mute can replace a note and vice versa.
/// Positions of every other marker are preserved. Returns the replaced marker.
pub fn replace_on_same_string(markers: &mut Vec<Marker>, marker: Marker) -> Option<Marker> {
    let string_number = marker.string_number();
    match markers
        .iter()
        .position(|existing| existing.string_number() == string_number)
    {
        Some(index) => Some(std::mem::replace(&mut markers[index], marker)),
        None => {
            markers.push(marker);
            None
        }
    }
}
