//! Pipe-delimited chord fingering DSL.
//!
//! `"2|3|2|0|x|x"` describes an open D major chord: each segment is a fret
//! number or `x` for a muted string, and the segment position (from 0) gives
//! the string number minus one.
//!
//! ```text
//!         input: 2|3|2|0|x|x
//! string number: 1 2 3 4 5 6
//! ```

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::collection;
use crate::core::{FrettedNote, MUTE_SYMBOL, Marker, Mute};
use crate::error::{FretboardError, FretboardResult};

pub const SEGMENT_SEPARATOR: char = '|';

/// Parses a fingering into markers in input order, without deduplication.
///
/// No upper bound applies to string or fret numbers.
pub fn parse_fingering(text: &str) -> FretboardResult<Vec<Marker>> {
    text.split(SEGMENT_SEPARATOR)
        .enumerate()
        .map(|(index, segment)| parse_segment(index, segment))
        .collect()
}

/// Joins the markers' DSL segments with `|`.
///
/// String numbers are not written: the output is only a faithful encoding when
/// `markers` holds exactly one marker per string from 1 upward, in order.
#[must_use]
pub fn encode_fingering(markers: &[Marker]) -> String {
    let mut out = String::with_capacity(markers.len() * 2);
    for (index, marker) in markers.iter().enumerate() {
        if index > 0 {
            out.push(SEGMENT_SEPARATOR);
        }
        out.push_str(&marker.to_string());
    }
    out
}

fn parse_segment(index: usize, segment: &str) -> FretboardResult<Marker> {
    let invalid = || FretboardError::InvalidFingeringFormat {
        segment: segment.to_owned(),
    };
    let string_number = u32::try_from(index + 1).map_err(|_| invalid())?;

    if segment == MUTE_SYMBOL {
        return Marker::mute(string_number);
    }
    if segment.is_empty() || !segment.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid());
    }
    let fret_number = segment.parse::<u32>().map_err(|_| invalid())?;
    Marker::fretted(string_number, fret_number)
}

/// Ordered marker collection for one chord.
///
/// Serializes as its DSL string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fingering {
    markers: Vec<Marker>,
}

impl Fingering {
    #[must_use]
    pub fn new(markers: Vec<Marker>) -> Self {
        Self { markers }
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[must_use]
    pub fn into_markers(self) -> Vec<Marker> {
        self.markers
    }

    #[must_use]
    pub fn encode(&self) -> String {
        encode_fingering(&self.markers)
    }

    #[must_use]
    pub fn find_open_string(&self, string_number: u32) -> Option<FrettedNote> {
        collection::find_open_string(&self.markers, string_number)
    }

    #[must_use]
    pub fn find_muted_string(&self, string_number: u32) -> Option<Mute> {
        collection::find_muted_string(&self.markers, string_number)
    }

    #[must_use]
    pub fn find_fretted_note(&self, string_number: u32, fret_number: u32) -> Option<FrettedNote> {
        collection::find_fretted_note(&self.markers, string_number, fret_number)
    }

    pub fn replace_on_same_string(&mut self, marker: impl Into<Marker>) -> Option<Marker> {
        collection::replace_on_same_string(&mut self.markers, marker.into())
    }
}

impl Deref for Fingering {
    type Target = [Marker];

    fn deref(&self) -> &[Marker] {
        &self.markers
    }
}

impl From<Vec<Marker>> for Fingering {
    fn from(markers: Vec<Marker>) -> Self {
        Self::new(markers)
    }
}

impl FromStr for Fingering {
    type Err = FretboardError;

    fn from_str(s: &str) -> FretboardResult<Self> {
        parse_fingering(s).map(Self::new)
    }
}

impl TryFrom<String> for Fingering {
    type Error = FretboardError;

    fn try_from(value: String) -> FretboardResult<Self> {
        value.parse()
    }
}

impl From<Fingering> for String {
    fn from(fingering: Fingering) -> Self {
        fingering.encode()
    }
}

impl fmt::Display for Fingering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_segments() {
        for (input, bad) in [
            ("2|3|-1", "-1"),
            ("2||0", ""),
            ("X|0", "X"),
            ("+3|0", "+3"),
            ("2| 3", " 3"),
            ("a", "a"),
            ("99999999999", "99999999999"),
        ] {
            assert_eq!(
                parse_fingering(input),
                Err(FretboardError::InvalidFingeringFormat {
                    segment: bad.to_owned()
                }),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn empty_input_is_a_single_empty_segment() {
        assert!(matches!(
            parse_fingering(""),
            Err(FretboardError::InvalidFingeringFormat { segment }) if segment.is_empty()
        ));
    }

    #[test]
    fn encode_of_empty_list_is_empty() {
        assert_eq!(encode_fingering(&[]), "");
    }

    #[test]
    fn fingering_serializes_as_dsl_string() {
        let fingering: Fingering = "x|0|2|2|1|0".parse().expect("fingering");
        let json = serde_json::to_string(&fingering).expect("serialize");
        assert_eq!(json, r#""x|0|2|2|1|0""#);
        let back: Fingering = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, fingering);
        assert!(serde_json::from_str::<Fingering>(r#""2|y""#).is_err());
    }
}
