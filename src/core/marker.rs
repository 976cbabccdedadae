use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{PitchClass, Tuning};
use crate::error::{FretboardError, FretboardResult};

/// Segment used for a muted string in the fingering DSL.
pub const MUTE_SYMBOL: &str = "x";

/// A note held at `fret_number` on `string_number`; fret 0 is the open string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFrettedNote")]
pub struct FrettedNote {
    string_number: u32,
    fret_number: u32,
}

impl FrettedNote {
    pub fn new(string_number: u32, fret_number: u32) -> FretboardResult<Self> {
        validate_string_number(string_number)?;
        Ok(Self {
            string_number,
            fret_number,
        })
    }

    pub fn open(string_number: u32) -> FretboardResult<Self> {
        Self::new(string_number, 0)
    }

    #[must_use]
    pub fn string_number(self) -> u32 {
        self.string_number
    }

    #[must_use]
    pub fn fret_number(self) -> u32 {
        self.fret_number
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.fret_number == 0
    }

    /// Sounding pitch class under `tuning`.
    #[must_use]
    pub fn pitch(self, tuning: &Tuning) -> PitchClass {
        tuning
            .open_pitch(self.string_number)
            .transpose(self.fret_number)
    }
}

/// A string that is not played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMute")]
pub struct Mute {
    string_number: u32,
}

impl Mute {
    pub fn new(string_number: u32) -> FretboardResult<Self> {
        validate_string_number(string_number)?;
        Ok(Self { string_number })
    }

    #[must_use]
    pub fn string_number(self) -> u32 {
        self.string_number
    }
}

/// A marking on the fretboard: a fretted (or open) note, or a muted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Marker {
    FrettedNote(FrettedNote),
    Mute(Mute),
}

impl Marker {
    pub fn fretted(string_number: u32, fret_number: u32) -> FretboardResult<Self> {
        FrettedNote::new(string_number, fret_number).map(Self::FrettedNote)
    }

    pub fn mute(string_number: u32) -> FretboardResult<Self> {
        Mute::new(string_number).map(Self::Mute)
    }

    #[must_use]
    pub fn string_number(self) -> u32 {
        match self {
            Marker::FrettedNote(note) => note.string_number(),
            Marker::Mute(mute) => mute.string_number(),
        }
    }

    #[must_use]
    pub fn as_fretted_note(self) -> Option<FrettedNote> {
        match self {
            Marker::FrettedNote(note) => Some(note),
            Marker::Mute(_) => None,
        }
    }

    #[must_use]
    pub fn as_mute(self) -> Option<Mute> {
        match self {
            Marker::FrettedNote(_) => None,
            Marker::Mute(mute) => Some(mute),
        }
    }

    /// Pitch class for fretted notes; muted strings have none.
    #[must_use]
    pub fn pitch(self, tuning: &Tuning) -> Option<PitchClass> {
        self.as_fretted_note().map(|note| note.pitch(tuning))
    }
}

impl From<FrettedNote> for Marker {
    fn from(note: FrettedNote) -> Self {
        Marker::FrettedNote(note)
    }
}

impl From<Mute> for Marker {
    fn from(mute: Mute) -> Self {
        Marker::Mute(mute)
    }
}

/// Formats the marker as its fingering DSL segment.
impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::FrettedNote(note) => write!(f, "{}", note.fret_number()),
            Marker::Mute(_) => f.write_str(MUTE_SYMBOL),
        }
    }
}

fn validate_string_number(string_number: u32) -> FretboardResult<()> {
    if string_number == 0 {
        return Err(FretboardError::InvalidStringNumber { string_number });
    }
    Ok(())
}

#[derive(Deserialize)]
struct RawFrettedNote {
    string_number: u32,
    fret_number: u32,
}

impl TryFrom<RawFrettedNote> for FrettedNote {
    type Error = FretboardError;

    fn try_from(raw: RawFrettedNote) -> FretboardResult<Self> {
        Self::new(raw.string_number, raw.fret_number)
    }
}

#[derive(Deserialize)]
struct RawMute {
    string_number: u32,
}

impl TryFrom<RawMute> for Mute {
    type Error = FretboardError;

    fn try_from(raw: RawMute) -> FretboardResult<Self> {
        Self::new(raw.string_number)
    }
}
