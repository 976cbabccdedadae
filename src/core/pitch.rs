use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FretboardError, FretboardResult};

/// Twelve chromatic pitch names ordered from C, used for semitone arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    #[serde(rename = "C#")]
    CSharp,
    D,
    #[serde(rename = "D#")]
    DSharp,
    E,
    F,
    #[serde(rename = "F#")]
    FSharp,
    G,
    #[serde(rename = "G#")]
    GSharp,
    A,
    #[serde(rename = "A#")]
    ASharp,
    B,
}

impl PitchClass {
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Stable position in `0..12`.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Wraps `ordinal` modulo 12.
    #[must_use]
    pub const fn from_ordinal(ordinal: u32) -> Self {
        Self::ALL[(ordinal % 12) as usize]
    }

    /// Moves up by `semitones`, wrapping at the octave.
    #[must_use]
    pub const fn transpose(self, semitones: u32) -> Self {
        Self::from_ordinal(semitones % 12 + self.ordinal() as u32)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = FretboardError;

    fn from_str(s: &str) -> FretboardResult<Self> {
        Self::ALL
            .into_iter()
            .find(|pitch| pitch.name() == s)
            .ok_or_else(|| FretboardError::InvalidData(format!("unknown pitch class `{s}`")))
    }
}
