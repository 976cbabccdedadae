use serde::{Deserialize, Serialize};

use crate::core::PitchClass;
use crate::error::{FretboardError, FretboardResult};

/// Pitch used for any string the tuning does not list.
pub const FALLBACK_OPEN_PITCH: PitchClass = PitchClass::E;

/// Open-string pitches ordered from string 1 (highest) downwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PitchClass>", into = "Vec<PitchClass>")]
pub struct Tuning {
    open_strings: Vec<PitchClass>,
}

impl Tuning {
    pub fn new(open_strings: Vec<PitchClass>) -> FretboardResult<Self> {
        if open_strings.is_empty() {
            return Err(FretboardError::InvalidData(
                "tuning must list at least one string".to_owned(),
            ));
        }
        Ok(Self { open_strings })
    }

    /// E B G D A E, string 1 first.
    #[must_use]
    pub fn standard_six_string() -> Self {
        Self {
            open_strings: vec![
                PitchClass::E,
                PitchClass::B,
                PitchClass::G,
                PitchClass::D,
                PitchClass::A,
                PitchClass::E,
            ],
        }
    }

    #[must_use]
    pub fn open_pitch(&self, string_number: u32) -> PitchClass {
        string_number
            .checked_sub(1)
            .and_then(|index| self.open_strings.get(index as usize))
            .copied()
            .unwrap_or(FALLBACK_OPEN_PITCH)
    }

    #[must_use]
    pub fn string_count(&self) -> usize {
        self.open_strings.len()
    }

    #[must_use]
    pub fn open_strings(&self) -> &[PitchClass] {
        &self.open_strings
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard_six_string()
    }
}

impl TryFrom<Vec<PitchClass>> for Tuning {
    type Error = FretboardError;

    fn try_from(open_strings: Vec<PitchClass>) -> FretboardResult<Self> {
        Self::new(open_strings)
    }
}

impl From<Tuning> for Vec<PitchClass> {
    fn from(tuning: Tuning) -> Self {
        tuning.open_strings
    }
}

#[cfg(test)]
mod tests {
    use super::Tuning;
    use crate::core::PitchClass;

    #[test]
    fn standard_tuning_maps_each_string() {
        let tuning = Tuning::standard_six_string();
        let expected = [
            PitchClass::E,
            PitchClass::B,
            PitchClass::G,
            PitchClass::D,
            PitchClass::A,
            PitchClass::E,
        ];
        for (index, pitch) in expected.into_iter().enumerate() {
            assert_eq!(tuning.open_pitch(index as u32 + 1), pitch);
        }
    }

    #[test]
    fn unlisted_strings_fall_back_to_e() {
        let tuning = Tuning::new(vec![PitchClass::G, PitchClass::D]).expect("tuning");
        assert_eq!(tuning.open_pitch(0), PitchClass::E);
        assert_eq!(tuning.open_pitch(3), PitchClass::E);
        assert_eq!(tuning.open_pitch(7), PitchClass::E);
    }

    #[test]
    fn empty_tuning_is_rejected() {
        assert!(Tuning::new(Vec::new()).is_err());
        assert!(serde_json::from_str::<Tuning>("[]").is_err());
    }

    #[test]
    fn serializes_as_pitch_names() {
        let json = serde_json::to_string(&Tuning::standard_six_string()).expect("serialize");
        assert_eq!(json, r#"["E","B","G","D","A","E"]"#);
        let drop_d: Tuning = serde_json::from_str(r#"["E","B","G","D","A","D"]"#).expect("parse");
        assert_eq!(drop_d.open_pitch(6), PitchClass::D);
    }
}
