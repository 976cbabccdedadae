use thiserror::Error;

pub type FretboardResult<T> = Result<T, FretboardError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FretboardError {
    #[error("invalid fingering format: `{segment}`")]
    InvalidFingeringFormat { segment: String },

    #[error("invalid fret range: from={from_fret}, to={to_fret}")]
    InvalidFretRange { from_fret: i64, to_fret: i64 },

    #[error("invalid string number: {string_number} (strings are numbered from 1)")]
    InvalidStringNumber { string_number: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
