pub mod collection;
pub mod fingering;
pub mod layout;
pub mod marker;
pub mod pitch;
pub mod tuning;
pub mod window;

pub use collection::{
    find_fretted_note, find_muted_string, find_open_string, replace_on_same_string,
};
pub use fingering::{Fingering, SEGMENT_SEPARATOR, encode_fingering, parse_fingering};
pub use layout::{DEFAULT_SCALE, DiagramMetrics};
pub use marker::{FrettedNote, MUTE_SYMBOL, Marker, Mute};
pub use pitch::PitchClass;
pub use tuning::{FALLBACK_OPEN_PITCH, Tuning};
pub use window::{FretWindow, normalize_window};
