mod config;
mod engine;
mod frame_builder;

pub use config::{DIAGRAM_CONFIG_JSON_SCHEMA_V1, DiagramConfig, MAX_FROM_FRET, MAX_TO_FRET};
pub use engine::{FretboardEngine, PressEvent};
pub use frame_builder::build_diagram_frame;
