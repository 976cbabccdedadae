use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_SCALE, FretWindow, Tuning, normalize_window};
use crate::error::{FretboardError, FretboardResult};

pub const DIAGRAM_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Highest fret a diagram window may start at.
pub const MAX_FROM_FRET: i64 = 24;
/// Highest (exclusive) fret a diagram window may end at.
pub const MAX_TO_FRET: i64 = 25;

/// Public diagram bootstrap configuration.
///
/// Serializable so host applications can persist/load diagram setup without
/// inventing their own format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagramConfig {
    #[serde(default)]
    pub from_fret: i64,
    #[serde(default = "default_to_fret")]
    pub to_fret: i64,
    #[serde(default = "default_string_count")]
    pub string_count: u32,
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default)]
    pub tuning: Tuning,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            from_fret: 0,
            to_fret: default_to_fret(),
            string_count: default_string_count(),
            scale: default_scale(),
            tuning: Tuning::default(),
        }
    }
}

impl DiagramConfig {
    /// Creates a config showing `from_fret..to_fret` with all other defaults.
    #[must_use]
    pub fn new(from_fret: i64, to_fret: i64) -> Self {
        Self::default().with_window(from_fret, to_fret)
    }

    #[must_use]
    pub fn with_window(mut self, from_fret: i64, to_fret: i64) -> Self {
        self.from_fret = from_fret;
        self.to_fret = to_fret;
        self
    }

    #[must_use]
    pub fn with_string_count(mut self, string_count: u32) -> Self {
        self.string_count = string_count;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Checks bounds and returns the normalized window.
    pub fn validate(&self) -> FretboardResult<FretWindow> {
        let window = validate_window_request(self.from_fret, self.to_fret)?;
        if self.string_count == 0 {
            return Err(FretboardError::InvalidData(
                "config `string_count` must be >= 1".to_owned(),
            ));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(FretboardError::InvalidData(
                "config `scale` must be finite and > 0".to_owned(),
            ));
        }
        Ok(window)
    }

    pub fn to_json_pretty(&self) -> FretboardResult<String> {
        let payload = DiagramConfigJsonContractV1 {
            schema_version: DIAGRAM_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            FretboardError::InvalidData(format!("failed to serialize diagram config: {e}"))
        })
    }

    /// Accepts a bare config object or a versioned contract payload.
    ///
    /// A payload carrying `schema_version` is always read as the contract, so
    /// errors in its inner config are reported rather than defaulted.
    pub fn from_json_str(input: &str) -> FretboardResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            FretboardError::InvalidData(format!("failed to parse diagram config json: {e}"))
        })?;

        let config = if value.get("schema_version").is_some() {
            let payload: DiagramConfigJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    FretboardError::InvalidData(format!(
                        "failed to parse diagram config contract: {e}"
                    ))
                })?;
            if payload.schema_version != DIAGRAM_CONFIG_JSON_SCHEMA_V1 {
                return Err(FretboardError::InvalidData(format!(
                    "unsupported diagram config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value::<DiagramConfig>(value).map_err(|e| {
                FretboardError::InvalidData(format!("failed to parse diagram config json: {e}"))
            })?
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct DiagramConfigJsonContractV1 {
    schema_version: u32,
    config: DiagramConfig,
}

/// Normalizes a window and applies the diagram's fret ceiling.
pub(super) fn validate_window_request(from_fret: i64, to_fret: i64) -> FretboardResult<FretWindow> {
    if from_fret > MAX_FROM_FRET || to_fret > MAX_TO_FRET {
        return Err(FretboardError::InvalidFretRange { from_fret, to_fret });
    }
    normalize_window(from_fret, to_fret)
}

fn default_to_fret() -> i64 {
    12
}

fn default_string_count() -> u32 {
    6
}

fn default_scale() -> f64 {
    DEFAULT_SCALE
}
