//! # Trainer Configuration
//!
//! Optional settings read from a small kebab-case document. JSON is valid
//! YAML, so hosts can pass either.
//!
//! ```yaml
//! feedback-delay-ms: 1000
//! storage-key: selectedNotes
//! default-notes: [Sol, La]
//! min-canvas-width: 500
//! ```
//!
//! Every key is optional; missing keys take the defaults above.

use crate::error::FretnoteError;
use crate::filter::SelectedNotes;
use crate::note::NaturalNote;
use serde::Deserialize;

pub const DEFAULT_FEEDBACK_DELAY_MS: u32 = 1000;
pub const DEFAULT_STORAGE_KEY: &str = "selectedNotes";
pub const DEFAULT_MIN_CANVAS_WIDTH: f64 = 500.0;

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawConfig {
    pub feedback_delay_ms: Option<u32>,
    pub storage_key: Option<String>,
    pub default_notes: Option<Vec<String>>,
    pub min_canvas_width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainerConfig {
    /// How long feedback stays up before the next position
    pub feedback_delay_ms: u32,
    /// Store key of the persisted selection
    pub storage_key: String,
    /// Selection used when nothing usable is persisted
    pub default_notes: SelectedNotes,
    /// Canvas never shrinks below this width
    pub min_canvas_width: f64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            feedback_delay_ms: DEFAULT_FEEDBACK_DELAY_MS,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_notes: SelectedNotes::default(),
            min_canvas_width: DEFAULT_MIN_CANVAS_WIDTH,
        }
    }
}

impl TrainerConfig {
    /// Parse and validate a configuration document
    pub fn from_yaml(content: &str) -> Result<Self, FretnoteError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawConfig = serde_yaml::from_str(content)
            .map_err(|e| FretnoteError::ConfigError(e.to_string()))?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, FretnoteError> {
        let defaults = Self::default();

        let feedback_delay_ms = match raw.feedback_delay_ms {
            Some(0) => {
                return Err(FretnoteError::ConfigError(
                    "feedback-delay-ms must be greater than 0".to_string(),
                ))
            }
            Some(ms) => ms,
            None => defaults.feedback_delay_ms,
        };

        let storage_key = match raw.storage_key {
            Some(key) if key.trim().is_empty() => {
                return Err(FretnoteError::ConfigError("storage-key must not be empty".to_string()))
            }
            Some(key) => key,
            None => defaults.storage_key,
        };

        let default_notes = if let Some(names) = &raw.default_notes {
            let notes = names
                .iter()
                .map(|name| name.parse::<NaturalNote>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| FretnoteError::ConfigError(format!("default-notes: {}", e)))?;
            SelectedNotes::new(notes).ok_or_else(|| {
                FretnoteError::ConfigError(
                    "default-notes must name at least 2 distinct notes".to_string(),
                )
            })?
        } else {
            defaults.default_notes
        };

        let min_canvas_width = match raw.min_canvas_width {
            Some(width) if !(width.is_finite() && width > 0.0) => {
                return Err(FretnoteError::ConfigError(format!(
                    "min-canvas-width must be a positive number: {}",
                    width
                )))
            }
            Some(width) => width,
            None => defaults.min_canvas_width,
        };

        Ok(Self {
            feedback_delay_ms,
            storage_key,
            default_notes,
            min_canvas_width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(TrainerConfig::from_yaml("").unwrap(), TrainerConfig::default());
        assert_eq!(TrainerConfig::from_yaml("{}").unwrap(), TrainerConfig::default());
    }

    #[test]
    fn test_yaml_document() {
        let config = TrainerConfig::from_yaml(
            "feedback-delay-ms: 250\nstorage-key: fretnote\ndefault-notes: [Do, Mi, Sol]\n",
        )
        .unwrap();

        assert_eq!(config.feedback_delay_ms, 250);
        assert_eq!(config.storage_key, "fretnote");
        assert_eq!(
            config.default_notes.to_vec(),
            vec![NaturalNote::Do, NaturalNote::Mi, NaturalNote::Sol]
        );
        assert_eq!(config.min_canvas_width, DEFAULT_MIN_CANVAS_WIDTH);
    }

    #[test]
    fn test_json_document() {
        let config = TrainerConfig::from_yaml(r#"{"feedback-delay-ms": 1500, "min-canvas-width": 320}"#)
            .unwrap();
        assert_eq!(config.feedback_delay_ms, 1500);
        assert_eq!(config.min_canvas_width, 320.0);
    }

    #[test]
    fn test_invalid_values() {
        let cases = [
            "feedback-delay-ms: 0",
            "storage-key: ''",
            "default-notes: [Do]",
            "default-notes: [Do, Do#]",
            "min-canvas-width: -1",
            "unknown-key: 1",
            "feedback-delay-ms: soon",
        ];
        for case in cases {
            let result = TrainerConfig::from_yaml(case);
            assert!(
                matches!(result, Err(FretnoteError::ConfigError(_))),
                "expected config error for {:?}, got {:?}",
                case,
                result
            );
        }
    }
}
