//! Parser configuration: trigger and delimiters

use crate::error::{Result, SimpletagsError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_TRIGGER: &str = "tag:";
pub const DEFAULT_LEFT_DELIMITER: &str = "{";
pub const DEFAULT_RIGHT_DELIMITER: &str = "}";

/// Characters markers are built from, compared the way the opening-tag regex
/// compares them
fn marker_char_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^[a-z0-9_]$").unwrap())
}

/// Tag syntax settings
///
/// Missing keys fall back to defaults and unknown keys are ignored, so any
/// TOML table can be read as a config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub trigger: String,
    pub left_delimiter: String,
    pub right_delimiter: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            trigger: DEFAULT_TRIGGER.to_string(),
            left_delimiter: DEFAULT_LEFT_DELIMITER.to_string(),
            right_delimiter: DEFAULT_RIGHT_DELIMITER.to_string(),
        }
    }
}

impl ParserConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: ParserConfig = toml::from_str(contents)
            .map_err(|e| SimpletagsError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the scanner cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.left_delimiter.is_empty() {
            return Err(SimpletagsError::Config(
                "Left delimiter must not be empty".to_string(),
            ));
        }
        // Every replaced tag must remove a character no marker can put back,
        // or the scan loop never runs out of opening sequences
        let marker_like = self
            .left_delimiter
            .chars()
            .all(|c| marker_char_regex().is_match(c.encode_utf8(&mut [0; 4])));
        if marker_like {
            return Err(SimpletagsError::Config(
                "Left delimiter must contain a character other than letters, digits or underscore"
                    .to_string(),
            ));
        }
        if self.right_delimiter.is_empty() {
            return Err(SimpletagsError::Config(
                "Right delimiter must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Text that must appear in the content for a tag to be possible
    pub fn opening_sequence(&self) -> String {
        format!("{}{}", self.left_delimiter, self.trigger)
    }
}
