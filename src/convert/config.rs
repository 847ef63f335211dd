//! Converter configuration
//!
//! Only the two file names can change. Defaults reproduce the fixed-name
//! behaviour (`questions.csv` in, `questions.json` out). An optional TOML
//! file can override either of them:
//!
//! ```toml
//! input = "data/questions.csv"
//! output = "public/questions.json"
//! ```
//!
//! Parsing rules (comma delimiter, `"; "` answer separator, `"` stripping)
//! are fixed, so any other key in the file is rejected.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConvertError;

/// Default input filename
pub const DEFAULT_INPUT_FILENAME: &str = "questions.csv";

/// Default output filename
pub const DEFAULT_OUTPUT_FILENAME: &str = "questions.json";

/// Settings for one conversion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConverterConfig {
    /// CSV file to read
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// JSON file to write
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_FILENAME)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILENAME)
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
        }
    }
}

impl ConverterConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConvertError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConvertError::Config(path.to_path_buf(), e.to_string()))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| ConvertError::Config(path.to_path_buf(), e.to_string()))?;
        config.validate().map_err(|e| match e {
            ConvertError::Config(_, message) => ConvertError::Config(path.to_path_buf(), message),
            other => other,
        })?;
        Ok(config)
    }

    /// Check field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConvertError> {
        let invalid = |message: String| ConvertError::Config(PathBuf::from("<config>"), message);

        if self.input.as_os_str().is_empty() {
            return Err(invalid("input path cannot be empty".to_string()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(invalid("output path cannot be empty".to_string()));
        }
        Ok(())
    }
}
