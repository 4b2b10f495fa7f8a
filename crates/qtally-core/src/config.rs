use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{QtallyError, Result};
use crate::tally::DEFAULT_THRESHOLD;

const CONFIG_FILE: &str = "qtally.toml";

/// Source file scanned when no path is given on the command line.
pub const DEFAULT_SOURCE_PATH: &str = "src/data/questions.ts";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# qtally configuration file
# Location: ./qtally.toml

[input]
# Question bank source file to scan
# Default: "src/data/questions.ts"
path = "src/data/questions.ts"

[report]
# Categories with fewer questions than this are reported as insufficient
# Default: 15
threshold = 15
"#;

/// Tool configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// Input-related configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Source file to scan
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

/// Report-related configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Insufficient-category threshold
    #[serde(default = "default_threshold")]
    pub threshold: u64,
}

fn default_input_path() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_PATH)
}

fn default_threshold() -> u64 {
    DEFAULT_THRESHOLD
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

impl Config {
    /// Load config from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| QtallyError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Default config file path (working directory).
    pub fn default_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE)
    }

    /// Initialize a config file with the default template (rich comments).
    /// An existing file is left untouched.
    pub fn init(path: &Path) -> Result<PathBuf> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if !path.exists() {
            fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path.to_path_buf())
    }
}
