use crate::config::OutputFormat;
use crate::utils::error::{GpaError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    pub format: Option<OutputFormat>,
    pub name_margin: Option<usize>,
    pub show_errors: Option<bool>,
}

impl TomlConfig {
    /// Loads the `[report]` overrides from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| GpaError::ConfigError {
            message: format!("Cannot read config file '{}': {}", path.display(), e),
        })?;
        let config: TomlConfig = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
