use super::{ConfigError, ExtensionConfig};
use std::fs;
use std::path::Path;

impl ExtensionConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse_and_validate(&raw, &path.display().to_string())
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        Self::parse_and_validate(raw, "<inline>")
    }

    fn parse_and_validate(raw: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }
}
