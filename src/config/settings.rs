use super::ConfigError;
use crate::url_builder::normalize_base;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

pub const DEFAULT_USERNAME_SHEET: &str = "Username";
pub const DEFAULT_READINESS_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum ParameterKey {
    IssuerName,
    StartDate,
    EndDate,
}

impl ParameterKey {
    pub const ALL: [ParameterKey; 3] = [Self::IssuerName, Self::StartDate, Self::EndDate];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::IssuerName => "IssuerName",
            Self::StartDate => "StartDate",
            Self::EndDate => "EndDate",
        }
    }

    pub fn default_host_name(self) -> &'static str {
        match self {
            Self::IssuerName => "Issuer Name Param",
            Self::StartDate => "Start Date",
            Self::EndDate => "End Date",
        }
    }
}

impl std::fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchMode {
    #[default]
    EmbeddedFrame,
    NewWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReadinessSettings {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for ReadinessSettings {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_READINESS_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl ReadinessSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct UsernameFallback {
    #[serde(default)]
    pub use_display_name: bool,
    #[serde(default)]
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtensionConfig {
    pub base_url: String,
    #[serde(default)]
    pub trusted_origin: Option<String>,
    #[serde(default = "default_username_sheet")]
    pub username_sheet: String,
    #[serde(default = "default_parameter_bindings")]
    pub parameters: BTreeMap<ParameterKey, String>,
    #[serde(default)]
    pub readiness: ReadinessSettings,
    #[serde(default)]
    pub launch_mode: LaunchMode,
    #[serde(default)]
    pub username_fallback: UsernameFallback,
}

impl ExtensionConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            trusted_origin: None,
            username_sheet: default_username_sheet(),
            parameters: default_parameter_bindings(),
            readiness: ReadinessSettings::default(),
            launch_mode: LaunchMode::default(),
            username_fallback: UsernameFallback::default(),
        }
    }

    pub fn effective_trusted_origin(&self) -> Option<String> {
        match &self.trusted_origin {
            Some(origin) => Some(origin.trim().to_string()),
            None => origin_prefix(&normalize_base(self.base_url.trim())),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = normalize_base(self.base_url.trim());
        if base.is_empty() {
            return Err(ConfigError::Validation(
                "base_url must be non-empty".to_string(),
            ));
        }
        let Some(base_origin) = origin_prefix(&base) else {
            return Err(ConfigError::Validation(format!(
                "base_url `{base}` must be an absolute http or https url"
            )));
        };
        if !base.starts_with(&base_origin) {
            return Err(ConfigError::Validation(format!(
                "base_url `{base}` must include a path after the host"
            )));
        }

        if let Some(trusted) = &self.trusted_origin {
            let trusted = trusted.trim();
            if origin_prefix(trusted).is_none() {
                return Err(ConfigError::Validation(format!(
                    "trusted_origin `{trusted}` must be an absolute http or https url"
                )));
            }
            if !base.starts_with(trusted) {
                return Err(ConfigError::Validation(format!(
                    "base_url `{base}` does not start with trusted_origin `{trusted}`"
                )));
            }
        }

        if self.username_sheet.trim().is_empty() {
            return Err(ConfigError::Validation(
                "username_sheet must be non-empty".to_string(),
            ));
        }

        for (key, host_name) in &self.parameters {
            if host_name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "parameter binding for `{key}` must name a host parameter"
                )));
            }
        }

        if self.readiness.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "readiness.timeout_ms must be > 0".to_string(),
            ));
        }
        if self.readiness.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "readiness.poll_interval_ms must be > 0".to_string(),
            ));
        }
        if self.readiness.poll_interval_ms > self.readiness.timeout_ms {
            return Err(ConfigError::Validation(format!(
                "readiness.poll_interval_ms ({}) must not exceed readiness.timeout_ms ({})",
                self.readiness.poll_interval_ms, self.readiness.timeout_ms
            )));
        }
        Ok(())
    }
}

pub fn origin_prefix(url: &str) -> Option<String> {
    let (scheme, rest) = url.split_once("://")?;
    if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
        return None;
    }
    let host_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let host = &rest[..host_end];
    if host.is_empty() || host.chars().any(char::is_whitespace) {
        return None;
    }
    Some(format!("{scheme}://{host}/"))
}

fn default_username_sheet() -> String {
    DEFAULT_USERNAME_SHEET.to_string()
}

fn default_parameter_bindings() -> BTreeMap<ParameterKey, String> {
    ParameterKey::ALL
        .into_iter()
        .map(|key| (key, key.default_host_name().to_string()))
        .collect()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_READINESS_TIMEOUT_MS
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}
