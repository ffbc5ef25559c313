mod error;
mod load;
mod settings;

pub use error::ConfigError;
pub use settings::{
    origin_prefix, ExtensionConfig, LaunchMode, ParameterKey, ReadinessSettings,
    UsernameFallback, DEFAULT_POLL_INTERVAL_MS, DEFAULT_READINESS_TIMEOUT_MS,
    DEFAULT_USERNAME_SHEET,
};
