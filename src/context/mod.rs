mod username;

pub use username::{resolve_username, sheet_identity};

use crate::config::ExtensionConfig;
use crate::host::HostClient;
use crate::logging::Logger;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostContext {
    pub dashboard_name: String,
    pub view_name: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Value(String),
    Unresolved {
        accessor: &'static str,
        reason: String,
    },
}

impl Resolution {
    pub fn unresolved(accessor: &'static str, reason: impl Into<String>) -> Self {
        Self::Unresolved {
            accessor,
            reason: reason.into(),
        }
    }

    pub fn non_empty(&self) -> Option<&str> {
        match self {
            Self::Value(value) if !value.is_empty() => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn log_unresolved(&self, logger: &mut Logger) {
        if let Self::Unresolved { accessor, reason } = self {
            logger.warn("context.unresolved", format!("{accessor}: {reason}"));
        }
    }

    pub fn or_log(self, logger: &mut Logger) -> String {
        self.log_unresolved(logger);
        match self {
            Self::Value(value) => value,
            Self::Unresolved { .. } => String::new(),
        }
    }
}

pub fn dashboard_name<H: HostClient>(host: &H) -> Resolution {
    match host.dashboard_name() {
        Ok(name) => Resolution::Value(name.unwrap_or_default()),
        Err(err) => Resolution::unresolved("dashboard_name", err.to_string()),
    }
}

pub fn view_name<H: HostClient>(host: &H) -> Resolution {
    match host.worksheets() {
        Ok(sheets) => Resolution::Value(
            sheets
                .into_iter()
                .next()
                .map(|sheet| sheet.name)
                .unwrap_or_default(),
        ),
        Err(err) => Resolution::unresolved("view_name", err.to_string()),
    }
}

pub fn resolve_context<H: HostClient>(
    host: &H,
    config: &ExtensionConfig,
    logger: &mut Logger,
) -> HostContext {
    let dashboard_name = dashboard_name(host).or_log(logger);
    let view_name = view_name(host).or_log(logger);
    let username = resolve_username(
        host,
        &config.username_sheet,
        &config.username_fallback,
        logger,
    );
    HostContext {
        dashboard_name,
        view_name,
        username,
    }
}
