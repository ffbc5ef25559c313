use crate::config::ParameterKey;
use crate::host::{HostClient, Parameter};
use crate::logging::Logger;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParameterSet {
    values: BTreeMap<ParameterKey, String>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: ParameterKey, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: ParameterKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    pub fn get(&self, key: ParameterKey) -> &str {
        self.values.get(&key).map(String::as_str).unwrap_or("")
    }
}

pub fn fetch_parameter<H: HostClient>(host: &H, name: &str, logger: &mut Logger) -> String {
    match host.parameters() {
        Ok(parameters) => lookup(&parameters, name, logger),
        Err(err) => {
            logger.warn(
                "parameter.fetch_failed",
                format!("fetchParameter({name}) failed: {err}"),
            );
            String::new()
        }
    }
}

pub fn fetch_parameter_set<H: HostClient>(
    host: &H,
    bindings: &BTreeMap<ParameterKey, String>,
    logger: &mut Logger,
) -> ParameterSet {
    let mut set = ParameterSet::new();
    let parameters = match host.parameters() {
        Ok(parameters) => parameters,
        Err(err) => {
            logger.warn(
                "parameter.fetch_failed",
                format!("parameter collection unavailable: {err}"),
            );
            for key in ParameterKey::ALL {
                set.insert(key, "");
            }
            return set;
        }
    };

    for key in ParameterKey::ALL {
        let value = match bindings.get(&key) {
            Some(name) => lookup(&parameters, name, logger),
            None => {
                logger.warn(
                    "parameter.unbound",
                    format!("no host parameter configured for {key}"),
                );
                String::new()
            }
        };
        set.insert(key, value);
    }
    set
}

fn lookup(parameters: &[Parameter], name: &str, logger: &mut Logger) -> String {
    match parameters.iter().find(|p| p.name == name) {
        Some(parameter) => parameter.current_value.value.clone(),
        None => {
            logger.warn(
                "parameter.missing",
                format!("parameter `{name}` not found on dashboard"),
            );
            String::new()
        }
    }
}
