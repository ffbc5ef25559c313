use crate::config::ExtensionConfig;
use crate::context::{resolve_context, HostContext};
use crate::host::HostClient;
use crate::logging::Logger;
use crate::parameters::{fetch_parameter_set, ParameterSet};
use crate::readiness::ReadinessState;
use crate::url_builder::build_url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildResult {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("host integration is not ready (state: {state})")]
    NotReady { state: ReadinessState },
    #[error("built url `{url}` does not start with trusted origin `{trusted_origin}`")]
    UntrustedOrigin { url: String, trusted_origin: String },
    #[error("no trusted origin configured or derivable from base url `{base_url}`")]
    MissingTrustedOrigin { base_url: String },
}

pub fn build_form_url<H: HostClient>(
    host: &H,
    readiness: ReadinessState,
    config: &ExtensionConfig,
    logger: &mut Logger,
) -> Result<BuildResult, BuildError> {
    if readiness != ReadinessState::Ready {
        return Err(BuildError::NotReady { state: readiness });
    }

    let context: HostContext = resolve_context(host, config, logger);
    let params: ParameterSet = fetch_parameter_set(host, &config.parameters, logger);
    let url = build_url(&config.base_url, &context, &params);
    logger.info("pipeline.built", format!("built form url {url}"));
    Ok(BuildResult { url })
}

pub fn validate_origin(result: &BuildResult, config: &ExtensionConfig) -> Result<(), BuildError> {
    let Some(trusted_origin) = config.effective_trusted_origin() else {
        return Err(BuildError::MissingTrustedOrigin {
            base_url: config.base_url.clone(),
        });
    };
    if result.url.starts_with(&trusted_origin) {
        Ok(())
    } else {
        Err(BuildError::UntrustedOrigin {
            url: result.url.clone(),
            trusted_origin,
        })
    }
}
