mod recording;

pub use recording::RecordingSurface;

use crate::config::{ConfigError, ExtensionConfig, LaunchMode};
use crate::host::HostClient;
use crate::logging::Logger;
use crate::pipeline::{build_form_url, validate_origin, BuildError, BuildResult};
use crate::readiness::{ReadinessError, ReadinessGate, ReadinessNotifier, ReadinessState};

pub trait FormSurface {
    fn missing_elements(&self) -> Vec<String> {
        Vec::new()
    }
    fn set_trigger_enabled(&mut self, enabled: bool);
    fn navigate_frame(&mut self, url: &str);
    fn reveal_container(&mut self);
    fn open_window(&mut self, url: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    Ignored { state: ReadinessState },
    Launched(BuildResult),
    Rejected(BuildError),
}

#[derive(Debug)]
pub struct UiGate<H, S> {
    host: H,
    surface: S,
    config: ExtensionConfig,
    readiness: ReadinessGate,
    logger: Logger,
}

impl<H: HostClient, S: FormSurface> UiGate<H, S> {
    pub fn new(
        host: H,
        surface: S,
        config: ExtensionConfig,
        logger: Logger,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let readiness = ReadinessGate::new(config.readiness);
        Ok(Self {
            host,
            surface,
            config,
            readiness,
            logger,
        })
    }

    pub fn notifier(&self) -> ReadinessNotifier {
        self.readiness.notifier()
    }

    pub fn start(&mut self) -> ReadinessState {
        self.surface.set_trigger_enabled(false);

        let missing = self.surface.missing_elements();
        if !missing.is_empty() {
            return self
                .readiness
                .fail(ReadinessError::MissingElements(missing), &mut self.logger);
        }

        let state = self.readiness.await_ready(&self.host, &mut self.logger);
        if state == ReadinessState::Ready {
            self.surface.set_trigger_enabled(true);
            self.logger.info("ui.ready", "ready to open the form");
        }
        state
    }

    pub fn trigger(&mut self) -> TriggerOutcome {
        let state = self.readiness.state();
        if state != ReadinessState::Ready {
            self.logger.warn(
                "ui.trigger_ignored",
                format!("trigger ignored while host integration is {state}"),
            );
            return TriggerOutcome::Ignored { state };
        }

        // the trigger stays disabled while a build is in flight
        self.surface.set_trigger_enabled(false);
        let outcome = self.launch();
        self.surface.set_trigger_enabled(true);
        outcome
    }

    fn launch(&mut self) -> TriggerOutcome {
        let built = build_form_url(
            &self.host,
            self.readiness.state(),
            &self.config,
            &mut self.logger,
        )
        .and_then(|result| validate_origin(&result, &self.config).map(|()| result));

        let result = match built {
            Ok(result) => result,
            Err(err) => {
                self.logger.error("ui.build_rejected", err.to_string());
                return TriggerOutcome::Rejected(err);
            }
        };

        match self.config.launch_mode {
            LaunchMode::EmbeddedFrame => {
                self.surface.navigate_frame(&result.url);
                self.surface.reveal_container();
                self.logger.info("ui.frame_loaded", "form opened");
            }
            LaunchMode::NewWindow => {
                self.surface.open_window(&result.url);
                self.logger.info("ui.window_opened", "form opened in a new window");
            }
        }
        TriggerOutcome::Launched(result)
    }

    pub fn readiness_state(&self) -> ReadinessState {
        self.readiness.state()
    }

    pub fn readiness_failure(&self) -> Option<&ReadinessError> {
        self.readiness.failure()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn config(&self) -> &ExtensionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReadinessSettings;
    use crate::host::scripted::ScriptedHost;
    use crate::logging::LogLevel;

    fn ready_gate(config: ExtensionConfig) -> UiGate<ScriptedHost, RecordingSurface> {
        let readiness = ReadinessGate::new(ReadinessSettings {
            timeout_ms: 50,
            poll_interval_ms: 5,
        });
        let mut gate = UiGate {
            host: ScriptedHost::new()
                .with_dashboard("Q1 Report")
                .with_worksheet("Summary"),
            surface: RecordingSurface::new(),
            config,
            readiness,
            logger: Logger::new(),
        };
        assert_eq!(gate.start(), ReadinessState::Ready);
        gate
    }

    #[test]
    fn untrusted_origin_leaves_frame_untouched() {
        // skips `new` so the mismatched origin reaches the build
        let mut config = ExtensionConfig::new("https://forms.example.com/play?a=1");
        config.trusted_origin = Some("https://other.example.net/".to_string());
        let mut gate = ready_gate(config);

        let outcome = gate.trigger();

        assert!(matches!(
            outcome,
            TriggerOutcome::Rejected(BuildError::UntrustedOrigin { .. })
        ));
        assert!(gate.surface().frame_src.is_none());
        assert!(!gate.surface().container_visible);
        assert!(gate.surface().opened_windows.is_empty());
        assert_eq!(gate.surface().trigger_history.last(), Some(&true));
        assert_eq!(gate.logger().count(LogLevel::Error), 1);
        assert!(gate
            .logger()
            .status()
            .is_some_and(|status| status.contains("does not start with trusted origin")));
    }

    #[test]
    fn underivable_origin_is_rejected() {
        let mut gate = ready_gate(ExtensionConfig::new("not a url"));

        let outcome = gate.trigger();

        assert!(matches!(
            outcome,
            TriggerOutcome::Rejected(BuildError::MissingTrustedOrigin { .. })
        ));
        assert!(gate.surface().frame_src.is_none());
        assert_eq!(gate.surface().trigger_history.last(), Some(&true));
    }
}
