mod error;

pub use error::ReadinessError;

use crate::config::ReadinessSettings;
use crate::host::{HostClient, HostError};
use crate::logging::Logger;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessState {
    NotStarted,
    Waiting,
    Ready,
    Failed,
}

impl ReadinessState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Waiting => "waiting",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ready | Self::Failed)
    }
}

impl std::fmt::Display for ReadinessState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Handle the host bridge uses to announce that the integration surface has
/// been injected. Wakes a waiting gate before its next scheduled check.
#[derive(Debug, Clone)]
pub struct ReadinessNotifier {
    tx: Sender<()>,
}

impl ReadinessNotifier {
    pub fn notify(&self) {
        let _ = self.tx.send(());
    }
}

#[derive(Debug)]
pub struct ReadinessGate {
    settings: ReadinessSettings,
    state: ReadinessState,
    failure: Option<ReadinessError>,
    signal_tx: Sender<()>,
    signal_rx: Receiver<()>,
}

impl ReadinessGate {
    pub fn new(settings: ReadinessSettings) -> Self {
        let (signal_tx, signal_rx) = mpsc::channel();
        Self {
            settings,
            state: ReadinessState::NotStarted,
            failure: None,
            signal_tx,
            signal_rx,
        }
    }

    pub fn state(&self) -> ReadinessState {
        self.state
    }

    pub fn failure(&self) -> Option<&ReadinessError> {
        self.failure.as_ref()
    }

    pub fn notifier(&self) -> ReadinessNotifier {
        ReadinessNotifier {
            tx: self.signal_tx.clone(),
        }
    }

    pub fn fail(&mut self, err: ReadinessError, logger: &mut Logger) -> ReadinessState {
        if self.state.is_terminal() {
            return self.state;
        }
        let event = if err.is_environment() {
            "readiness.environment_error"
        } else {
            "readiness.initialization_error"
        };
        logger.error(event, err.to_string());
        self.failure = Some(err);
        self.state = ReadinessState::Failed;
        self.state
    }

    pub fn await_ready<H: HostClient>(&mut self, host: &H, logger: &mut Logger) -> ReadinessState {
        if self.state.is_terminal() {
            return self.state;
        }
        self.state = ReadinessState::Waiting;
        logger.info(
            "readiness.waiting",
            format!(
                "waiting up to {}ms for host integration",
                self.settings.timeout_ms
            ),
        );

        let deadline = Instant::now() + self.settings.timeout();
        while !host.is_present() {
            let now = Instant::now();
            if now >= deadline {
                return self.fail(
                    ReadinessError::HostUnavailable {
                        timeout_ms: self.settings.timeout_ms,
                    },
                    logger,
                );
            }
            let wait = (deadline - now).min(self.settings.poll_interval());
            // either a notification or the interval elapsing triggers a recheck
            let _ = self.signal_rx.recv_timeout(wait);
        }

        match host.initialize() {
            Ok(()) => {
                self.state = ReadinessState::Ready;
                logger.info("readiness.ready", "host integration initialized");
                self.state
            }
            Err(HostError::InitializationRejected(reason)) => {
                self.fail(ReadinessError::Initialization(reason), logger)
            }
            Err(err) => self.fail(ReadinessError::Initialization(err.to_string()), logger),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::scripted::ScriptedHost;

    fn settings(timeout_ms: u64, poll_interval_ms: u64) -> ReadinessSettings {
        ReadinessSettings {
            timeout_ms,
            poll_interval_ms,
        }
    }

    #[test]
    fn terminal_state_is_sticky() {
        let host = ScriptedHost::new();
        let mut logger = Logger::new();
        let mut gate = ReadinessGate::new(settings(100, 10));

        assert_eq!(gate.await_ready(&host, &mut logger), ReadinessState::Ready);
        assert_eq!(gate.await_ready(&host, &mut logger), ReadinessState::Ready);
        assert_eq!(host.init_calls(), 1);
    }

    #[test]
    fn fail_after_ready_is_ignored() {
        let host = ScriptedHost::new();
        let mut logger = Logger::new();
        let mut gate = ReadinessGate::new(settings(100, 10));
        gate.await_ready(&host, &mut logger);

        let state = gate.fail(ReadinessError::MissingElements(vec!["frame".into()]), &mut logger);

        assert_eq!(state, ReadinessState::Ready);
        assert!(gate.failure().is_none());
    }
}
