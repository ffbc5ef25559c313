#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadinessError {
    #[error("host integration surface not detected within {timeout_ms}ms")]
    HostUnavailable { timeout_ms: u64 },
    #[error("required page elements missing: {}", .0.join(", "))]
    MissingElements(Vec<String>),
    #[error("host initialization failed: {0}")]
    Initialization(String),
}

impl ReadinessError {
    pub fn is_environment(&self) -> bool {
        matches!(
            self,
            Self::HostUnavailable { .. } | Self::MissingElements(_)
        )
    }
}
