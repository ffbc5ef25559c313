#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("host initialization rejected: {0}")]
    InitializationRejected(String),
    #[error("worksheet `{name}` not found on dashboard")]
    WorksheetNotFound { name: String },
    #[error("host call `{call}` failed: {reason}")]
    Call { call: String, reason: String },
}
